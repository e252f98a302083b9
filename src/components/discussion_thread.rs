//! Comment thread under the document viewer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{post_comment, vote_discussion};
use crate::app::PageContext;
use crate::net::types::VoteType;
use crate::state::discussion::{CommentView, DiscussionState, NO_COMMENTS};

#[component]
pub fn DiscussionThread(ctx: PageContext) -> impl IntoView {
    view! {
        <section class="discussion-section">
            <h3 class="discussion-heading">
                "Discussion "
                <span id="commentCount" class="comment-count">
                    {move || ctx.discussion.with(DiscussionState::count_label)}
                </span>
            </h3>

            <div id="discussionThread" class="discussion-thread">
                {move || {
                    let comments = ctx.discussion.with(DiscussionState::views);
                    if comments.is_empty() {
                        view! {
                            <div class="no-comments">
                                <p>{NO_COMMENTS}</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        comments
                            .into_iter()
                            .map(|comment| view! { <Comment ctx=ctx comment=comment/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <CommentForm ctx=ctx/>
        </section>
    }
}

#[component]
fn Comment(ctx: PageContext, comment: CommentView) -> impl IntoView {
    let id = comment.id;
    let vote = move |vote: VoteType| spawn_local(vote_discussion(ctx, id, vote));

    view! {
        <div class="comment" data-comment-id=id.to_string()>
            <div class="comment-header">
                <span class="comment-author">{comment.author}</span>
                <span class="comment-date">{comment.date}</span>
            </div>
            <div class="comment-content">
                <p>{comment.content}</p>
            </div>
            <div class="comment-actions">
                <button class="comment-vote upvote" on:click=move |_| vote(VoteType::Up)>
                    <i class="fas fa-thumbs-up"></i>
                    " "
                    <span class="count">{comment.upvotes}</span>
                </button>
                <button class="comment-vote downvote" on:click=move |_| vote(VoteType::Down)>
                    <i class="fas fa-thumbs-down"></i>
                    " "
                    <span class="count">{comment.downvotes}</span>
                </button>
            </div>
        </div>
    }
}

/// Author and content inputs; posting reloads the thread.
#[component]
fn CommentForm(ctx: PageContext) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(post_comment(ctx));
    };

    view! {
        <form id="commentForm" class="comment-form" on:submit=on_submit>
            <input
                id="commentAuthor"
                type="text"
                placeholder="Your name (optional)"
                prop:value=move || ctx.discussion.with(|d| d.author_draft.clone())
                on:input=move |ev| ctx.discussion.update(|d| d.author_draft = event_target_value(&ev))
            />
            <textarea
                id="commentContent"
                rows="3"
                placeholder="Share your thoughts about this document..."
                prop:value=move || ctx.discussion.with(|d| d.content_draft.clone())
                on:input=move |ev| ctx.discussion.update(|d| d.content_draft = event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn btn-primary">
                "Post Comment"
            </button>
        </form>
    }
}
