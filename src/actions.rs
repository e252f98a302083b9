//! User-action flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! One function per gesture: read state, call `net::api`, write state. Flows
//! run as independent local tasks with no debouncing or cancellation, so two
//! votes on the same item can be in flight at once.
//!
//! ERROR HANDLING
//! ==============
//! Failures are terminal for the gesture that caused them. Only the chat
//! (apology message), document open (alert) and upload (inline message)
//! flows surface anything to the user; the rest log and move on.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::PageContext;
use crate::bindings::PageAction;
use crate::net::api::{self, ApiError};
use crate::net::types::{DiscussionId, DocumentId, NewDiscussion, TicketId, VoteType};
use crate::state::chat::ChatState;
use crate::state::discussion::{DiscussionState, comment_author};
use crate::state::document::DocumentView;
use crate::state::page::{Modal, PageState};
use crate::util::{dom, navigation};

/// Route a bound page gesture to its flow.
pub fn dispatch(ctx: PageContext, action: PageAction) {
    match action {
        PageAction::ToggleChat => toggle_chat(ctx),
        PageAction::SuggestQuestion(question) => suggest_question(ctx, question),
        PageAction::ShowRaiseTicket => show_raise_ticket(ctx),
        PageAction::CloseModal(modal) => close_modal(ctx, modal),
        PageAction::OpenDocument(id) => spawn_local(open_document(ctx, id)),
        PageAction::VoteDocument(id, vote) => spawn_local(vote_document(ctx, id, vote)),
        PageAction::UpvoteTicket(id) => spawn_local(upvote_ticket(ctx, id)),
        PageAction::PerformSearch => perform_search(),
        PageAction::FilterByGenre(genre) => filter_by_genre(genre.as_deref()),
        PageAction::ToggleMoreGenres => dom::toggle_more_genres(),
    }
}

// =============================================================
// Chat
// =============================================================

pub fn toggle_chat(ctx: PageContext) {
    ctx.page.update(|p| {
        p.toggle_chat();
    });
}

/// Put `question` in the chat input and send it straight away.
pub fn suggest_question(ctx: PageContext, question: String) {
    ctx.chat.update(|c| c.draft = question);
    send_message(ctx);
}

/// Send the chat draft. Blank drafts are ignored.
pub fn send_message(ctx: PageContext) {
    let mut question = None;
    ctx.chat.update(|c| question = c.take_question());
    let Some(question) = question else {
        return;
    };
    spawn_local(async move {
        let config = ctx.config.get_value();
        match api::ask(&config, &question).await {
            Ok(reply) => ctx.chat.update(|c| c.push_answer(reply.answer)),
            Err(e) => {
                log::warn!("chat request failed: {e}");
                ctx.chat.update(ChatState::push_apology);
            }
        }
    });
}

/// Open the ticket modal from the chat widget, toggling the widget as well.
pub fn show_raise_ticket(ctx: PageContext) {
    ctx.page.update(|p| {
        p.open(Modal::RaiseTicket);
        p.toggle_chat();
    });
}

// =============================================================
// Modals & documents
// =============================================================

pub fn close_modal(ctx: PageContext, modal: Modal) {
    ctx.page.update(|p| p.close(modal));
}

/// Load a document and its thread, then reveal the viewer modal.
pub async fn open_document(ctx: PageContext, id: DocumentId) {
    ctx.page.update(|p| p.begin_viewing(id));
    let config = ctx.config.get_value();
    match api::fetch_document(&config, id).await {
        Ok(doc) => {
            ctx.document.set(Some(DocumentView::new(&doc, &config.uploads_path)));
            load_discussions(ctx, id).await;
            ctx.page.update(|p| p.open(Modal::Document));
        }
        Err(e) => {
            log::error!("Error loading document: {e}");
            dom::alert(&format!("Error loading document: {e}"));
        }
    }
}

// =============================================================
// Discussions
// =============================================================

/// Replace the thread with the server's current list for `document_id`.
/// A non-OK answer leaves the thread as it was.
pub async fn load_discussions(ctx: PageContext, document_id: DocumentId) {
    let config = ctx.config.get_value();
    match api::fetch_discussions(&config, document_id).await {
        Ok(list) => ctx.discussion.update(|d| d.replace(document_id, list)),
        Err(ApiError::Status(status)) => log::debug!("discussions for {document_id} unavailable: {status}"),
        Err(e) => log::error!("Error loading discussions: {e}"),
    }
}

/// Thread to reload after a discussion vote or comment: the document still
/// open when the request finishes, if any.
fn thread_to_reload(page: &PageState) -> Option<DocumentId> {
    page.discussion_scope()
}

/// Comment body for the open document. `None` when no document is open.
/// Content is sent as typed.
fn comment_submission(page: &PageState, thread: &DiscussionState, anonymous: &str) -> Option<NewDiscussion> {
    let document_id = page.discussion_scope()?;
    Some(NewDiscussion {
        document_id,
        author: comment_author(&thread.author_draft, anonymous),
        content: thread.content_draft.clone(),
    })
}

async fn reload_open_thread(ctx: PageContext) {
    if let Some(document_id) = ctx.page.with_untracked(thread_to_reload) {
        load_discussions(ctx, document_id).await;
    }
}

/// Vote on a comment, then reload the open document's thread.
pub async fn vote_discussion(ctx: PageContext, id: DiscussionId, vote: VoteType) {
    let config = ctx.config.get_value();
    if let Err(e) = api::vote_discussion(&config, id, vote).await {
        log::error!("Error voting on discussion: {e}");
        return;
    }
    reload_open_thread(ctx).await;
}

/// Post the comment form for the open document. Skipped when none is open.
pub async fn post_comment(ctx: PageContext) {
    let config = ctx.config.get_value();
    let comment = ctx.page.with_untracked(|page| {
        ctx.discussion.with_untracked(|thread| comment_submission(page, thread, &config.anonymous_author))
    });
    let Some(comment) = comment else {
        log::debug!("comment submitted with no open document");
        return;
    };
    match api::post_discussion(&config, &comment).await {
        Ok(()) => {
            ctx.discussion.update(|d| d.content_draft.clear());
            reload_open_thread(ctx).await;
        }
        Err(e) => log::error!("Error posting comment: {e}"),
    }
}

// =============================================================
// Voting
// =============================================================

/// Vote on a document and patch that document's card counts in place.
pub async fn vote_document(ctx: PageContext, id: DocumentId, vote: VoteType) {
    let config = ctx.config.get_value();
    match api::vote_document(&config, id, vote).await {
        Ok(counts) => dom::patch_document_card(id, counts),
        Err(e) => log::error!("Error voting: {e}"),
    }
}

/// Upvote a ticket and reload the page to show the new count.
pub async fn upvote_ticket(ctx: PageContext, id: TicketId) {
    let config = ctx.config.get_value();
    match api::upvote_ticket(&config, id).await {
        Ok(()) => navigation::reload(),
        Err(e) => log::error!("Error upvoting ticket: {e}"),
    }
}

// =============================================================
// Tickets
// =============================================================

/// Create a ticket; on success close the modal and reload the page.
pub async fn submit_ticket(ctx: PageContext, title: String, description: String) {
    let config = ctx.config.get_value();
    match api::create_ticket(&config, &title, &description).await {
        Ok(()) => {
            close_modal(ctx, Modal::RaiseTicket);
            navigation::reload();
        }
        Err(e) => log::error!("Error creating ticket: {e}"),
    }
}

// =============================================================
// Search & filter
// =============================================================

/// Navigate to the current URL with `search` set from the search box.
pub fn perform_search() {
    let Some(query) = dom::input_value(dom::SEARCH_INPUT_ID) else {
        return;
    };
    let Some(href) = navigation::current_href() else {
        return;
    };
    match navigation::search_url(&href, &query) {
        Ok(url) => navigation::navigate(&url),
        Err(e) => log::error!("cannot apply search to {href}: {e}"),
    }
}

/// Navigate to the current URL with `genre` set, or removed when empty.
pub fn filter_by_genre(genre: Option<&str>) {
    let Some(href) = navigation::current_href() else {
        return;
    };
    match navigation::genre_filter_url(&href, genre) {
        Ok(url) => navigation::navigate(&url),
        Err(e) => log::error!("cannot apply genre filter to {href}: {e}"),
    }
}

// =============================================================
// Upload
// =============================================================

/// Upload `file` with the title from the form.
///
/// Starts the simulated progress ticker alongside the request. A rejected
/// upload resets the panel after the configured delay; a transport failure
/// leaves its message up with no control to dismiss it, until the page reloads.
#[cfg(feature = "csr")]
pub fn process_upload(ctx: PageContext, file: Option<web_sys::File>) {
    use crate::state::upload::NO_FILE_SELECTED;
    use crate::util::progress::SimulatedProgress;
    use crate::util::timer::sleep_ms;

    let Some(file) = file else {
        dom::alert(NO_FILE_SELECTED);
        return;
    };
    let config = ctx.config.get_value();
    let progress = SimulatedProgress::new(config.progress_step, config.progress_ceiling);
    let mut started = None;
    ctx.upload.update(|u| started = u.begin_upload(progress, &config.untitled_document));
    let Some((run, title)) = started else {
        dom::alert(NO_FILE_SELECTED);
        return;
    };
    log::info!("uploading {} as {title:?}", file.name());

    let tick_ms = config.progress_tick_ms;
    spawn_local(async move {
        loop {
            sleep_ms(tick_ms).await;
            let mut keep_ticking = false;
            ctx.upload.update(|u| keep_ticking = u.tick(run));
            if !keep_ticking {
                break;
            }
        }
    });

    spawn_local(async move {
        match api::upload_document(&config, &file, &title).await {
            Ok(response) => {
                let rejected = !response.success;
                ctx.upload.update(|u| u.apply_response(run, response));
                if rejected {
                    sleep_ms(config.upload_error_reset_ms).await;
                    ctx.upload.update(|u| u.auto_reset(run));
                }
            }
            Err(e) => {
                log::error!("upload failed: {e}");
                ctx.upload.update(|u| u.fail_transport(run, &e.to_string()));
            }
        }
    });
}
