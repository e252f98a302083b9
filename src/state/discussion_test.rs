use super::*;

fn comment(id: DiscussionId, upvotes: Option<i64>, downvotes: Option<i64>) -> Discussion {
    Discussion {
        id,
        document_id: Some(1),
        parent_id: None,
        author: Some("Ann".to_owned()),
        content: format!("comment {id}"),
        created_date: Some("2024-03-05 10:11:12".to_owned()),
        upvotes,
        downvotes,
    }
}

#[test]
fn empty_thread_reads_zero_comments() {
    let state = DiscussionState::default();
    assert_eq!(state.count_label(), "(0 comments)");
    assert!(state.views().is_empty());
}

#[test]
fn count_label_tracks_length() {
    assert_eq!(comment_count_label(1), "(1 comments)");
    assert_eq!(comment_count_label(12), "(12 comments)");
}

#[test]
fn replace_swaps_whole_thread() {
    let mut state = DiscussionState::default();
    state.replace(1, vec![comment(1, None, None), comment(2, None, None)]);
    state.replace(5, vec![comment(9, Some(2), Some(1))]);
    assert_eq!(state.document_id, Some(5));
    assert_eq!(state.comments.len(), 1);
    assert_eq!(state.views()[0].id, 9);
}

#[test]
fn replace_keeps_form_drafts() {
    let mut state = DiscussionState { content_draft: "typing".to_owned(), ..DiscussionState::default() };
    state.replace(1, Vec::new());
    assert_eq!(state.content_draft, "typing");
}

#[test]
fn view_defaults_missing_counts_to_zero() {
    let view = CommentView::from(&comment(3, None, Some(4)));
    assert_eq!(view.upvotes, 0);
    assert_eq!(view.downvotes, 4);
}

#[test]
fn view_formats_date_and_copies_text() {
    let view = CommentView::from(&comment(3, Some(1), None));
    assert_eq!(view.author, "Ann");
    assert_eq!(view.date, "3/5/2024");
    assert_eq!(view.content, "comment 3");
}

#[test]
fn comment_author_defaults_when_blank() {
    assert_eq!(comment_author("", "Anonymous"), "Anonymous");
    assert_eq!(comment_author("   ", "Anonymous"), "Anonymous");
    assert_eq!(comment_author(" Bo ", "Anonymous"), "Bo");
}

#[test]
fn view_defaults_null_author_and_date() {
    let stored = Discussion { author: None, created_date: None, ..comment(6, None, None) };
    let view = CommentView::from(&stored);
    assert_eq!(view.author, UNKNOWN_AUTHOR);
    assert_eq!(view.date, "");
    assert_eq!(view.content, "comment 6");
}

#[test]
fn thread_with_authorless_row_still_renders_every_comment() {
    let mut state = DiscussionState::default();
    let authorless = Discussion { author: None, ..comment(2, None, None) };
    state.replace(1, vec![comment(1, None, None), authorless]);
    assert_eq!(state.count_label(), "(2 comments)");
    let authors: Vec<String> = state.views().into_iter().map(|v| v.author).collect();
    assert_eq!(authors, ["Ann", "Anonymous"]);
}
