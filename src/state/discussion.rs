//! Discussion thread snapshot and its view model.
//!
//! DESIGN
//! ======
//! Every load replaces the whole snapshot; nothing is patched in place. The
//! view model is derived from the snapshot alone so rendering stays
//! deterministic.

#[cfg(test)]
#[path = "discussion_test.rs"]
mod discussion_test;

use crate::net::types::{Discussion, DiscussionId, DocumentId};
use crate::util::dates::format_comment_date;

/// Author shown for a stored comment that has none.
pub const UNKNOWN_AUTHOR: &str = "Anonymous";

/// Placeholder shown for a thread with no comments.
pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";

/// Comments for one document, plus the comment form drafts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscussionState {
    pub document_id: Option<DocumentId>,
    pub comments: Vec<Discussion>,
    pub author_draft: String,
    pub content_draft: String,
}

impl DiscussionState {
    /// Replace the thread with a freshly fetched list.
    pub fn replace(&mut self, document_id: DocumentId, comments: Vec<Discussion>) {
        self.document_id = Some(document_id);
        self.comments = comments;
    }

    #[must_use]
    pub fn count_label(&self) -> String {
        comment_count_label(self.comments.len())
    }

    #[must_use]
    pub fn views(&self) -> Vec<CommentView> {
        self.comments.iter().map(CommentView::from).collect()
    }
}

/// `"(N comments)"` label next to the thread heading.
#[must_use]
pub fn comment_count_label(count: usize) -> String {
    format!("({count} comments)")
}

/// Author to send for a comment: the draft, or `anonymous` when it is blank.
#[must_use]
pub fn comment_author(draft: &str, anonymous: &str) -> String {
    let author = draft.trim();
    if author.is_empty() { anonymous.to_owned() } else { author.to_owned() }
}

/// Display-ready fields of one comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentView {
    pub id: DiscussionId,
    pub author: String,
    pub date: String,
    pub content: String,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl From<&Discussion> for CommentView {
    fn from(d: &Discussion) -> Self {
        Self {
            id: d.id,
            author: d
                .author
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_owned(),
            date: d.created_date.as_deref().map(format_comment_date).unwrap_or_default(),
            content: d.content.clone(),
            upvotes: d.upvotes.unwrap_or(0),
            downvotes: d.downvotes.unwrap_or(0),
        }
    }
}
