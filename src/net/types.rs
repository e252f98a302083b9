//! Wire DTOs for the document library REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON the server emits so serde stays schema-driven.
//! Fields the server may omit or null are `Option` here and defaulted by the
//! view models, never by the wire layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Row id of a stored document.
pub type DocumentId = i64;
/// Row id of a discussion comment.
pub type DiscussionId = i64;
/// Row id of a support ticket.
pub type TicketId = i64;

/// Vote direction shared by documents and discussion comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Parse the `"up"`/`"down"` tokens used in page markup.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// A stored document as returned by `GET /api/documents/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<DocumentId>,
    pub title: String,
    pub genre: String,
    /// Server-side summary; the modal does not show it but the row carries it.
    #[serde(default)]
    pub summary: Option<String>,
    /// SQLite `CURRENT_TIMESTAMP` text, shown verbatim in the modal header.
    pub upload_date: String,
    /// Stored file name under the uploads path.
    pub filename: String,
    #[serde(default)]
    pub upvotes: Option<i64>,
    #[serde(default)]
    pub downvotes: Option<i64>,
}

/// One comment in a document's discussion thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: DiscussionId,
    #[serde(default)]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub parent_id: Option<DiscussionId>,
    /// Nullable column: the server stores whatever author the post carried.
    #[serde(default)]
    pub author: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub upvotes: Option<i64>,
    #[serde(default)]
    pub downvotes: Option<i64>,
}

/// Updated counts returned after a document vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Body of every vote request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    #[serde(rename = "type")]
    pub vote: VoteType,
}

/// Body of `POST /api/discussions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDiscussion {
    pub document_id: DocumentId,
    pub author: String,
    pub content: String,
}

/// Body of `POST /api/tickets`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
}

/// Body of `POST /api/ask`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest {
    pub question: String,
}

/// Chatbot reply.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Upload result. Error responses carry only `error`, so every field defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}
