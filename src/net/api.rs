//! REST helpers for the document library endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers in `actions` decide per
//! flow whether a failure is surfaced, logged, or swallowed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AskResponse, Discussion, DiscussionId, Document, DocumentId, NewDiscussion, TicketId, VoteCounts, VoteType,
};
#[cfg(feature = "csr")]
use super::types::{AskRequest, NewTicket, UploadResponse, VoteRequest};
use crate::config::ClientConfig;

/// Failure modes of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_endpoint(base: &str, id: DocumentId) -> String {
    join(base, &format!("/api/documents/{id}"))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_vote_endpoint(base: &str, id: DocumentId) -> String {
    join(base, &format!("/api/documents/{id}/vote"))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn ticket_upvote_endpoint(base: &str, id: TicketId) -> String {
    join(base, &format!("/api/tickets/{id}/upvote"))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn tickets_endpoint(base: &str) -> String {
    join(base, "/api/tickets")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn discussions_endpoint(base: &str) -> String {
    join(base, "/api/discussions")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_discussions_endpoint(base: &str, document_id: DocumentId) -> String {
    join(base, &format!("/api/discussions/{document_id}"))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn discussion_vote_endpoint(base: &str, id: DiscussionId) -> String {
    join(base, &format!("/api/discussions/{id}/vote"))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn ask_endpoint(base: &str) -> String {
    join(base, "/api/ask")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn upload_endpoint(base: &str) -> String {
    join(base, "/api/upload")
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

/// Record a vote on a document via `POST /api/documents/{id}/vote`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a count pair.
pub async fn vote_document(config: &ClientConfig, id: DocumentId, vote: VoteType) -> Result<VoteCounts, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json(&document_vote_endpoint(&config.api_base, id), &VoteRequest { vote }).await?;
        resp.json::<VoteCounts>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id, vote);
        Err(ApiError::Unavailable)
    }
}

/// Upvote a ticket via `POST /api/tickets/{id}/upvote`. The body is ignored.
///
/// # Errors
///
/// Returns an error if the request cannot be sent.
pub async fn upvote_ticket(config: &ClientConfig, id: TicketId) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::post(&ticket_upvote_endpoint(&config.api_base, id))
            .send()
            .await
            .map_err(transport)?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch document metadata via `GET /api/documents/{id}`.
///
/// # Errors
///
/// Returns `ApiError::NotFound` for any non-OK status, or a transport/decode
/// error.
pub async fn fetch_document(config: &ClientConfig, id: DocumentId) -> Result<Document, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&document_endpoint(&config.api_base, id))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::NotFound("Document"));
        }
        resp.json::<Document>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a document's discussion thread via `GET /api/discussions/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Status` for a non-OK status, or a transport/decode error.
pub async fn fetch_discussions(config: &ClientConfig, document_id: DocumentId) -> Result<Vec<Discussion>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&document_discussions_endpoint(&config.api_base, document_id))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Discussion>>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, document_id);
        Err(ApiError::Unavailable)
    }
}

/// Post a comment via `POST /api/discussions`.
///
/// # Errors
///
/// Returns `ApiError::Status` when the server rejects the comment.
pub async fn post_discussion(config: &ClientConfig, comment: &NewDiscussion) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json(&discussions_endpoint(&config.api_base), comment).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, comment);
        Err(ApiError::Unavailable)
    }
}

/// Record a vote on a comment via `POST /api/discussions/{id}/vote`.
///
/// The returned counts are not used; the thread is reloaded instead.
///
/// # Errors
///
/// Returns an error if the request cannot be sent.
pub async fn vote_discussion(config: &ClientConfig, id: DiscussionId, vote: VoteType) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(&discussion_vote_endpoint(&config.api_base, id), &VoteRequest { vote }).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id, vote);
        Err(ApiError::Unavailable)
    }
}

/// Create a ticket via `POST /api/tickets`.
///
/// # Errors
///
/// Returns `ApiError::Status` when the server rejects the ticket.
pub async fn create_ticket(config: &ClientConfig, title: &str, description: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = NewTicket { title: title.to_owned(), description: description.to_owned() };
        let resp = post_json(&tickets_endpoint(&config.api_base), &body).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, title, description);
        Err(ApiError::Unavailable)
    }
}

/// Ask the chatbot via `POST /api/ask`.
///
/// # Errors
///
/// Returns an error if the request fails or the body has no `answer`.
pub async fn ask(config: &ClientConfig, question: &str) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = AskRequest { question: question.to_owned() };
        let resp = post_json(&ask_endpoint(&config.api_base), &body).await?;
        resp.json::<AskResponse>().await.map_err(decode)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, question);
        Err(ApiError::Unavailable)
    }
}

/// Upload a file with its title as multipart form data via `POST /api/upload`.
///
/// The body is decoded whatever the status, since rejections carry `{error}`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// body is not JSON.
#[cfg(feature = "csr")]
pub async fn upload_document(
    config: &ClientConfig,
    file: &web_sys::File,
    title: &str,
) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("could not build form data".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;
    form.append_with_str("title", title)
        .map_err(|_| ApiError::Transport("could not attach title".to_owned()))?;
    let resp = gloo_net::http::Request::post(&upload_endpoint(&config.api_base))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    resp.json::<UploadResponse>().await.map_err(decode)
}
