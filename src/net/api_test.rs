use super::*;

#[test]
fn document_endpoints_format_expected_paths() {
    assert_eq!(document_endpoint("", 12), "/api/documents/12");
    assert_eq!(document_vote_endpoint("", 12), "/api/documents/12/vote");
}

#[test]
fn discussion_endpoints_format_expected_paths() {
    assert_eq!(discussions_endpoint(""), "/api/discussions");
    assert_eq!(document_discussions_endpoint("", 3), "/api/discussions/3");
    assert_eq!(discussion_vote_endpoint("", 9), "/api/discussions/9/vote");
}

#[test]
fn ticket_and_misc_endpoints_format_expected_paths() {
    assert_eq!(tickets_endpoint(""), "/api/tickets");
    assert_eq!(ticket_upvote_endpoint("", 5), "/api/tickets/5/upvote");
    assert_eq!(ask_endpoint(""), "/api/ask");
    assert_eq!(upload_endpoint(""), "/api/upload");
}

#[test]
fn endpoints_honor_api_base_without_double_slash() {
    assert_eq!(document_endpoint("https://pixi.example/", 1), "https://pixi.example/api/documents/1");
    assert_eq!(ask_endpoint("https://pixi.example"), "https://pixi.example/api/ask");
}

#[test]
fn not_found_error_message_matches_alert_text() {
    assert_eq!(ApiError::NotFound("Document").to_string(), "Document not found");
    assert_eq!(ApiError::Status(400).to_string(), "request failed: 400");
}
