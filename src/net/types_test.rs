use super::*;

#[test]
fn vote_type_serializes_lowercase() {
    let body = VoteRequest { vote: VoteType::Down };
    assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({ "type": "down" }));
}

#[test]
fn vote_type_parse_accepts_markup_tokens() {
    assert_eq!(VoteType::parse("up"), Some(VoteType::Up));
    assert_eq!(VoteType::parse(" down "), Some(VoteType::Down));
    assert_eq!(VoteType::parse("sideways"), None);
}

#[test]
fn document_deserializes_full_server_row() {
    let doc: Document = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Dune",
        "genre": "Science Fiction",
        "summary": "Spice.",
        "filename": "dune.pdf",
        "filepath": "static/uploads/dune.pdf",
        "upload_date": "2024-03-05 10:11:12",
        "upvotes": 3,
        "downvotes": 1
    }))
    .unwrap();
    assert_eq!(doc.id, Some(7));
    assert_eq!(doc.filename, "dune.pdf");
    assert_eq!(doc.upvotes, Some(3));
}

#[test]
fn document_deserializes_minimal_fields() {
    let doc: Document = serde_json::from_value(serde_json::json!({
        "title": "T",
        "genre": "G",
        "upload_date": "2024-01-01",
        "filename": "t.txt"
    }))
    .unwrap();
    assert_eq!(doc.id, None);
    assert_eq!(doc.upvotes, None);
}

#[test]
fn discussion_accepts_null_counts() {
    let d: Discussion = serde_json::from_value(serde_json::json!({
        "id": 1,
        "document_id": 2,
        "parent_id": null,
        "author": "Ann",
        "content": "hi",
        "created_date": "2024-01-01 00:00:00",
        "upvotes": null
    }))
    .unwrap();
    assert_eq!(d.upvotes, None);
    assert_eq!(d.downvotes, None);
    assert_eq!(d.document_id, Some(2));
}

#[test]
fn upload_response_error_only_payload() {
    let r: UploadResponse = serde_json::from_value(serde_json::json!({ "error": "Invalid file type" })).unwrap();
    assert!(!r.success);
    assert_eq!(r.error.as_deref(), Some("Invalid file type"));
    assert_eq!(r.title, None);
}

#[test]
fn new_discussion_serializes_expected_keys() {
    let body = NewDiscussion { document_id: 4, author: "Anonymous".to_owned(), content: "x".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "document_id": 4, "author": "Anonymous", "content": "x" })
    );
}

#[test]
fn discussion_list_tolerates_null_author_and_date() {
    let raw = r#"[
        {"id": 1, "author": "Ann", "content": "first", "created_date": "2024-01-01 00:00:00"},
        {"id": 2, "author": null, "content": "second", "created_date": null, "upvotes": 1}
    ]"#;
    let list: Vec<Discussion> = serde_json::from_str(raw).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].author.as_deref(), Some("Ann"));
    assert_eq!(list[1].author, None);
    assert_eq!(list[1].created_date, None);
}

#[test]
fn discussion_tolerates_missing_author() {
    let d: Discussion = serde_json::from_value(serde_json::json!({ "id": 5, "content": "x" })).unwrap();
    assert_eq!(d.author, None);
    assert_eq!(d.created_date, None);
}
