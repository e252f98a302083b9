use super::*;

fn doc() -> Document {
    Document {
        id: Some(2),
        title: "Dune".to_owned(),
        genre: "Science Fiction".to_owned(),
        summary: None,
        upload_date: "2024-03-05 10:11:12".to_owned(),
        filename: "dune.pdf".to_owned(),
        upvotes: Some(1),
        downvotes: None,
    }
}

#[test]
fn view_copies_header_fields() {
    let view = DocumentView::new(&doc(), "/static/uploads");
    assert_eq!(view.title, "Dune");
    assert_eq!(view.genre, "Science Fiction");
    assert_eq!(view.upload_date, "2024-03-05 10:11:12");
}

#[test]
fn viewer_points_at_uploads_path() {
    let view = DocumentView::new(&doc(), "/static/uploads");
    assert_eq!(view.viewer_src, "/static/uploads/dune.pdf");
}

#[test]
fn document_file_url_normalizes_slashes() {
    assert_eq!(document_file_url("/static/uploads/", "a.txt"), "/static/uploads/a.txt");
    assert_eq!(document_file_url("https://cdn.test/files", "/b.pdf"), "https://cdn.test/files/b.pdf");
}
