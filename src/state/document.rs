//! Document viewer modal contents.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::net::types::Document;

/// Header fields and embedded viewer source for the open document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentView {
    pub title: String,
    pub genre: String,
    pub upload_date: String,
    pub viewer_src: String,
}

impl DocumentView {
    #[must_use]
    pub fn new(doc: &Document, uploads_path: &str) -> Self {
        Self {
            title: doc.title.clone(),
            genre: doc.genre.clone(),
            upload_date: doc.upload_date.clone(),
            viewer_src: document_file_url(uploads_path, &doc.filename),
        }
    }
}

/// URL of a stored document file.
#[must_use]
pub fn document_file_url(uploads_path: &str, filename: &str) -> String {
    format!("{}/{}", uploads_path.trim_end_matches('/'), filename.trim_start_matches('/'))
}
