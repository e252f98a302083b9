//! Document viewer modal.

use leptos::prelude::*;

use crate::actions::close_modal;
use crate::app::PageContext;
use crate::components::discussion_thread::DiscussionThread;
use crate::state::document::DocumentView;
use crate::state::page::Modal;

/// Embedded PDF viewer with the document's header and discussion thread.
///
/// Populated by `actions::open_document`; stays hidden until that flow
/// marks the modal open.
#[component]
pub fn DocumentModal(ctx: PageContext) -> impl IntoView {
    let field = move |read: fn(&DocumentView) -> String| {
        move || ctx.document.with(|doc| doc.as_ref().map(read).unwrap_or_default())
    };
    let title = field(|d| d.title.clone());
    let genre = field(|d| d.genre.clone());
    let upload_date = field(|d| d.upload_date.clone());
    let viewer_src = field(|d| d.viewer_src.clone());

    view! {
        <div
            id="documentModal"
            class="modal document-modal"
            class:active=move || ctx.page.with(|p| p.is_open(Modal::Document))
        >
            <div class="modal-content">
                <div class="modal-header">
                    <div class="modal-heading">
                        <h2 id="modalDocumentTitle">{title}</h2>
                        <div class="document-meta">
                            <span id="modalDocumentGenre" class="genre-tag">{genre}</span>
                            <span id="modalDocumentDate" class="upload-date">{upload_date}</span>
                        </div>
                    </div>
                    <button class="modal-close" on:click=move |_| close_modal(ctx, Modal::Document) title="Close">
                        "✕"
                    </button>
                </div>

                <div class="modal-body">
                    <iframe id="pdfViewer" class="pdf-viewer" src=viewer_src title="Document viewer"></iframe>
                    <DiscussionThread ctx=ctx/>
                </div>
            </div>
        </div>
    }
}
