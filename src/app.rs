//! Shared reactive context and island mounting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered by the server. The client mounts a Leptos island into
//! each host element present on the page, hands every island the same
//! `PageContext`, and installs the binding table for the remaining markup.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::chat::ChatState;
use crate::state::discussion::DiscussionState;
use crate::state::document::DocumentView;
use crate::state::page::PageState;
use crate::state::upload::UploadState;

/// Host element ids the islands mount into.
pub const CHAT_WIDGET_ROOT: &str = "chat-widget-root";
pub const DOCUMENT_MODAL_ROOT: &str = "document-modal-root";
pub const UPLOAD_ROOT: &str = "upload-root";
pub const TICKET_MODAL_ROOT: &str = "ticket-modal-root";

/// Reactive handles shared by every island and action on the page.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: StoredValue<ClientConfig>,
    pub page: RwSignal<PageState>,
    pub chat: RwSignal<ChatState>,
    pub document: RwSignal<Option<DocumentView>>,
    pub discussion: RwSignal<DiscussionState>,
    pub upload: RwSignal<UploadState>,
}

impl PageContext {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            page: RwSignal::new(PageState::default()),
            chat: RwSignal::new(ChatState::default()),
            document: RwSignal::new(None),
            discussion: RwSignal::new(DiscussionState::default()),
            upload: RwSignal::new(UploadState::default()),
        }
    }
}

/// Mount every island whose host element exists, then bind page markup.
#[cfg(feature = "csr")]
pub fn mount(ctx: PageContext) {
    use crate::components::{
        chat_widget::ChatWidget, document_modal::DocumentModal, ticket_modal::TicketModal, upload_panel::UploadPanel,
    };

    mount_island(CHAT_WIDGET_ROOT, move || view! { <ChatWidget ctx=ctx/> });
    mount_island(DOCUMENT_MODAL_ROOT, move || view! { <DocumentModal ctx=ctx/> });
    mount_island(UPLOAD_ROOT, move || view! { <UploadPanel ctx=ctx/> });
    mount_island(TICKET_MODAL_ROOT, move || view! { <TicketModal ctx=ctx/> });

    crate::bindings::install(move |action| crate::actions::dispatch(ctx, action));
}

#[cfg(feature = "csr")]
fn mount_island<F, N>(host_id: &str, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    use wasm_bindgen::JsCast;

    let Some(host) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(host_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::debug!("no #{host_id} on this page");
        return;
    };
    leptos::mount::mount_to(host, f).forget();
    log::debug!("mounted #{host_id}");
}
