//! Page-scoped interaction state.
//!
//! DESIGN
//! ======
//! Replaces free-floating page globals with one owned value. Flows read the
//! open document only through `discussion_scope`, so a comment or discussion
//! vote can never target a document the user has already closed.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::net::types::DocumentId;

/// Overlay panels toggled through the `active` CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    Document,
    RaiseTicket,
}

impl Modal {
    /// Resolve a modal from its markup id (`data-close-modal="documentModal"`).
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id.trim() {
            "documentModal" => Some(Self::Document),
            "raiseTicketModal" => Some(Self::RaiseTicket),
            _ => None,
        }
    }
}

/// Chat visibility, open document, and open modals for one page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    chat_visible: bool,
    current_document_id: Option<DocumentId>,
    document_modal_open: bool,
    ticket_modal_open: bool,
}

impl PageState {
    #[must_use]
    pub fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    /// Flip chat visibility unconditionally. Returns the new visibility.
    pub fn toggle_chat(&mut self) -> bool {
        self.chat_visible = !self.chat_visible;
        self.chat_visible
    }

    /// Mark `id` as the document being viewed, before its metadata loads.
    pub fn begin_viewing(&mut self, id: DocumentId) {
        self.current_document_id = Some(id);
    }

    /// Document whose thread receives new comments and vote reloads.
    ///
    /// `None` means no document is open and the action must be skipped.
    #[must_use]
    pub fn discussion_scope(&self) -> Option<DocumentId> {
        self.current_document_id
    }

    #[must_use]
    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Document => self.document_modal_open,
            Modal::RaiseTicket => self.ticket_modal_open,
        }
    }

    pub fn open(&mut self, modal: Modal) {
        self.set_open(modal, true);
    }

    /// Hide `modal` and forget the open document, whichever modal it is.
    /// Closing a closed modal changes nothing else.
    pub fn close(&mut self, modal: Modal) {
        self.set_open(modal, false);
        self.current_document_id = None;
    }

    fn set_open(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::Document => self.document_modal_open = open,
            Modal::RaiseTicket => self.ticket_modal_open = open,
        }
    }
}
