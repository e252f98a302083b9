//! Leptos islands mounted into server-rendered pages.

pub mod chat_widget;
pub mod discussion_thread;
pub mod document_modal;
pub mod ticket_modal;
pub mod upload_panel;
