//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page surface (`page`, `chat`, `discussion`, `document`,
//! `upload`) so each island depends on a small focused model. All of it is
//! plain data; the reactive wrappers live in `app::PageContext`.

pub mod chat;
pub mod discussion;
pub mod document;
pub mod page;
pub mod upload;
