//! Direct DOM helpers for server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Document cards, the genre list, FAQ entries and the search box are
//! rendered by the server, not by Leptos islands. The few mutations made to
//! them live here so the rest of the crate never touches `web_sys` directly.
//! Non-browser builds no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::net::types::{DocumentId, VoteCounts};

/// Class toggled on disclosure panels and modals.
pub const ACTIVE_CLASS: &str = "active";

/// Element id of the collapsible genre list.
pub const MORE_GENRES_ID: &str = "moreGenres";

/// Element id of the search box.
pub const SEARCH_INPUT_ID: &str = "searchInput";

/// Selector matching exactly one document's card.
#[must_use]
pub fn document_card_selector(id: DocumentId) -> String {
    format!("[data-document-id=\"{id}\"]")
}

/// Next `display` value for a block toggled between shown and hidden.
#[must_use]
pub fn next_display(current: &str) -> &'static str {
    if current.trim() == "block" { "none" } else { "block" }
}

/// Write fresh vote counts into the matching document card only.
pub fn patch_document_card(id: DocumentId, counts: VoteCounts) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(card)) = doc.query_selector(&document_card_selector(id)) else {
            log::debug!("no card for document {id}");
            return;
        };
        if let Ok(Some(el)) = card.query_selector(".upvote .count") {
            el.set_text_content(Some(&counts.upvotes.to_string()));
        }
        if let Ok(Some(el)) = card.query_selector(".downvote .count") {
            el.set_text_content(Some(&counts.downvotes.to_string()));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, counts);
    }
}

/// Show or hide the extra genre list.
pub fn toggle_more_genres() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MORE_GENRES_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = el.style();
        let current = style.get_property_value("display").unwrap_or_default();
        let _ = style.set_property("display", next_display(&current));
    }
}

/// Toggle `active` on the element right after `el` (the FAQ answer).
#[cfg(feature = "csr")]
pub fn toggle_next_sibling_active(el: &web_sys::Element) {
    if let Some(answer) = el.next_element_sibling() {
        let _ = answer.class_list().toggle(ACTIVE_CLASS);
    }
}

/// Trimmed value of a server-rendered `<input>`.
pub fn input_value(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        Some(input.value().trim().to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
