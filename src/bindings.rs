//! Binding table for server-rendered page controls.
//!
//! ARCHITECTURE
//! ============
//! Leptos islands wire their own events. Everything else on the page (document
//! cards, ticket rows, genre filters, search box, FAQ) is matched through
//! `BINDINGS`: one delegated listener per event type on `document`, which
//! walks the table in order and resolves the first matching selector into a
//! `PageAction` from the element's `data-*` attributes.
//!
//! Resolution is pure so the table can be tested without a DOM. Order
//! matters: a vote button inside a clickable card must match before the card.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::net::types::{DocumentId, TicketId, VoteType};
use crate::state::page::Modal;

/// DOM events the table listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Keypress,
}

impl EventKind {
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Keypress => "keypress",
        }
    }
}

/// Which resolver turns a matched element into an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    ToggleChat,
    SuggestQuestion,
    RaiseTicket,
    CloseModal,
    VoteDocument,
    OpenDocument,
    UpvoteTicket,
    Search,
    SearchOnEnter,
    FilterGenre,
    ToggleMoreGenres,
    ToggleFaq,
}

impl ActionKind {
    /// Applied to the matched element in place rather than dispatched as a
    /// `PageAction`.
    #[must_use]
    pub fn is_element_local(self) -> bool {
        self == Self::ToggleFaq
    }
}

/// One `(event, selector) -> action` row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub event: EventKind,
    pub selector: &'static str,
    pub action: ActionKind,
}

const fn click(selector: &'static str, action: ActionKind) -> Binding {
    Binding { event: EventKind::Click, selector, action }
}

pub const BINDINGS: &[Binding] = &[
    click("[data-toggle-chat]", ActionKind::ToggleChat),
    click("[data-suggest-question]", ActionKind::SuggestQuestion),
    click("[data-raise-ticket]", ActionKind::RaiseTicket),
    click("[data-close-modal]", ActionKind::CloseModal),
    click("[data-vote-document]", ActionKind::VoteDocument),
    click("[data-upvote-ticket]", ActionKind::UpvoteTicket),
    click("[data-open-document]", ActionKind::OpenDocument),
    click("#searchButton", ActionKind::Search),
    Binding { event: EventKind::Keypress, selector: "#searchInput", action: ActionKind::SearchOnEnter },
    click("[data-genre-filter]", ActionKind::FilterGenre),
    click("#moreGenresToggle", ActionKind::ToggleMoreGenres),
    click(".faq-question", ActionKind::ToggleFaq),
];

/// A user gesture on server-rendered markup, ready to dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    ToggleChat,
    SuggestQuestion(String),
    ShowRaiseTicket,
    CloseModal(Modal),
    OpenDocument(DocumentId),
    VoteDocument(DocumentId, VoteType),
    UpvoteTicket(TicketId),
    PerformSearch,
    /// `None` clears the filter.
    FilterByGenre(Option<String>),
    ToggleMoreGenres,
}

fn id_attr(attr: &impl Fn(&str) -> Option<String>, name: &str) -> Option<i64> {
    attr(name)?.trim().parse().ok()
}

/// Build the action for a matched element.
///
/// `attr` reads an attribute of the matched element; `key` is the keyboard
/// key for key events. Returns `None` when required attributes are missing or
/// malformed, the key does not trigger the action, or the action is
/// element-local.
pub fn resolve(kind: ActionKind, attr: impl Fn(&str) -> Option<String>, key: Option<&str>) -> Option<PageAction> {
    match kind {
        ActionKind::ToggleChat => Some(PageAction::ToggleChat),
        ActionKind::SuggestQuestion => {
            let question = attr("data-suggest-question").filter(|q| !q.trim().is_empty())?;
            Some(PageAction::SuggestQuestion(question))
        }
        ActionKind::RaiseTicket => Some(PageAction::ShowRaiseTicket),
        ActionKind::CloseModal => {
            let modal = Modal::from_element_id(&attr("data-close-modal")?)?;
            Some(PageAction::CloseModal(modal))
        }
        ActionKind::VoteDocument => {
            let id = id_attr(&attr, "data-vote-document")?;
            let vote = VoteType::parse(&attr("data-vote")?)?;
            Some(PageAction::VoteDocument(id, vote))
        }
        ActionKind::OpenDocument => Some(PageAction::OpenDocument(id_attr(&attr, "data-open-document")?)),
        ActionKind::UpvoteTicket => Some(PageAction::UpvoteTicket(id_attr(&attr, "data-upvote-ticket")?)),
        ActionKind::Search => Some(PageAction::PerformSearch),
        ActionKind::SearchOnEnter => (key == Some("Enter")).then_some(PageAction::PerformSearch),
        ActionKind::FilterGenre => {
            let genre = attr("data-genre-filter").filter(|g| !g.is_empty());
            Some(PageAction::FilterByGenre(genre))
        }
        ActionKind::ToggleMoreGenres => Some(PageAction::ToggleMoreGenres),
        ActionKind::ToggleFaq => None,
    }
}

/// Whether the browser's default behavior (link follow, form submit) is
/// suppressed for a resolved action.
#[must_use]
pub fn prevents_default(kind: ActionKind) -> bool {
    !matches!(kind, ActionKind::SearchOnEnter | ActionKind::ToggleFaq)
}

/// Install one delegated listener per event type on `document`.
///
/// Listeners live for the page lifetime. Element-local rows (FAQ entries) are
/// applied to the matched element here; every other row goes to `dispatch`.
#[cfg(feature = "csr")]
pub fn install(dispatch: impl Fn(PageAction) + 'static) {
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let dispatch = Rc::new(dispatch);

    for event in [EventKind::Click, EventKind::Keypress] {
        let dispatch = Rc::clone(&dispatch);
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let key = ev.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key);
            for binding in BINDINGS.iter().filter(|b| b.event == event) {
                let Ok(Some(el)) = target.closest(binding.selector) else {
                    continue;
                };
                if binding.action.is_element_local() {
                    crate::util::dom::toggle_next_sibling_active(&el);
                    return;
                }
                let Some(action) = resolve(binding.action, |name| el.get_attribute(name), key.as_deref()) else {
                    return;
                };
                if prevents_default(binding.action) {
                    ev.prevent_default();
                }
                log::debug!("{} {} -> {action:?}", event.dom_name(), binding.selector);
                dispatch(action);
                return;
            }
        });
        if let Err(e) = doc.add_event_listener_with_callback(event.dom_name(), cb.as_ref().unchecked_ref()) {
            log::error!("failed to bind {} listener: {e:?}", event.dom_name());
        }
        cb.forget();
    }
}
