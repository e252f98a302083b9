use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_has_no_duplicate_rows() {
    for (i, a) in BINDINGS.iter().enumerate() {
        for b in &BINDINGS[i + 1..] {
            assert!(!(a.event == b.event && a.selector == b.selector), "duplicate binding {}", a.selector);
        }
    }
}

#[test]
fn every_action_kind_is_bound_once() {
    let kinds = [
        ActionKind::ToggleChat,
        ActionKind::SuggestQuestion,
        ActionKind::RaiseTicket,
        ActionKind::CloseModal,
        ActionKind::VoteDocument,
        ActionKind::OpenDocument,
        ActionKind::UpvoteTicket,
        ActionKind::Search,
        ActionKind::SearchOnEnter,
        ActionKind::FilterGenre,
        ActionKind::ToggleMoreGenres,
        ActionKind::ToggleFaq,
    ];
    for kind in kinds {
        assert_eq!(BINDINGS.iter().filter(|b| b.action == kind).count(), 1, "{kind:?}");
    }
}

#[test]
fn vote_button_matches_before_enclosing_card() {
    let pos = |kind| BINDINGS.iter().position(|b| b.action == kind).unwrap();
    assert!(pos(ActionKind::VoteDocument) < pos(ActionKind::OpenDocument));
}

#[test]
fn search_enter_binding_listens_for_keypress() {
    let row = BINDINGS.iter().find(|b| b.action == ActionKind::SearchOnEnter).unwrap();
    assert_eq!(row.event, EventKind::Keypress);
    assert_eq!(row.selector, "#searchInput");
    assert_eq!(row.event.dom_name(), "keypress");
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolves_document_vote() {
    let action = resolve(ActionKind::VoteDocument, attrs(&[("data-vote-document", "12"), ("data-vote", "down")]), None);
    assert_eq!(action, Some(PageAction::VoteDocument(12, VoteType::Down)));
}

#[test]
fn document_vote_without_direction_is_ignored() {
    assert_eq!(resolve(ActionKind::VoteDocument, attrs(&[("data-vote-document", "12")]), None), None);
    assert_eq!(
        resolve(ActionKind::VoteDocument, attrs(&[("data-vote-document", "x"), ("data-vote", "up")]), None),
        None
    );
}

#[test]
fn resolves_open_document_and_ticket_upvote() {
    assert_eq!(
        resolve(ActionKind::OpenDocument, attrs(&[("data-open-document", " 4 ")]), None),
        Some(PageAction::OpenDocument(4))
    );
    assert_eq!(
        resolve(ActionKind::UpvoteTicket, attrs(&[("data-upvote-ticket", "9")]), None),
        Some(PageAction::UpvoteTicket(9))
    );
}

#[test]
fn resolves_close_modal_by_element_id() {
    assert_eq!(
        resolve(ActionKind::CloseModal, attrs(&[("data-close-modal", "raiseTicketModal")]), None),
        Some(PageAction::CloseModal(Modal::RaiseTicket))
    );
    assert_eq!(resolve(ActionKind::CloseModal, attrs(&[("data-close-modal", "other")]), None), None);
}

#[test]
fn genre_filter_empty_value_clears() {
    assert_eq!(
        resolve(ActionKind::FilterGenre, attrs(&[("data-genre-filter", "")]), None),
        Some(PageAction::FilterByGenre(None))
    );
    assert_eq!(
        resolve(ActionKind::FilterGenre, attrs(&[("data-genre-filter", "Poetry")]), None),
        Some(PageAction::FilterByGenre(Some("Poetry".to_owned())))
    );
}

#[test]
fn search_on_enter_requires_enter_key() {
    assert_eq!(resolve(ActionKind::SearchOnEnter, attrs(&[]), Some("a")), None);
    assert_eq!(resolve(ActionKind::SearchOnEnter, attrs(&[]), None), None);
    assert_eq!(resolve(ActionKind::SearchOnEnter, attrs(&[]), Some("Enter")), Some(PageAction::PerformSearch));
}

#[test]
fn suggest_question_needs_text() {
    assert_eq!(resolve(ActionKind::SuggestQuestion, attrs(&[("data-suggest-question", " ")]), None), None);
    assert_eq!(
        resolve(ActionKind::SuggestQuestion, attrs(&[("data-suggest-question", "How do I upload?")]), None),
        Some(PageAction::SuggestQuestion("How do I upload?".to_owned()))
    );
}

#[test]
fn attribute_free_actions_always_resolve() {
    assert_eq!(resolve(ActionKind::ToggleChat, attrs(&[]), None), Some(PageAction::ToggleChat));
    assert_eq!(resolve(ActionKind::RaiseTicket, attrs(&[]), None), Some(PageAction::ShowRaiseTicket));
    assert_eq!(resolve(ActionKind::ToggleMoreGenres, attrs(&[]), None), Some(PageAction::ToggleMoreGenres));
}

#[test]
fn faq_rows_are_applied_in_place_not_dispatched() {
    assert!(ActionKind::ToggleFaq.is_element_local());
    assert_eq!(resolve(ActionKind::ToggleFaq, attrs(&[]), None), None);
    assert!(!prevents_default(ActionKind::ToggleFaq));
    let local: Vec<_> = BINDINGS.iter().filter(|b| b.action.is_element_local()).collect();
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].selector, ".faq-question");
}

#[test]
fn typing_in_search_box_keeps_default_behavior() {
    assert!(!prevents_default(ActionKind::SearchOnEnter));
    assert!(prevents_default(ActionKind::VoteDocument));
}
