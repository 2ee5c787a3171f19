//! Tests for the edit session lifecycle against a mock store.

mod mocks;

use contact_book::domain::Field;
use contact_book::error::SessionError;
use contact_book::models::Contact;
use contact_book::repositories::{LoadReport, DATA_RESET_NOTICE};
use contact_book::services::{ApplyPolicy, EditSession, Mode, SessionEvent, SessionOptions};
use contact_book::ContactId;
use mocks::MockContactStore;
use std::sync::Arc;

fn abc() -> Vec<Contact> {
    vec![
        Contact::new("A", "+1 111 111 11 11", "a@example.com"),
        Contact::new("B", "+1 222 222 22 22", "b@example.com"),
        Contact::new("C", "+1 333 333 33 33", "c@example.com"),
    ]
}

async fn session_over(store: &MockContactStore) -> EditSession {
    EditSession::load(Arc::new(store.clone()), SessionOptions::default()).await
}

fn id_at(session: &EditSession, index: usize) -> ContactId {
    session.contacts().at(index).unwrap().id
}

fn shown_names(session: &EditSession) -> Vec<String> {
    session
        .shown_contacts()
        .iter()
        .map(|entry| entry.contact.name().to_string())
        .collect()
}

#[tokio::test]
async fn test_load_reads_store_once() {
    let store = MockContactStore::with_contacts(abc());
    let session = session_over(&store).await;

    assert_eq!(store.get_call_count("load"), 1);
    assert_eq!(session.contacts().len(), 3);
    assert_eq!(session.mode(), Mode::Selecting);
    assert!(session.current_id().is_none());
}

#[tokio::test]
async fn test_apply_new_contact_persists_exact_values() {
    let store = MockContactStore::new();
    let mut session = session_over(&store).await;

    session.add();
    session.set_field(Field::Name, "X").unwrap();
    session
        .set_field(Field::PhoneNumber, "+1 234 567 89 01")
        .unwrap();
    session.set_field(Field::Email, "x@y.com").unwrap();
    assert!(session.is_contact_correct());

    let id = session.apply().await.unwrap();

    let expected = vec![Contact::new("X", "+1 234 567 89 01", "x@y.com")];
    assert_eq!(session.contacts().snapshot(), expected);
    assert_eq!(session.mode(), Mode::Selecting);
    assert_eq!(session.current_id(), Some(id));
    assert!(session.is_readonly_contact_selected());
    assert_eq!(store.last_saved(), Some(expected));
}

#[tokio::test]
async fn test_edit_then_apply_overwrites_in_place() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    let b = id_at(&session, 1);

    session.select(b).unwrap();
    session.edit().unwrap();
    session.set_field(Field::Name, "Beatrice").unwrap();

    let applied = session.apply().await.unwrap();

    assert_eq!(applied, b);
    assert_eq!(session.contacts().len(), 3);
    assert_eq!(session.contacts().at(1).unwrap().contact.name(), "Beatrice");
    assert_eq!(session.current_id(), Some(b));
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_working_copy_is_independent_until_apply() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    let a = id_at(&session, 0);

    session.select(a).unwrap();
    session.edit().unwrap();
    session.set_field(Field::Name, "Changed").unwrap();

    assert_eq!(session.field(Field::Name), "Changed");
    assert_eq!(session.contacts().get(a).unwrap().contact.name(), "A");

    session.cancel().unwrap();
    assert_eq!(session.field(Field::Name), "A");
    assert_eq!(session.mode(), Mode::Selecting);
    assert_eq!(store.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_remove_last_selects_new_last() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    let b = id_at(&session, 1);

    session.select(id_at(&session, 2)).unwrap();
    let removed = session.remove().await.unwrap();

    assert_eq!(removed.name(), "C");
    assert_eq!(session.current_id(), Some(b));
    assert_eq!(store.last_saved().unwrap().len(), 2);
}

#[tokio::test]
async fn test_remove_first_selects_next() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    let b = id_at(&session, 1);

    session.select(id_at(&session, 0)).unwrap();
    session.remove().await.unwrap();

    assert_eq!(session.current_id(), Some(b));
    assert_eq!(session.field(Field::Name), "B");
}

#[tokio::test]
async fn test_search_matches_name_or_phone() {
    let store = MockContactStore::with_contacts(vec![
        Contact::new("Ann", "111", ""),
        Contact::new("Bob", "222", ""),
    ]);
    let mut session = session_over(&store).await;

    session.search("11");
    assert_eq!(shown_names(&session), vec!["Ann"]);

    session.search("Bo");
    assert_eq!(shown_names(&session), vec!["Bob"]);

    session.search("");
    assert_eq!(shown_names(&session), vec!["Ann", "Bob"]);
}

#[tokio::test]
async fn test_search_is_case_sensitive_by_default() {
    let store = MockContactStore::with_contacts(vec![Contact::new("Ann", "111", "")]);
    let mut session = session_over(&store).await;

    session.search("ann");
    assert!(session.shown_contacts().is_empty());
}

#[tokio::test]
async fn test_search_case_insensitive_option() {
    let store = MockContactStore::with_contacts(vec![Contact::new("Ann", "111", "")]);
    let options = SessionOptions {
        case_sensitive_search: false,
        ..SessionOptions::default()
    };
    let mut session = EditSession::load(Arc::new(store), options).await;

    session.search("ANN");
    assert_eq!(shown_names(&session), vec!["Ann"]);
}

#[tokio::test]
async fn test_errors_hidden_while_selecting() {
    let store = MockContactStore::with_contacts(vec![Contact::new(
        "x".repeat(150),
        "not a phone",
        "bad",
    )]);
    let mut session = session_over(&store).await;

    session.select(id_at(&session, 0)).unwrap();
    assert!(session.errors().values().all(|error| error.is_empty()));
    assert!(session.is_contact_correct());

    session.edit().unwrap();
    assert!(!session.error(Field::Name).is_empty());
    assert!(!session.error(Field::PhoneNumber).is_empty());
    assert!(!session.error(Field::Email).is_empty());

    session.cancel().unwrap();
    assert!(session.errors().values().all(|error| error.is_empty()));
}

#[tokio::test]
async fn test_field_errors_follow_typing() {
    let store = MockContactStore::new();
    let mut session = session_over(&store).await;

    session.add();
    session.set_field(Field::Email, "nope").unwrap();
    assert!(!session.error(Field::Email).is_empty());
    assert!(!session.is_contact_correct());

    session.set_field(Field::Email, "ann@example.com").unwrap();
    assert_eq!(session.error(Field::Email), "");
}

#[tokio::test]
async fn test_set_field_same_value_is_noop() {
    let store = MockContactStore::new();
    let mut session = session_over(&store).await;
    session.add();
    session.set_field(Field::Name, "Ann").unwrap();

    let mut events = session.subscribe();
    assert!(!session.set_field(Field::Name, "Ann").unwrap());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_preconditions_leave_state_untouched() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;

    assert!(matches!(session.edit(), Err(SessionError::NoSelection)));
    assert!(matches!(
        session.remove().await,
        Err(SessionError::NoSelection)
    ));
    assert!(matches!(
        session.set_field(Field::Name, "Z"),
        Err(SessionError::NotEditing)
    ));
    assert!(matches!(session.cancel(), Err(SessionError::NotEditing)));
    assert!(matches!(
        session.apply().await,
        Err(SessionError::NotEditing)
    ));
    assert!(matches!(
        session.select(ContactId::from_raw(999)),
        Err(SessionError::UnknownContact(_))
    ));

    session.select(id_at(&session, 0)).unwrap();
    session.edit().unwrap();
    assert!(matches!(session.edit(), Err(SessionError::EditInProgress)));
    assert!(matches!(
        session.remove().await,
        Err(SessionError::EditInProgress)
    ));

    assert_eq!(session.mode(), Mode::Editing);
    assert_eq!(session.contacts().len(), 3);
    assert_eq!(store.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_invalid_contact_applies_by_default() {
    let store = MockContactStore::new();
    let mut session = session_over(&store).await;

    session.add();
    session.set_field(Field::Email, "bad").unwrap();
    assert!(session.apply().await.is_ok());
    assert_eq!(session.contacts().len(), 1);
}

#[tokio::test]
async fn test_require_valid_policy_refuses_invalid_contact() {
    let store = MockContactStore::new();
    let options = SessionOptions {
        apply_policy: ApplyPolicy::RequireValid,
        ..SessionOptions::default()
    };
    let mut session = EditSession::load(Arc::new(store.clone()), options).await;

    session.add();
    session.set_field(Field::Email, "bad").unwrap();

    assert!(matches!(
        session.apply().await,
        Err(SessionError::InvalidContact)
    ));
    assert_eq!(session.mode(), Mode::Editing);
    assert_eq!(session.field(Field::Email), "bad");
    assert!(session.contacts().is_empty());
    assert_eq!(store.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_save_failure_keeps_commit_in_memory() {
    let store = MockContactStore::new();
    store.set_fail_saves(true);
    let mut session = session_over(&store).await;

    session.add();
    session.set_field(Field::Name, "Ann").unwrap();

    let result = session.apply().await;
    assert!(matches!(result, Err(SessionError::Persistence(_))));
    assert_eq!(session.contacts().len(), 1);
    assert_eq!(session.mode(), Mode::Selecting);
    assert!(session.current_id().is_some());

    store.set_fail_saves(false);
    session.remove().await.unwrap();
    assert_eq!(store.last_saved(), Some(Vec::new()));
}

#[tokio::test]
async fn test_load_notice_is_delivered_once() {
    let store = MockContactStore::with_report(LoadReport::reset("expected value at line 1"));
    let mut session = session_over(&store).await;

    assert!(session.contacts().is_empty());
    assert_eq!(session.take_load_notice().as_deref(), Some(DATA_RESET_NOTICE));
    assert_eq!(session.take_load_notice(), None);
}

#[tokio::test]
async fn test_missing_store_has_no_notice() {
    let store = MockContactStore::new();
    let mut session = session_over(&store).await;
    assert_eq!(session.take_load_notice(), None);
}

#[tokio::test]
async fn test_select_during_edit_discards_working_copy() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    let a = id_at(&session, 0);
    let c = id_at(&session, 2);

    session.select(a).unwrap();
    session.edit().unwrap();
    session.set_field(Field::Name, "Unsaved").unwrap();

    session.select(c).unwrap();
    assert_eq!(session.mode(), Mode::Selecting);
    assert_eq!(session.editing_index(), None);
    assert_eq!(session.field(Field::Name), "C");
    assert_eq!(session.contacts().get(a).unwrap().contact.name(), "A");
}

#[tokio::test]
async fn test_add_clears_selection() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    session.select(id_at(&session, 1)).unwrap();

    session.add();
    assert!(session.current_id().is_none());
    assert_eq!(session.mode(), Mode::Editing);
    assert_eq!(session.field(Field::Name), "");
    assert!(!session.is_readonly_contact_selected());
}

#[tokio::test]
async fn test_events_published_for_apply() {
    let store = MockContactStore::new();
    let mut session = session_over(&store).await;
    let mut events = session.subscribe();

    session.add();
    session.set_field(Field::Name, "Ann").unwrap();
    session.apply().await.unwrap();

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }

    assert!(seen.contains(&SessionEvent::ModeChanged(Mode::Editing)));
    assert!(seen.contains(&SessionEvent::FieldChanged(Field::Name)));
    assert!(seen.contains(&SessionEvent::ContactsChanged));
    assert!(seen.contains(&SessionEvent::ModeChanged(Mode::Selecting)));
    let editing = seen
        .iter()
        .position(|e| *e == SessionEvent::ModeChanged(Mode::Editing))
        .unwrap();
    let committed = seen
        .iter()
        .position(|e| *e == SessionEvent::ContactsChanged)
        .unwrap();
    assert!(editing < committed);
}

#[tokio::test]
async fn test_search_publishes_once_per_change() {
    let store = MockContactStore::with_contacts(abc());
    let mut session = session_over(&store).await;
    let mut events = session.subscribe();

    session.search("A");
    session.search("A");

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(
        seen,
        vec![
            SessionEvent::SearchChanged,
            SessionEvent::ShownContactsChanged
        ]
    );
}
