use listkeeper_core::service::tracker_service::{
    MSG_ALL_COMPLETED, MSG_ITEM_ADDED, MSG_ITEM_DELETED, MSG_ITEM_NOT_FOUND, MSG_ITEM_UPDATED,
    MSG_LIST_CREATED, MSG_LIST_DELETED, MSG_LIST_NOT_FOUND, MSG_LIST_UPDATED,
};
use listkeeper_core::{
    Flash, ItemId, ListId, MemorySessionStore, MinimalResponse, Outcome, RequestContext, Route,
    SessionContext, SessionKey, SessionStore, TrackerService,
};
use serde_json::json;

fn new_session(store: &MemorySessionStore) -> SessionContext<&MemorySessionStore> {
    SessionContext::load(store, SessionKey::generate()).unwrap()
}

#[test]
fn create_list_trims_name_and_redirects_home() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);

    let outcome = TrackerService::new(&mut session).create_list("  Groceries \n");

    assert_eq!(outcome, Outcome::Redirect(Route::Lists));
    assert_eq!(session.collection().list_all()[0].name(), "Groceries");
    assert_eq!(session.take_flash(), Some(Flash::success(MSG_LIST_CREATED)));
}

#[test]
fn create_list_with_whitespace_only_name_rerenders_form() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);

    let outcome = TrackerService::new(&mut session).create_list("   ");

    assert_eq!(outcome, Outcome::Rerender(Route::NewList));
    assert!(session.collection().list_all().is_empty());
    assert_eq!(
        session.take_flash(),
        Some(Flash::error("List name must be between 2 and 99 characters."))
    );
}

#[test]
fn create_duplicate_after_trim_is_rejected() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");

    let outcome = service.create_list(" Groceries ");

    assert_eq!(outcome, Outcome::Rerender(Route::NewList));
    assert_eq!(
        session.take_flash(),
        Some(Flash::error("You already have a list with that name."))
    );
}

#[test]
fn rename_list_outcomes() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");
    service.create_list("Chores");

    assert_eq!(
        service.rename_list(ListId(1), " Groceries "),
        Outcome::Redirect(Route::Lists)
    );
    assert_eq!(
        service.rename_list(ListId(1), "Chores"),
        Outcome::Rerender(Route::EditList(ListId(1)))
    );
    assert_eq!(
        service.rename_list(ListId(9), "Anything"),
        Outcome::Redirect(Route::Lists)
    );
    assert_eq!(session.take_flash(), Some(Flash::error(MSG_LIST_NOT_FOUND)));

    let mut service = TrackerService::new(&mut session);
    assert_eq!(
        service.rename_list(ListId(2), "Weekend chores"),
        Outcome::Redirect(Route::Lists)
    );
    assert_eq!(session.take_flash(), Some(Flash::success(MSG_LIST_UPDATED)));
    assert_eq!(
        session.collection().get_list(ListId(2)).unwrap().name(),
        "Weekend chores"
    );
}

#[test]
fn delete_list_honors_minimal_response_flag() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store).with_request(RequestContext::minimal());
    TrackerService::new(&mut session).create_list("Groceries");
    session.take_flash();

    let outcome = TrackerService::new(&mut session).delete_list(ListId(1));

    assert_eq!(
        outcome,
        Outcome::Minimal(MinimalResponse::Location(Route::Lists))
    );
    assert!(session.collection().list_all().is_empty());
    assert_eq!(session.take_flash(), None);
}

#[test]
fn delete_missing_list_still_redirects_with_success() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);

    let outcome = TrackerService::new(&mut session).delete_list(ListId(3));

    assert_eq!(outcome, Outcome::Redirect(Route::Lists));
    assert_eq!(session.take_flash(), Some(Flash::success(MSG_LIST_DELETED)));
}

#[test]
fn add_item_outcomes() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");

    assert_eq!(
        service.add_item(ListId(1), "  Milk "),
        Outcome::Redirect(Route::List(ListId(1)))
    );
    assert_eq!(
        service.add_item(ListId(1), "   "),
        Outcome::Rerender(Route::List(ListId(1)))
    );
    assert_eq!(
        session.take_flash(),
        Some(Flash::error("Item name must be between 1 and 100 characters."))
    );

    let mut service = TrackerService::new(&mut session);
    assert_eq!(
        service.add_item(ListId(5), "Milk"),
        Outcome::Redirect(Route::Lists)
    );
    assert_eq!(session.take_flash(), Some(Flash::error(MSG_LIST_NOT_FOUND)));

    let list = session.collection().get_list(ListId(1)).unwrap();
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].name(), "Milk");
    assert_eq!(list.items()[0].id(), ItemId(1));
}

#[test]
fn add_item_with_exhausted_ids_rerenders_list_with_error() {
    let store = MemorySessionStore::new();
    let key = SessionKey::generate();
    let payload = json!({ "collection": { "lists": [{
        "id": 1,
        "name": "Groceries",
        "todos": [],
        "next_item_id": u64::MAX
    }]}});
    store.set(&key, &payload.to_string()).unwrap();
    let mut session = SessionContext::load(&store, key).unwrap();

    let outcome = TrackerService::new(&mut session).add_item(ListId(1), "Milk");

    assert_eq!(outcome, Outcome::Rerender(Route::List(ListId(1))));
    assert_eq!(
        session.take_flash(),
        Some(Flash::error("no ids left to allocate"))
    );
    assert!(session.collection().get_list(ListId(1)).unwrap().items().is_empty());
}

#[test]
fn add_item_success_sets_flash() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");
    service.add_item(ListId(1), "Milk");

    assert_eq!(session.take_flash(), Some(Flash::success(MSG_ITEM_ADDED)));
}

#[test]
fn delete_item_modes() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");
    service.add_item(ListId(1), "Milk");
    service.add_item(ListId(1), "Eggs");

    assert_eq!(
        service.delete_item(ListId(1), ItemId(1)),
        Outcome::Redirect(Route::List(ListId(1)))
    );
    assert_eq!(session.take_flash(), Some(Flash::success(MSG_ITEM_DELETED)));

    let mut session = session.with_request(RequestContext::minimal());
    let outcome = TrackerService::new(&mut session).delete_item(ListId(1), ItemId(2));
    assert_eq!(outcome, Outcome::Minimal(MinimalResponse::NoContent));
    assert!(session
        .collection()
        .get_list(ListId(1))
        .unwrap()
        .items()
        .is_empty());

    let outcome = TrackerService::new(&mut session).delete_item(ListId(8), ItemId(1));
    assert_eq!(outcome, Outcome::Redirect(Route::Lists));
    assert_eq!(session.take_flash(), Some(Flash::error(MSG_LIST_NOT_FOUND)));
}

#[test]
fn toggle_item_parses_flag_and_reports_missing_item() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");
    service.add_item(ListId(1), "Milk");

    assert_eq!(
        service.toggle_item(ListId(1), ItemId(1), "true"),
        Outcome::Redirect(Route::List(ListId(1)))
    );
    assert_eq!(session.take_flash(), Some(Flash::success(MSG_ITEM_UPDATED)));
    assert!(session.collection().list_all()[0].items()[0].is_completed());

    let mut service = TrackerService::new(&mut session);
    service.toggle_item(ListId(1), ItemId(1), "yes");
    assert!(!session.collection().list_all()[0].items()[0].is_completed());

    let outcome = TrackerService::new(&mut session).toggle_item(ListId(1), ItemId(9), "true");
    assert_eq!(outcome, Outcome::Redirect(Route::List(ListId(1))));
    assert_eq!(session.take_flash(), Some(Flash::error(MSG_ITEM_NOT_FOUND)));
}

#[test]
fn complete_all_outcomes() {
    let store = MemorySessionStore::new();
    let mut session = new_session(&store);
    let mut service = TrackerService::new(&mut session);
    service.create_list("Groceries");
    service.add_item(ListId(1), "Milk");
    service.add_item(ListId(1), "Eggs");

    assert_eq!(
        service.complete_all(ListId(1)),
        Outcome::Redirect(Route::List(ListId(1)))
    );
    assert_eq!(session.take_flash(), Some(Flash::success(MSG_ALL_COMPLETED)));
    assert!(session.collection().list_all()[0].is_complete());

    let outcome = TrackerService::new(&mut session).complete_all(ListId(2));
    assert_eq!(outcome, Outcome::Redirect(Route::Lists));
    assert_eq!(session.take_flash(), Some(Flash::error(MSG_LIST_NOT_FOUND)));
}
