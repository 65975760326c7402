use crate::flows::admin_listing::{SESSION_EXPIRED_MESSAGE, UNEXPECTED_RESPONSE_MESSAGE};
use crate::flows::{AdminListing, ListingState, MountStep};
use crate::tests::BrokenStore;

use refs_api::ClientError;
use refs_core::{MemorySessionStore, RegistrationRecord, Route, SessionCredential, SessionStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn record(id: &str, email: &str) -> RegistrationRecord {
    RegistrationRecord {
        id: id.to_string(),
        email: email.to_string(),
        created_at: "2024-06-15T12:00:00Z".to_string(),
    }
}

fn logged_in_store() -> MemorySessionStore {
    MemorySessionStore::with_credential(SessionCredential::from_login("admin", "secret"))
}

#[test]
fn given_new_listing_then_unauthenticated_and_empty() {
    let listing = AdminListing::new(DATE_FORMAT);

    assert_eq!(
        listing.state(),
        &ListingState::Unauthenticated { expired: false }
    );
    assert!(listing.records().is_empty());
}

#[test]
fn given_no_credential_when_begin_mount_then_redirect_to_login() {
    let store = MemorySessionStore::new();
    let mut listing = AdminListing::new(DATE_FORMAT);

    assert_eq!(
        listing.begin_mount(&store),
        MountStep::Redirect(Route::AdminLogin)
    );
    assert_eq!(
        listing.state(),
        &ListingState::Unauthenticated { expired: false }
    );
}

#[test]
fn given_unreadable_store_when_begin_mount_then_redirect() {
    let mut listing = AdminListing::new(DATE_FORMAT);

    assert_eq!(
        listing.begin_mount(&BrokenStore),
        MountStep::Redirect(Route::AdminLogin)
    );
}

#[test]
fn given_credential_when_begin_mount_then_loading_with_credential() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);

    assert_eq!(
        listing.begin_mount(&store),
        MountStep::Fetch(SessionCredential::from_login("admin", "secret"))
    );
    assert_eq!(listing.state(), &ListingState::Loading);
}

#[test]
fn given_records_when_complete_mount_then_loaded_in_order() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);

    let redirect = listing.complete_mount(
        Ok(vec![record("2", "z@z.com"), record("1", "a@a.com")]),
        &store,
    );

    assert!(redirect.is_none());
    assert_eq!(listing.records().len(), 2);
    assert_eq!(listing.records()[0].email, "z@z.com");
    assert!(listing.notice().is_none());
}

#[test]
fn given_rejection_when_complete_mount_then_session_cleared_and_redirect() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);

    let redirect = listing.complete_mount(Err(ClientError::rejected(401, None)), &store);

    assert_eq!(redirect, Some(Route::AdminLogin));
    assert!(store.read().unwrap().is_none());
    assert_eq!(
        listing.state(),
        &ListingState::Unauthenticated { expired: true }
    );
    assert_eq!(listing.notice(), Some(SESSION_EXPIRED_MESSAGE));
}

#[test]
fn given_forbidden_when_complete_mount_then_treated_as_expired() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);

    let redirect = listing.complete_mount(Err(ClientError::rejected(403, None)), &store);

    assert_eq!(redirect, Some(Route::AdminLogin));
    assert!(store.read().unwrap().is_none());
}

#[test]
fn given_malformed_body_when_complete_mount_then_failed_and_session_kept() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);
    let decode_err = serde_json::from_str::<Vec<RegistrationRecord>>("{}").unwrap_err();

    let redirect = listing.complete_mount(Err(ClientError::from(decode_err)), &store);

    assert!(redirect.is_none());
    assert_eq!(listing.state(), &ListingState::Failed);
    assert_eq!(listing.notice(), Some(UNEXPECTED_RESPONSE_MESSAGE));
    assert!(store.read().unwrap().is_some());
}

#[test]
fn given_loaded_when_logout_then_cleared_and_back_to_login() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);
    listing.complete_mount(Ok(vec![record("1", "a@b.com")]), &store);

    let next = listing.logout(&store).unwrap();

    assert_eq!(next, Route::AdminLogin);
    assert!(store.read().unwrap().is_none());
    assert!(listing.records().is_empty());
}

#[test]
fn given_no_session_when_logout_then_still_redirects() {
    let store = MemorySessionStore::new();
    let mut listing = AdminListing::new(DATE_FORMAT);

    assert_eq!(listing.logout(&store).unwrap(), Route::AdminLogin);
}

#[test]
fn given_zero_records_when_export_then_none() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);
    listing.complete_mount(Ok(Vec::new()), &store);

    assert!(listing.export().is_none());
}

#[test]
fn given_not_loaded_when_export_then_none() {
    let listing = AdminListing::new(DATE_FORMAT);
    assert!(listing.export().is_none());
}

#[test]
fn given_records_when_export_then_header_plus_one_line_each() {
    let store = logged_in_store();
    let mut listing = AdminListing::new(DATE_FORMAT);
    listing.begin_mount(&store);
    listing.complete_mount(Ok(vec![record("1", "a@b.com"), record("2", "c@d.com")]), &store);

    let export = listing.export().unwrap();
    let lines: Vec<&str> = export.contents().lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Email,Registration Date");
    assert!(lines[1].starts_with("a@b.com,2024-06-1"));
    assert!(lines[2].starts_with("c@d.com,"));
}
