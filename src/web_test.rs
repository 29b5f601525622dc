use std::cell::RefCell;

use super::*;
use crate::credential::{LocalStorageCredentials, MemoryCredentials};

fn gate(creds: MemoryCredentials) -> RouteGate<MemoryCredentials> {
    RouteGate::new(RouteTable::application().unwrap(), NavigationGuard::default(), creds)
}

#[test]
fn redirects_protected_path_to_login_path() {
    let gate = gate(MemoryCredentials::new());
    assert_eq!(gate.redirect_for("/dashboard"), Some("/auth/login".to_owned()));
    assert_eq!(gate.redirect_for("/assets/4/edit"), Some("/auth/login".to_owned()));
}

#[test]
fn redirects_login_to_dashboard_when_signed_in() {
    let gate = gate(MemoryCredentials::with_token("abc"));
    assert_eq!(gate.redirect_for("/auth/login"), Some("/dashboard".to_owned()));
    assert_eq!(gate.redirect_for("/auth/login?next=/assets"), Some("/dashboard".to_owned()));
}

#[test]
fn stays_on_allowed_and_unknown_paths() {
    let gate = gate(MemoryCredentials::new());
    assert_eq!(gate.redirect_for("/asset-categories"), None);
    assert_eq!(gate.redirect_for("/auth/login"), None);
    assert_eq!(gate.redirect_for("/no/such/page"), None);
}

#[test]
fn missing_redirect_target_stays_put() {
    let table = RouteTable::new(vec![crate::routes::RouteDescriptor::new("/dashboard", "dashboard", "D").protected()])
        .unwrap();
    let gate = RouteGate::new(table, NavigationGuard::default(), MemoryCredentials::new());
    assert_eq!(gate.redirect_for("/dashboard"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_gate_is_signed_out_natively() {
    let gate = RouteGate::new(
        RouteTable::application().unwrap(),
        NavigationGuard::default(),
        LocalStorageCredentials::default(),
    );
    assert_eq!(gate.redirect_for("/dashboard"), Some("/auth/login".to_owned()));
}

// =============================================================
// apply_redirect
// =============================================================

#[test]
fn apply_redirect_replaces_history_entry() {
    let gate = gate(MemoryCredentials::new());
    let calls = RefCell::new(Vec::new());
    let navigate = |target: &str, opts: NavigateOptions| calls.borrow_mut().push((target.to_owned(), opts.replace));

    assert!(apply_redirect(&gate, "/assets/12", &navigate));
    assert_eq!(calls.into_inner(), vec![("/auth/login".to_owned(), true)]);
}

#[test]
fn apply_redirect_leaves_allowed_location_alone() {
    let gate = gate(MemoryCredentials::with_token("abc"));
    let calls = RefCell::new(Vec::new());
    let navigate = |target: &str, _: NavigateOptions| calls.borrow_mut().push(target.to_owned());

    assert!(!apply_redirect(&gate, "/dashboard", &navigate));
    assert!(!apply_redirect(&gate, "/", &navigate));
    assert!(calls.into_inner().is_empty());
}
