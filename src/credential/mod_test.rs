use std::sync::Arc;
use std::thread;

use super::*;

#[test]
fn is_present_requires_non_empty_value() {
    assert!(is_present(Some("abc")));
    assert!(!is_present(Some("")));
    assert!(!is_present(None));
}

#[test]
fn closures_act_as_providers() {
    let yes = || true;
    let no = || false;
    assert!(yes.has_token());
    assert!(!no.has_token());
}

#[test]
fn memory_credentials_start_empty() {
    let creds = MemoryCredentials::new();
    assert!(!creds.has_token());
    assert!(creds.token().is_none());
}

#[test]
fn memory_credentials_set_and_clear() {
    let creds = MemoryCredentials::new();
    creds.set("abc");
    assert!(creds.has_token());
    assert_eq!(creds.token().as_deref(), Some("abc"));

    creds.clear();
    assert!(!creds.has_token());
}

#[test]
fn memory_credentials_blank_token_is_absent() {
    let creds = MemoryCredentials::with_token("");
    assert!(!creds.has_token());
    assert_eq!(creds.token().as_deref(), Some(""));
}

#[test]
fn memory_credentials_visible_across_threads() {
    let creds = Arc::new(MemoryCredentials::new());
    let writer = Arc::clone(&creds);
    thread::spawn(move || writer.set("from-login-flow")).join().unwrap();
    assert!(creds.has_token());
}
