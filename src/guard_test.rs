use super::*;
use crate::credential::MemoryCredentials;

fn dashboard() -> RouteDescriptor {
    RouteDescriptor::new("/dashboard", "dashboard", "Dashboard").protected()
}

fn login() -> RouteDescriptor {
    RouteDescriptor::new("/auth/login", "login", "Login")
}

fn categories() -> RouteDescriptor {
    RouteDescriptor::new("/asset-categories", "asset-categories", "AssetCategoryList")
}

fn signed_in() -> MemoryCredentials {
    MemoryCredentials::with_token("abc")
}

fn signed_out() -> MemoryCredentials {
    MemoryCredentials::new()
}

fn redirect(route: &str) -> Outcome {
    Outcome::Redirect { route: route.to_owned() }
}

// =============================================================
// Rule 1: protected destinations
// =============================================================

#[test]
fn protected_route_without_token_redirects_to_login() {
    let guard = NavigationGuard::default();
    let to = dashboard();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_out()), redirect("login"));
}

#[test]
fn protected_route_with_token_is_allowed() {
    let guard = NavigationGuard::default();
    let to = dashboard();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_in()), Outcome::Allow);
}

#[test]
fn every_protected_application_route_follows_rule_one() {
    let guard = NavigationGuard::default();
    let table = RouteTable::application().unwrap();
    for route in table.iter().filter(|r| r.requires_auth) {
        assert_eq!(guard.evaluate(NavigationIntent::to(route), &signed_out()), redirect("login"), "{}", route.name);
        assert_eq!(guard.evaluate(NavigationIntent::to(route), &signed_in()), Outcome::Allow, "{}", route.name);
    }
}

// =============================================================
// Rule 2: login destination
// =============================================================

#[test]
fn login_with_token_redirects_to_dashboard() {
    let guard = NavigationGuard::default();
    let to = login();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_in()), redirect("dashboard"));
}

#[test]
fn login_without_token_is_allowed() {
    let guard = NavigationGuard::default();
    let to = login();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_out()), Outcome::Allow);
}

#[test]
fn login_matched_by_path_under_other_name() {
    let guard = NavigationGuard::default();
    let to = RouteDescriptor::new("/auth/login", "signin", "Login");
    assert!(guard.is_login(&to));
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_in()), redirect("dashboard"));
}

#[test]
fn login_matched_by_name_under_other_path() {
    let guard = NavigationGuard::default();
    let to = RouteDescriptor::new("/signin", "login", "Login");
    assert!(guard.is_login(&to));
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_in()), redirect("dashboard"));
}

#[test]
fn rule_one_wins_when_login_route_is_protected() {
    let guard = NavigationGuard::default();
    let to = login().protected();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_out()), redirect("login"));
}

// =============================================================
// Rule 3: everything else
// =============================================================

#[test]
fn unprotected_route_is_allowed_regardless_of_token() {
    let guard = NavigationGuard::default();
    let to = categories();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_out()), Outcome::Allow);
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_in()), Outcome::Allow);
}

#[test]
fn origin_does_not_change_outcome() {
    let guard = NavigationGuard::default();
    let to = dashboard();
    let from = categories();
    assert_eq!(
        guard.evaluate(NavigationIntent::new(&to, Some(&from)), &signed_out()),
        guard.evaluate(NavigationIntent::to(&to), &signed_out())
    );
}

#[test]
fn blank_token_counts_as_absent() {
    let guard = NavigationGuard::default();
    let to = dashboard();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &MemoryCredentials::with_token("")), redirect("login"));
}

#[test]
fn closure_provider_is_accepted() {
    let guard = NavigationGuard::default();
    let to = dashboard();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &|| true), Outcome::Allow);
}

#[test]
fn evaluate_never_touches_credentials() {
    let guard = NavigationGuard::default();
    let creds = signed_in();
    let to = login();
    guard.evaluate(NavigationIntent::to(&to), &creds);
    assert_eq!(creds.token().as_deref(), Some("abc"));
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn custom_names_are_used_for_redirects() {
    let guard = NavigationGuard::new("signin", "/signin", "home");
    let to = dashboard();
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_out()), redirect("signin"));
    let to = RouteDescriptor::new("/signin", "signin", "Login");
    assert_eq!(guard.evaluate(NavigationIntent::to(&to), &signed_in()), redirect("home"));
}

#[test]
fn check_table_requires_both_targets() {
    let guard = NavigationGuard::default();
    assert!(guard.check_table(&RouteTable::application().unwrap()).is_ok());

    let table = RouteTable::new(vec![login()]).unwrap();
    let err = guard.check_table(&table).unwrap_err();
    assert!(matches!(err, RouteError::UnknownRoute(name) if name == "dashboard"));
}

#[test]
fn redirect_target_accessor() {
    assert_eq!(Outcome::Allow.redirect_target(), None);
    assert_eq!(redirect("login").redirect_target(), Some("login"));
}

#[test]
fn is_login_compares_declared_path() {
    let guard = NavigationGuard::default();
    let renamed = RouteDescriptor::new("/auth/login", "signin", "Login");
    assert!(guard.is_login(&renamed));

    let with_param = RouteDescriptor::new("/auth/login/:tenant", "tenant-login", "Login");
    assert!(!guard.is_login(&with_param));
}
