use std::sync::Once;

use minuta_core::{update, AppState, AuthFlow, Effect, Msg, Screen, ScreenView, PASSWORD_HINT};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(minuta_logging::initialize_for_tests);
}

fn fill_login(state: AppState, email: &str, password: &str) -> AppState {
    let (state, _) = update(state, Msg::LoginEmailChanged(email.to_string()));
    let (state, _) = update(state, Msg::LoginPasswordChanged(password.to_string()));
    state
}

fn login_view(state: &AppState) -> minuta_core::LoginView {
    match state.view().screen {
        ScreenView::Login(view) => view,
        other => panic!("expected login screen, got {other:?}"),
    }
}

#[test]
fn starts_on_login_with_silent_fields() {
    init_logging();
    let state = AppState::new();
    let view = state.view();

    assert_eq!(view.route.screen, Screen::Login);
    assert_eq!(view.route.param, None);
    assert!(!view.dirty);

    let login = login_view(&state);
    assert_eq!(login.email_error, None);
    assert_eq!(login.password_error, None);
    assert_eq!(login.password_hint.as_deref(), Some(PASSWORD_HINT));
    assert!(!login.submit_enabled);
}

#[test]
fn valid_login_moves_to_the_menu_once() {
    init_logging();
    let state = fill_login(AppState::new(), "a@b.co", "abcde1");
    assert!(login_view(&state).submit_enabled);

    let (mut state, effects) = update(state, Msg::LoginSubmitted);
    assert_eq!(*state.flow(), AuthFlow::LoggedIn);
    assert_eq!(state.view().route.screen, Screen::List);
    assert_eq!(
        effects,
        vec![Effect::LoginSucceeded {
            email: "a@b.co".to_string()
        }]
    );
    assert!(state.consume_dirty());

    // A second submit has nothing to act on.
    let (mut state, effects) = update(state, Msg::LoginSubmitted);
    assert_eq!(*state.flow(), AuthFlow::LoggedIn);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn empty_submit_reveals_required_errors() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::LoginSubmitted);

    assert_eq!(*state.flow(), AuthFlow::LoggedOut);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let login = login_view(&state);
    assert_eq!(login.email_error.as_deref(), Some("email required"));
    assert_eq!(login.password_error.as_deref(), Some("password required"));
    assert_eq!(login.password_hint, None);
}

#[test]
fn invalid_fields_block_login_and_show_both_results() {
    init_logging();
    let state = fill_login(AppState::new(), "not-an-email", "abcdef");
    let (state, effects) = update(state, Msg::LoginSubmitted);

    assert_eq!(*state.flow(), AuthFlow::LoggedOut);
    assert!(effects.is_empty());
    let login = login_view(&state);
    assert_eq!(login.email_error.as_deref(), Some("invalid email format"));
    assert_eq!(
        login.password_error.as_deref(),
        Some("must contain at least one digit")
    );

    let state = fill_login(state, "a@b.co", "abcdef");
    let (state, _) = update(state, Msg::LoginSubmitted);
    assert_eq!(*state.flow(), AuthFlow::LoggedOut);
    assert_eq!(login_view(&state).email_error, None);
}

#[test]
fn required_error_appears_on_clear_only_after_a_submit() {
    init_logging();
    let state = fill_login(AppState::new(), "a@b.co", "abc");
    let (state, _) = update(state, Msg::LoginEmailChanged(String::new()));
    assert_eq!(login_view(&state).email_error, None);
    assert_eq!(
        login_view(&state).password_error.as_deref(),
        Some("minimum 6 characters")
    );

    let (state, _) = update(state, Msg::LoginSubmitted);
    let (state, _) = update(state, Msg::LoginPasswordChanged(String::new()));
    let login = login_view(&state);
    assert_eq!(login.email_error.as_deref(), Some("email required"));
    assert_eq!(login.password_error.as_deref(), Some("password required"));
}

#[test]
fn password_is_not_exposed_in_the_view() {
    init_logging();
    let state = fill_login(AppState::new(), "a@b.co", "secret1");
    let login = login_view(&state);
    assert_eq!(login.password_len, 7);
    assert!(!format!("{:?}", state.view()).contains("secret1"));
}
