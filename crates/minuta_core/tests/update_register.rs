use std::sync::Once;

use minuta_core::{
    update, AppState, AuthFlow, Cuisine, Diet, Effect, Msg, RegistrationProfile, Screen,
    ScreenView,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(minuta_logging::initialize_for_tests);
}

fn registering() -> AppState {
    let (state, _) = update(AppState::new(), Msg::RegisterClicked);
    assert_eq!(*state.flow(), AuthFlow::Registering);
    state
}

fn register_view(state: &AppState) -> minuta_core::RegisterView {
    match state.view().screen {
        ScreenView::Register(view) => view,
        other => panic!("expected register screen, got {other:?}"),
    }
}

#[test]
fn registration_form_starts_with_defaults() {
    init_logging();
    let state = registering();
    let view = register_view(&state);
    assert_eq!(view.diet, Diet::Omnivore);
    assert_eq!(view.cuisine, Cuisine::Chilean);
    assert!(!view.cuisine_menu_open);
    assert!(!view.accept_terms);
    assert!(!view.submit_enabled);
}

#[test]
fn submit_without_terms_is_a_noop() {
    init_logging();
    let (state, _) = update(registering(), Msg::RegisterNameChanged("Ana".to_string()));
    let before = state.clone();
    let (next, effects) = update(state, Msg::RegisterSubmitted);

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn completed_registration_returns_to_login_with_profile() {
    init_logging();
    let mut state = registering();
    for msg in [
        Msg::RegisterNameChanged("Ana".to_string()),
        Msg::RegisterEmailChanged("ana@mail.cl".to_string()),
        Msg::RegisterPasswordChanged("clave1".to_string()),
        Msg::DietSelected(Diet::Vegan),
        Msg::CuisineMenuToggled(true),
        Msg::CuisineSelected(Cuisine::Japanese),
        Msg::TermsToggled(true),
    ] {
        state = update(state, msg).0;
    }
    let view = register_view(&state);
    assert!(!view.cuisine_menu_open);
    assert!(view.submit_enabled);

    let (state, effects) = update(state, Msg::RegisterSubmitted);
    assert_eq!(*state.flow(), AuthFlow::LoggedOut);
    assert_eq!(state.view().route.screen, Screen::Login);
    assert_eq!(
        effects,
        vec![Effect::RegistrationSubmitted(RegistrationProfile {
            name: "Ana".to_string(),
            email: "ana@mail.cl".to_string(),
            diet: Diet::Vegan,
            cuisine: Cuisine::Japanese,
        })]
    );
}

#[test]
fn cancel_discards_the_form() {
    init_logging();
    let (state, _) = update(registering(), Msg::TermsToggled(true));
    let (state, _) = update(state, Msg::BackPressed);
    assert_eq!(*state.flow(), AuthFlow::LoggedOut);

    let (state, _) = update(state, Msg::RegisterClicked);
    assert!(!register_view(&state).accept_terms);
}

#[test]
fn recovery_sends_instructions_and_returns() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ForgotPasswordClicked);
    assert_eq!(state.view().route.screen, Screen::Recover);

    let (state, _) = update(state, Msg::RecoverEmailChanged("ana@mail.cl".to_string()));
    let (state, effects) = update(state, Msg::RecoverSubmitted);

    assert_eq!(*state.flow(), AuthFlow::LoggedOut);
    assert_eq!(
        effects,
        vec![Effect::RecoveryRequested {
            email: "ana@mail.cl".to_string()
        }]
    );
}

#[test]
fn recovery_back_returns_to_login() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ForgotPasswordClicked);
    let (state, effects) = update(state, Msg::BackPressed);
    assert_eq!(*state.flow(), AuthFlow::LoggedOut);
    assert_eq!(state.history_depth(), 1);
    assert!(effects.is_empty());
}
