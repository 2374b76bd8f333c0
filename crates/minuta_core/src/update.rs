use minuta_logging::{minuta_debug, minuta_info};

use crate::state::{LoginForm, RecoverForm, RegisterForm};
use crate::{AppState, AuthFlow, Effect, Msg, Transition};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages aimed at a screen that is not showing are dropped.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoginEmailChanged(value) => {
            if on(&state, &AuthFlow::LoggedOut) {
                state.login.set_email(value);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LoginPasswordChanged(value) => {
            if on(&state, &AuthFlow::LoggedOut) {
                state.login.set_password(value);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LoginSubmitted => submit_login(&mut state),
        Msg::RegisterClicked => {
            if moved(&mut state, |flow| flow.go_to_register()) {
                state.register = RegisterForm::default();
            }
            Vec::new()
        }
        Msg::ForgotPasswordClicked => {
            if moved(&mut state, |flow| flow.go_to_recover()) {
                state.recover = RecoverForm::default();
            }
            Vec::new()
        }
        Msg::RegisterNameChanged(value) => {
            edit_register(&mut state, |form| form.name = value);
            Vec::new()
        }
        Msg::RegisterEmailChanged(value) => {
            edit_register(&mut state, |form| form.email = value);
            Vec::new()
        }
        Msg::RegisterPasswordChanged(value) => {
            edit_register(&mut state, |form| form.password = value);
            Vec::new()
        }
        Msg::DietSelected(diet) => {
            edit_register(&mut state, |form| form.diet = diet);
            Vec::new()
        }
        Msg::CuisineMenuToggled(open) => {
            edit_register(&mut state, |form| form.cuisine_menu_open = open);
            Vec::new()
        }
        Msg::CuisineSelected(cuisine) => {
            edit_register(&mut state, |form| {
                form.cuisine = cuisine;
                form.cuisine_menu_open = false;
            });
            Vec::new()
        }
        Msg::TermsToggled(accepted) => {
            edit_register(&mut state, |form| form.accept_terms = accepted);
            Vec::new()
        }
        Msg::RegisterSubmitted => {
            let accepted = state.register.accept_terms;
            match state.flow.complete_registration(accepted) {
                Transition::Moved => {
                    state.mark_dirty();
                    let profile = state.register.profile();
                    state.register = RegisterForm::default();
                    vec![Effect::RegistrationSubmitted(profile)]
                }
                Transition::Rejected => {
                    minuta_debug!("registration ignored: terms not accepted");
                    Vec::new()
                }
                Transition::Ignored => Vec::new(),
            }
        }
        Msg::RecoverEmailChanged(value) => {
            if on(&state, &AuthFlow::RecoveringPassword) {
                state.recover.email = value;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RecoverSubmitted => {
            if moved(&mut state, |flow| flow.complete_recovery()) {
                let form = std::mem::take(&mut state.recover);
                vec![Effect::RecoveryRequested { email: form.email }]
            } else {
                Vec::new()
            }
        }
        Msg::RecipeSelected(day) => {
            moved(&mut state, |flow| flow.select_recipe(&day));
            Vec::new()
        }
        Msg::LogoutClicked => {
            if moved(&mut state, |flow| flow.logout()) {
                state.login = LoginForm::default();
                vec![Effect::LoggedOut]
            } else {
                Vec::new()
            }
        }
        Msg::BackPressed => {
            moved(&mut state, |flow| flow.back());
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_login(state: &mut AppState) -> Vec<Effect> {
    if !on(state, &AuthFlow::LoggedOut) {
        return Vec::new();
    }
    state.login.revalidate_for_submit();
    state.mark_dirty();

    let form = &state.login;
    match state.flow.submit_login(&form.email_check, &form.password_check) {
        Transition::Moved => {
            minuta_info!("Login accepted");
            vec![Effect::LoginSucceeded {
                email: state.login.email.clone(),
            }]
        }
        Transition::Rejected => {
            minuta_info!(
                "Login rejected: email='{}' password='{}'",
                form.email_check.message(),
                form.password_check.message()
            );
            Vec::new()
        }
        Transition::Ignored => Vec::new(),
    }
}

fn on(state: &AppState, flow: &AuthFlow) -> bool {
    state.flow.current() == flow
}

fn moved(
    state: &mut AppState,
    intent: impl FnOnce(&mut crate::AuthFlowController) -> Transition,
) -> bool {
    let moved = intent(&mut state.flow).moved();
    if moved {
        state.mark_dirty();
    }
    moved
}

fn edit_register(state: &mut AppState, edit: impl FnOnce(&mut RegisterForm)) {
    if on(state, &AuthFlow::Registering) {
        edit(&mut state.register);
        state.mark_dirty();
    }
}
