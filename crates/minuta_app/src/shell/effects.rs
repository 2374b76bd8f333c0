use minuta_core::Effect;
use minuta_logging::{minuta_info, minuta_warn};

/// Runs effects returned by `update`. There is no backend, so running one
/// means recording it in the log and returning a line for the user.
pub fn run(effects: Vec<Effect>) -> Vec<String> {
    effects.into_iter().map(run_one).collect()
}

fn run_one(effect: Effect) -> String {
    match effect {
        Effect::LoginSucceeded { email } => {
            minuta_info!("LoginSucceeded email_len={}", email.len());
            "Login successful".to_string()
        }
        Effect::RegistrationSubmitted(profile) => {
            match serde_json::to_string(&profile) {
                Ok(json) => minuta_info!("RegistrationSubmitted {}", json),
                Err(err) => minuta_warn!("RegistrationSubmitted (unserializable: {})", err),
            }
            format!("Registered {}", profile.name)
        }
        Effect::RecoveryRequested { email } => {
            minuta_info!("RecoveryRequested email_len={}", email.len());
            "Recovery instructions sent".to_string()
        }
        Effect::LoggedOut => {
            minuta_info!("LoggedOut");
            "Logged out".to_string()
        }
    }
}
