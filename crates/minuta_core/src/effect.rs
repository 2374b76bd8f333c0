use crate::RegistrationProfile;

/// Outward intents for the shell. The core never performs them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoginSucceeded { email: String },
    RegistrationSubmitted(RegistrationProfile),
    RecoveryRequested { email: String },
    LoggedOut,
}
