use minuta_logging::minuta_debug;

use crate::ValidationResult;

/// Where the user is in the login/browse flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthFlow {
    #[default]
    LoggedOut,
    Registering,
    RecoveringPassword,
    LoggedIn,
    ViewingDetail { day: String },
}

/// Result of a transition intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The flow moved to a new state.
    Moved,
    /// The intent is valid here but its precondition failed (bad fields, terms not accepted).
    Rejected,
    /// The intent does not apply to the current state.
    Ignored,
}

impl Transition {
    pub fn moved(self) -> bool {
        self == Transition::Moved
    }
}

/// Navigation history. The last entry is the current state and the stack is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFlowController {
    stack: Vec<AuthFlow>,
}

impl Default for AuthFlowController {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlowController {
    pub fn new() -> Self {
        Self {
            stack: vec![AuthFlow::LoggedOut],
        }
    }

    pub fn current(&self) -> &AuthFlow {
        // Invariant: stack is never empty.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of entries in the history, the current one included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Both results must come from validators run with `reveal_errors = true`.
    pub fn submit_login(
        &mut self,
        email: &ValidationResult,
        password: &ValidationResult,
    ) -> Transition {
        if *self.current() != AuthFlow::LoggedOut {
            return Transition::Ignored;
        }
        if !(email.is_valid() && password.is_valid()) {
            return Transition::Rejected;
        }
        // The login form is not kept under the menu.
        self.replace_all(AuthFlow::LoggedIn)
    }

    pub fn go_to_register(&mut self) -> Transition {
        self.push_from(&AuthFlow::LoggedOut, AuthFlow::Registering)
    }

    pub fn go_to_recover(&mut self) -> Transition {
        self.push_from(&AuthFlow::LoggedOut, AuthFlow::RecoveringPassword)
    }

    /// Completes registration; a no-op until the terms are accepted.
    pub fn complete_registration(&mut self, accepted_terms: bool) -> Transition {
        if *self.current() != AuthFlow::Registering {
            return Transition::Ignored;
        }
        if !accepted_terms {
            return Transition::Rejected;
        }
        self.pop()
    }

    /// Leaves the recovery screen after instructions were requested.
    pub fn complete_recovery(&mut self) -> Transition {
        if *self.current() != AuthFlow::RecoveringPassword {
            return Transition::Ignored;
        }
        self.pop()
    }

    pub fn select_recipe(&mut self, day: &str) -> Transition {
        self.push_from(
            &AuthFlow::LoggedIn,
            AuthFlow::ViewingDetail {
                day: day.to_owned(),
            },
        )
    }

    /// Clears the history down to a fresh login screen.
    pub fn logout(&mut self) -> Transition {
        if *self.current() != AuthFlow::LoggedIn {
            return Transition::Ignored;
        }
        self.replace_all(AuthFlow::LoggedOut)
    }

    /// Pops one entry. Ignored at the root of the history.
    pub fn back(&mut self) -> Transition {
        match self.current() {
            AuthFlow::Registering
            | AuthFlow::RecoveringPassword
            | AuthFlow::ViewingDetail { .. } => self.pop(),
            AuthFlow::LoggedOut | AuthFlow::LoggedIn => Transition::Ignored,
        }
    }

    fn push_from(&mut self, expected: &AuthFlow, next: AuthFlow) -> Transition {
        if self.current() != expected {
            return Transition::Ignored;
        }
        minuta_debug!("flow push {:?} -> {:?}", self.current(), next);
        self.stack.push(next);
        Transition::Moved
    }

    fn pop(&mut self) -> Transition {
        if self.stack.len() <= 1 {
            return Transition::Ignored;
        }
        let left = self.stack.pop();
        minuta_debug!("flow pop {:?} -> {:?}", left, self.current());
        Transition::Moved
    }

    fn replace_all(&mut self, next: AuthFlow) -> Transition {
        minuta_debug!(
            "flow reset {:?} -> {:?} (dropped {} entries)",
            self.current(),
            next,
            self.stack.len()
        );
        self.stack.clear();
        self.stack.push(next);
        Transition::Moved
    }
}
