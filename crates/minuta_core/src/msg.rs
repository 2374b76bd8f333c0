use crate::{Cuisine, Diet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the login email field.
    LoginEmailChanged(String),
    /// User edited the login password field.
    LoginPasswordChanged(String),
    /// User pressed the login button.
    LoginSubmitted,
    /// User followed the "register" link on the login screen.
    RegisterClicked,
    /// User followed the "forgot password" link on the login screen.
    ForgotPasswordClicked,
    RegisterNameChanged(String),
    RegisterEmailChanged(String),
    RegisterPasswordChanged(String),
    DietSelected(Diet),
    /// Open (`true`) or dismiss (`false`) the cuisine dropdown.
    CuisineMenuToggled(bool),
    /// Picking a cuisine also closes the dropdown.
    CuisineSelected(Cuisine),
    TermsToggled(bool),
    /// User pressed the register button.
    RegisterSubmitted,
    RecoverEmailChanged(String),
    /// User pressed "send instructions".
    RecoverSubmitted,
    /// User tapped a card in the weekly grid.
    RecipeSelected(String),
    LogoutClicked,
    /// Back button or system back.
    BackPressed,
    /// Fallback for placeholder wiring.
    NoOp,
}
