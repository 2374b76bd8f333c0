use crate::{Cuisine, Diet, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub screen: ScreenView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Login(LoginView),
    Register(RegisterView),
    Recover(RecoverView),
    List(ListView),
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub email: String,
    /// The password itself is never exposed to the renderer.
    pub password_len: usize,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    /// Set only while the password has no error.
    pub password_hint: Option<String>,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterView {
    pub name: String,
    pub email: String,
    pub password_len: usize,
    pub diet: Diet,
    pub cuisine: Cuisine,
    pub cuisine_menu_open: bool,
    pub accept_terms: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverView {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub columns: usize,
    pub cards: Vec<RecipeCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub day: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub day: String,
    pub found: bool,
    pub title: String,
    pub ingredients: Vec<String>,
    pub notes: String,
}
