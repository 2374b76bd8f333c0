use serde::Serialize;

use crate::view_model::{
    AppViewModel, DetailView, ListView, LoginView, RecipeCard, RecoverView, RegisterView,
    ScreenView,
};
use crate::{
    route_for, validate_email, validate_password, AuthFlow, AuthFlowController, RecipeCatalog,
    ValidationResult, PASSWORD_HINT,
};

/// Title of the detail screen when the day has no recipe.
pub const FALLBACK_RECIPE_TITLE: &str = "Recipe";

/// Columns of the weekly grid.
pub const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Diet {
    #[default]
    #[serde(rename = "Omnívora")]
    Omnivore,
    #[serde(rename = "Vegetariana")]
    Vegetarian,
    #[serde(rename = "Vegana")]
    Vegan,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Omnivore, Diet::Vegetarian, Diet::Vegan];

    pub fn label(self) -> &'static str {
        match self {
            Diet::Omnivore => "Omnívora",
            Diet::Vegetarian => "Vegetariana",
            Diet::Vegan => "Vegana",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Cuisine {
    #[default]
    #[serde(rename = "Chilena")]
    Chilean,
    #[serde(rename = "Italiana")]
    Italian,
    #[serde(rename = "Japonesa")]
    Japanese,
    #[serde(rename = "Mexicana")]
    Mexican,
}

impl Cuisine {
    pub const ALL: [Cuisine; 4] = [
        Cuisine::Chilean,
        Cuisine::Italian,
        Cuisine::Japanese,
        Cuisine::Mexican,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Cuisine::Chilean => "Chilena",
            Cuisine::Italian => "Italiana",
            Cuisine::Japanese => "Japonesa",
            Cuisine::Mexican => "Mexicana",
        }
    }
}

/// What a completed registration hands to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationProfile {
    pub name: String,
    pub email: String,
    pub diet: Diet,
    pub cuisine: Cuisine,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct LoginForm {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) reveal_errors: bool,
    pub(crate) email_check: ValidationResult,
    pub(crate) password_check: ValidationResult,
}

impl LoginForm {
    pub(crate) fn set_email(&mut self, value: String) {
        self.email_check = validate_email(&value, self.reveal_errors);
        self.email = value;
    }

    pub(crate) fn set_password(&mut self, value: String) {
        self.password_check = validate_password(&value, self.reveal_errors);
        self.password = value;
    }

    /// Turns on error reveal and re-runs both validators.
    pub(crate) fn revalidate_for_submit(&mut self) {
        self.reveal_errors = true;
        self.email_check = validate_email(&self.email, true);
        self.password_check = validate_password(&self.password, true);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RegisterForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) diet: Diet,
    pub(crate) cuisine: Cuisine,
    pub(crate) cuisine_menu_open: bool,
    pub(crate) accept_terms: bool,
}

impl RegisterForm {
    pub(crate) fn profile(&self) -> RegistrationProfile {
        RegistrationProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            diet: self.diet,
            cuisine: self.cuisine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RecoverForm {
    pub(crate) email: String,
}

/// Whole application state: catalog, navigation history and form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) catalog: RecipeCatalog,
    pub(crate) flow: AuthFlowController,
    pub(crate) login: LoginForm,
    pub(crate) register: RegisterForm,
    pub(crate) recover: RecoverForm,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn flow(&self) -> &AuthFlow {
        self.flow.current()
    }

    pub fn history_depth(&self) -> usize {
        self.flow.depth()
    }

    pub fn view(&self) -> AppViewModel {
        let route = route_for(self.flow.current());
        let screen = match self.flow.current() {
            AuthFlow::LoggedOut => ScreenView::Login(self.login_view()),
            AuthFlow::Registering => ScreenView::Register(self.register_view()),
            AuthFlow::RecoveringPassword => ScreenView::Recover(RecoverView {
                email: self.recover.email.clone(),
            }),
            AuthFlow::LoggedIn => ScreenView::List(self.list_view()),
            AuthFlow::ViewingDetail { day } => ScreenView::Detail(self.detail_view(day)),
        };
        AppViewModel {
            route,
            screen,
            dirty: self.dirty,
        }
    }

    /// Returns whether visible state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn login_view(&self) -> LoginView {
        let form = &self.login;
        let password_error = form.password_check.error().map(|e| e.to_string());
        LoginView {
            email: form.email.clone(),
            password_len: form.password.chars().count(),
            email_error: form.email_check.error().map(|e| e.to_string()),
            password_hint: password_error.is_none().then(|| PASSWORD_HINT.to_owned()),
            password_error,
            submit_enabled: !form.email.is_empty() && !form.password.is_empty(),
        }
    }

    fn register_view(&self) -> RegisterView {
        let form = &self.register;
        RegisterView {
            name: form.name.clone(),
            email: form.email.clone(),
            password_len: form.password.chars().count(),
            diet: form.diet,
            cuisine: form.cuisine,
            cuisine_menu_open: form.cuisine_menu_open,
            accept_terms: form.accept_terms,
            submit_enabled: form.accept_terms,
        }
    }

    fn list_view(&self) -> ListView {
        ListView {
            columns: GRID_COLUMNS,
            cards: self
                .catalog
                .recipes()
                .map(|recipe| RecipeCard {
                    day: recipe.day.clone(),
                    name: recipe.name.clone(),
                })
                .collect(),
        }
    }

    fn detail_view(&self, day: &str) -> DetailView {
        match self.catalog.find_by_day(day) {
            Some(recipe) => DetailView {
                day: day.to_owned(),
                found: true,
                title: recipe.name.clone(),
                ingredients: recipe.ingredients.clone(),
                notes: recipe.notes.clone(),
            },
            // Empty and unknown days share this fallback.
            None => DetailView {
                day: day.to_owned(),
                found: false,
                title: FALLBACK_RECIPE_TITLE.to_owned(),
                ingredients: Vec::new(),
                notes: String::new(),
            },
        }
    }
}
