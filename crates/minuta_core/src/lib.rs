//! Minuta core: pure state machine, validators and view-model helpers.
mod catalog;
mod effect;
mod flow;
mod msg;
mod route;
mod state;
mod update;
mod validation;
mod view_model;

pub use catalog::{Recipe, RecipeCatalog, WEEKDAYS};
pub use effect::Effect;
pub use flow::{AuthFlow, AuthFlowController, Transition};
pub use msg::Msg;
pub use route::{route_for, Route, Screen};
pub use state::{
    AppState, Cuisine, Diet, RegistrationProfile, FALLBACK_RECIPE_TITLE, GRID_COLUMNS,
};
pub use update::update;
pub use validation::{
    validate_email, validate_password, FieldError, ValidationResult, MIN_PASSWORD_LEN,
    PASSWORD_HINT,
};
pub use view_model::{
    AppViewModel, DetailView, ListView, LoginView, RecipeCard, RecoverView, RegisterView,
    ScreenView,
};
