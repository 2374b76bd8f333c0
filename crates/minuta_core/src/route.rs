use std::fmt;

use crate::AuthFlow;

/// The five UI destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Register,
    Recover,
    List,
    Detail,
}

impl Screen {
    pub fn id(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::Recover => "recover",
            Screen::List => "list",
            Screen::Detail => "detail",
        }
    }
}

/// Screen plus its optional parameter (the day, detail screen only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    pub param: Option<String>,
}

impl Route {
    fn bare(screen: Screen) -> Self {
        Self {
            screen,
            param: None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}/{}", self.screen.id(), param),
            None => f.write_str(self.screen.id()),
        }
    }
}

/// Maps a flow state to the screen that displays it.
pub fn route_for(flow: &AuthFlow) -> Route {
    match flow {
        AuthFlow::LoggedOut => Route::bare(Screen::Login),
        AuthFlow::Registering => Route::bare(Screen::Register),
        AuthFlow::RecoveringPassword => Route::bare(Screen::Recover),
        AuthFlow::LoggedIn => Route::bare(Screen::List),
        AuthFlow::ViewingDetail { day } => Route {
            screen: Screen::Detail,
            param: Some(day.clone()),
        },
    }
}
