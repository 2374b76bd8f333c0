use minuta_core::{AuthFlow, Cuisine, Diet, Msg};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  email <text>      edit the email field of the current form
  password <text>   edit the password field of the current form
  name <text>       edit the registration name
  diet <omnivora|vegetariana|vegana>
  cuisine <open|close|chilena|italiana|japonesa|mexicana>
  terms <on|off>
  login | register | forgot
  submit            press the main button of the current form
  open <day>        show a recipe from the weekly menu
  back | logout | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{command}` does not accept {value:?}")]
    BadArgument { command: &'static str, value: String },
    #[error("`{0}` is not available on this screen")]
    NotOnThisScreen(&'static str),
}

/// Parses one input line against the screen currently showing.
///
/// Field text is taken verbatim after the first space, so `email` alone clears
/// the field.
pub fn parse(line: &str, flow: &AuthFlow) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let msg = match word {
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "email" => match flow {
            AuthFlow::LoggedOut => Msg::LoginEmailChanged(rest.to_string()),
            AuthFlow::Registering => Msg::RegisterEmailChanged(rest.to_string()),
            AuthFlow::RecoveringPassword => Msg::RecoverEmailChanged(rest.to_string()),
            _ => return Err(CommandError::NotOnThisScreen("email")),
        },
        "password" => match flow {
            AuthFlow::LoggedOut => Msg::LoginPasswordChanged(rest.to_string()),
            AuthFlow::Registering => Msg::RegisterPasswordChanged(rest.to_string()),
            _ => return Err(CommandError::NotOnThisScreen("password")),
        },
        "name" => Msg::RegisterNameChanged(rest.to_string()),
        "login" => Msg::LoginSubmitted,
        "register" => Msg::RegisterClicked,
        "forgot" => Msg::ForgotPasswordClicked,
        "submit" => match flow {
            AuthFlow::LoggedOut => Msg::LoginSubmitted,
            AuthFlow::Registering => Msg::RegisterSubmitted,
            AuthFlow::RecoveringPassword => Msg::RecoverSubmitted,
            _ => return Err(CommandError::NotOnThisScreen("submit")),
        },
        "diet" => {
            let arg = required_arg("diet", rest)?;
            let diet = Diet::ALL
                .into_iter()
                .find(|diet| same_word(diet.label(), arg))
                .ok_or_else(|| bad("diet", arg))?;
            Msg::DietSelected(diet)
        }
        "cuisine" => match required_arg("cuisine", rest)? {
            "open" => Msg::CuisineMenuToggled(true),
            "close" => Msg::CuisineMenuToggled(false),
            arg => {
                let cuisine = Cuisine::ALL
                    .into_iter()
                    .find(|cuisine| same_word(cuisine.label(), arg))
                    .ok_or_else(|| bad("cuisine", arg))?;
                Msg::CuisineSelected(cuisine)
            }
        },
        "terms" => match required_arg("terms", rest)? {
            "on" | "yes" => Msg::TermsToggled(true),
            "off" | "no" => Msg::TermsToggled(false),
            arg => return Err(bad("terms", arg)),
        },
        // Day names are passed through untouched; lookup is case-sensitive.
        "open" => Msg::RecipeSelected(required_arg("open", rest)?.to_string()),
        "back" => Msg::BackPressed,
        "logout" => Msg::LogoutClicked,
        "" => Msg::NoOp,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn required_arg<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    let arg = rest.trim();
    if arg.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

fn bad(command: &'static str, value: &str) -> CommandError {
    CommandError::BadArgument {
        command,
        value: value.to_string(),
    }
}

/// Case- and accent-insensitive comparison for option names.
fn same_word(label: &str, input: &str) -> bool {
    fold(label) == fold(input)
}

fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}
