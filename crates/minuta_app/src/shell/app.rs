use std::io::{self, BufRead, Write};
use std::path::Path;

use minuta_core::{update, AppState, Msg};
use minuta_logging::{minuta_debug, minuta_info, minuta_warn};

use super::command::{self, Command, HELP};
use super::config::{load_log_settings, CONFIG_FILENAME};
use super::{effects, render};

pub fn run_app() -> anyhow::Result<()> {
    let settings = load_log_settings(Path::new(CONFIG_FILENAME));
    minuta_logging::initialize(&settings);
    minuta_info!("minuta starting (log level {})", settings.level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();
    session.run(stdin.lock(), stdout.lock())?;

    minuta_info!("minuta exiting");
    Ok(())
}

/// One terminal session: owns the state and feeds it one line at a time.
struct Session {
    state: AppState,
}

impl Session {
    fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write!(output, "{}", render::render(&self.state.view()))?;
        for line in input.lines() {
            let line = line?;
            match command::parse(&line, self.state.flow()) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(output, "{}", HELP)?,
                Ok(Command::Dispatch(msg)) => {
                    for note in self.dispatch_msg(msg) {
                        writeln!(output, "> {}", note)?;
                    }
                    if self.state.consume_dirty() {
                        write!(output, "{}", render::render(&self.state.view()))?;
                    }
                }
                Err(err) => {
                    minuta_warn!("Rejected input {:?}: {}", line, err);
                    writeln!(output, "! {}", err)?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) -> Vec<String> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        minuta_debug!("now at {}", self.state.view().route);
        effects::run(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minuta_core::AuthFlow;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new();
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scripted_login_and_browse() {
        let (session, output) = run_script(
            "email a@b.co\npassword abcde1\nlogin\nopen Lunes\nback\nopen Domingo\n",
        );
        assert!(output.contains("> Login successful"));
        assert!(output.contains("== [detail/Lunes] =="));
        assert!(output.contains("Tortilla de verduras"));
        assert_eq!(
            *session.state.flow(),
            AuthFlow::ViewingDetail {
                day: "Domingo".to_string()
            }
        );
    }

    #[test]
    fn bad_input_reports_and_keeps_state() {
        let (session, output) = run_script("open Lunes\nfly\n");
        // Only the initial screen is drawn: the ignored selection changed nothing.
        assert_eq!(output.matches("== [").count(), 1);
        assert!(output.contains("! unknown command \"fly\""));
        assert_eq!(*session.state.flow(), AuthFlow::LoggedOut);
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = run_script("register\nquit\nback\n");
        assert_eq!(*session.state.flow(), AuthFlow::Registering);
    }
}
