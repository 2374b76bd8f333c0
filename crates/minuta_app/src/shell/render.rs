use std::fmt::Write;

use minuta_core::{
    AppViewModel, Cuisine, DetailView, Diet, ListView, LoginView, RecoverView, RegisterView,
    ScreenView,
};

const HEADER: &str = "🍴 Tu Minuta Semanal";

/// Renders the current screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== [{}] ==", view.route);
    match &view.screen {
        ScreenView::Login(login) => render_login(&mut out, login),
        ScreenView::Register(register) => render_register(&mut out, register),
        ScreenView::Recover(recover) => render_recover(&mut out, recover),
        ScreenView::List(list) => render_list(&mut out, list),
        ScreenView::Detail(detail) => render_detail(&mut out, detail),
    }
    out
}

fn render_login(out: &mut String, view: &LoginView) {
    let _ = writeln!(out, "Log in");
    let _ = writeln!(out, "  Email:    {}", view.email);
    if let Some(error) = &view.email_error {
        let _ = writeln!(out, "            ! {}", error);
    }
    let _ = writeln!(out, "  Password: {}", "*".repeat(view.password_len));
    match (&view.password_error, &view.password_hint) {
        (Some(error), _) => {
            let _ = writeln!(out, "            ! {}", error);
        }
        (None, Some(hint)) => {
            let _ = writeln!(out, "            ({})", hint);
        }
        (None, None) => {}
    }
    let _ = writeln!(out, "  [login]{}", disabled(view.submit_enabled));
    let _ = writeln!(out, "  [register]  [forgot]");
}

fn render_register(out: &mut String, view: &RegisterView) {
    let _ = writeln!(out, "Sign up");
    let _ = writeln!(out, "  Name:     {}", view.name);
    let _ = writeln!(out, "  Email:    {}", view.email);
    let _ = writeln!(out, "  Password: {}", "*".repeat(view.password_len));
    let _ = writeln!(out, "  Diet:");
    for diet in Diet::ALL {
        let _ = writeln!(out, "    ({}) {}", mark(diet == view.diet), diet.label());
    }
    let _ = writeln!(out, "  Cuisine:  {}", view.cuisine.label());
    if view.cuisine_menu_open {
        for cuisine in Cuisine::ALL {
            let _ = writeln!(out, "    - {}", cuisine.label());
        }
    }
    let _ = writeln!(
        out,
        "  [{}] I accept the terms and conditions",
        mark(view.accept_terms)
    );
    let _ = writeln!(out, "  [submit]{}", disabled(view.submit_enabled));
}

fn render_recover(out: &mut String, view: &RecoverView) {
    let _ = writeln!(out, "Recover password");
    let _ = writeln!(out, "  Email: {}", view.email);
    let _ = writeln!(out, "  [submit] send instructions");
}

fn render_list(out: &mut String, view: &ListView) {
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "Plan your week's meals with easy, healthy recipes");
    let columns = view.columns.max(1);
    for row in view.cards.chunks(columns) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| format!("{:<11}{:<36}", card.day, card.name))
            .collect();
        let _ = writeln!(out, "  {}", cells.join("").trim_end());
    }
    let _ = writeln!(out, "  [open <day>]  [logout]");
}

fn render_detail(out: &mut String, view: &DetailView) {
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "Ingredients:");
    for ingredient in &view.ingredients {
        let _ = writeln!(out, "  • {}", ingredient);
    }
    let _ = writeln!(out, "Recommendations:");
    let _ = writeln!(out, "  {}", view.notes);
    let _ = writeln!(out, "  [back]");
}

fn mark(on: bool) -> char {
    if on {
        'x'
    } else {
        ' '
    }
}

fn disabled(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " (disabled)"
    }
}
