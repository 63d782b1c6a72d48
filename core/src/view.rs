//! Plain-text rendering of the country screen.

use std::fmt::Write;

use crate::form::CountryForm;
use crate::types::Country;

pub const TITLE: &str = "Manage Countries";
pub const PLACEHOLDER: &str = "Enter country name";

const ACTIONS: &str = "[Edit] [Delete]";
const ACTIONS_WIDTH: usize = ACTIONS.len();

/// Render the heading, the form, and the country table.
pub fn render(countries: &[Country], form: &CountryForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
    out.push_str(&render_form(form));
    out.push('\n');
    out.push_str(&render_table(countries));
    out
}

pub fn render_form(form: &CountryForm) -> String {
    let input = if form.name.is_empty() {
        format!("<{PLACEHOLDER}>")
    } else {
        form.name.clone()
    };
    format!("Name: {input}\n[{}] [Reset]\n", form.submit_label())
}

pub fn render_table(countries: &[Country]) -> String {
    let id_width = countries
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Id".len());
    let name_width = countries
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "| {:<id_width$} | {:<name_width$} | {:<ACTIONS_WIDTH$} |",
        "Id", "Name", "Actions"
    );
    let _ = writeln!(
        out,
        "|{}|{}|{}|",
        "-".repeat(id_width + 2),
        "-".repeat(name_width + 2),
        "-".repeat(ACTIONS_WIDTH + 2)
    );
    for c in countries {
        let _ = writeln!(
            out,
            "| {:<id_width$} | {:<name_width$} | {ACTIONS} |",
            c.id, c.name
        );
    }
    out
}
