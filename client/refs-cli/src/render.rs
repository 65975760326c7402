//! Plain-text rendering of screens.

use crate::app::{Screen, View};
use crate::flows::{AdminListing, AdminLogin, ListingState, RegistrationForm};

use refs_core::RegistrationRecord;

pub const EMPTY_TABLE_MESSAGE: &str = "No registrations found.";
const DEFAULT_SUCCESS_MESSAGE: &str = "You're on the list. We'll be in touch.";

pub fn render_screen(screen: &Screen) -> String {
    let mut lines: Vec<String> = screen.notices.iter().map(|n| format!("! {n}")).collect();

    let body = match &screen.view {
        View::Landing(form) => render_registration(form),
        View::AdminLogin(form) => render_login(form),
        View::AdminDashboard(listing) => render_listing(listing),
    };
    lines.push(body);

    lines.join("\n")
}

fn render_registration(form: &RegistrationForm) -> String {
    if let Some(error) = form.error() {
        return format!("Error: {error}");
    }

    if form.is_success() {
        return form
            .server_message()
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
            .to_string();
    }

    String::from("Join the waitlist: refs register <EMAIL>")
}

fn render_login(form: &AdminLogin) -> String {
    match form.error() {
        Some(error) => format!("Error: {error}"),
        None => String::from("Admin login: refs admin login --username <USER> --password <PASS>"),
    }
}

fn render_listing(listing: &AdminListing) -> String {
    match listing.state() {
        ListingState::Loaded(records) => {
            let mut out = registration_table(records, listing.date_format());
            if !records.is_empty() {
                out.push_str(&format!("\n\n{} registration(s)", records.len()));
            }
            out
        }
        ListingState::Failed => {
            format!("Error: {}", listing.notice().unwrap_or("Request failed."))
        }
        ListingState::Loading => String::from("Loading..."),
        ListingState::Unauthenticated { .. } => String::from("Not logged in."),
    }
}

/// Two-column `Email | Registration Date` table, dates in local time.
pub fn registration_table(records: &[RegistrationRecord], date_format: &str) -> String {
    const EMAIL: &str = "Email";
    const DATE: &str = "Registration Date";

    let rows: Vec<(&str, String)> = records
        .iter()
        .map(|r| (r.email.as_str(), r.format_created_at(date_format)))
        .collect();

    let email_width = rows
        .iter()
        .map(|(email, _)| email.chars().count())
        .chain(std::iter::once(EMAIL.len()))
        .max()
        .unwrap_or(EMAIL.len());
    let date_width = rows
        .iter()
        .map(|(_, date)| date.chars().count())
        .chain(std::iter::once(DATE.len()))
        .max()
        .unwrap_or(DATE.len());

    let mut lines = vec![
        format!("{EMAIL:<email_width$}  {DATE}"),
        format!("{}  {}", "-".repeat(email_width), "-".repeat(date_width)),
    ];

    if rows.is_empty() {
        lines.push(EMPTY_TABLE_MESSAGE.to_string());
    }

    for (email, date) in &rows {
        lines.push(format!("{email:<email_width$}  {date}"));
    }

    lines.join("\n")
}
