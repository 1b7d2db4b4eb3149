//! Self-contained HTML detail page for one opponent.
//!
//! User-entered text is escaped. Tactics are inserted as stored, since they
//! already are markup produced by [`crate::markdown::render`].

use crate::history::{history_rows, HistoryRow};
use crate::types::OpponentRecord;
use std::fmt::Write as _;

pub const NO_TACTICS_PLACEHOLDER: &str = "No game plan has been generated yet.";

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn item_list(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        return format!("<li>{placeholder}</li>");
    }
    items
        .iter()
        .map(|s| format!("<li>{}</li>", html_escape(s)))
        .collect()
}

/// Inner markup of the tactics panel.
pub fn tactics_panel(opponent: &OpponentRecord) -> String {
    match opponent.cached_tactics() {
        Some(markup) => markup.to_string(),
        None => format!("<p><em>{NO_TACTICS_PLACEHOLDER}</em></p>"),
    }
}

/// Table body rows for the match history.
pub fn history_body(opponent: &OpponentRecord) -> String {
    let mut body = String::new();
    for row in history_rows(&opponent.matches) {
        match row {
            HistoryRow::Match {
                position,
                date,
                score,
            } => {
                let _ = write!(
                    body,
                    "<tr><td>{}</td><td>{}</td><td>#{position}</td></tr>",
                    html_escape(&date),
                    html_escape(&score)
                );
            }
            HistoryRow::Placeholder { message } => {
                let _ = write!(body, "<tr><td colspan=\"3\">{message}</td></tr>");
            }
        }
    }
    body
}

pub fn render_page(opponent: &OpponentRecord) -> String {
    let name = html_escape(&opponent.name);
    let mut page = String::with_capacity(4096);

    let _ = write!(
        page,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{name} | Tennis Ledger</title>\n</head>\n<body>\n<h1>{name}</h1>\n"
    );

    let style = opponent.style_str();
    if !style.is_empty() && style != "Unknown" {
        let _ = writeln!(page, "<span class=\"style-badge\">{}</span>", html_escape(style));
    }

    let _ = writeln!(
        page,
        "<section class=\"detail-section\"><h2>Strengths</h2><ul>{}</ul></section>",
        item_list(&opponent.strengths, "No strengths listed.")
    );
    let _ = writeln!(
        page,
        "<section class=\"detail-section\"><h2>Weaknesses</h2><ul>{}</ul></section>",
        item_list(&opponent.weaknesses, "No weaknesses listed.")
    );

    let notes = opponent.mental_notes_str();
    if !notes.is_empty() {
        let _ = writeln!(
            page,
            "<section class=\"detail-section\"><h2>Mental Notes</h2><p>{}</p></section>",
            html_escape(notes)
        );
    }

    let _ = writeln!(
        page,
        "<section class=\"detail-section\"><h2>Game Plan</h2><div id=\"tactics-output\">{}</div></section>",
        tactics_panel(opponent)
    );

    let _ = writeln!(
        page,
        "<section class=\"detail-section\"><h2>Match History</h2>\
         <table id=\"match-history\"><thead><tr><th>Date</th><th>Score</th><th>#</th></tr></thead>\
         <tbody>{}</tbody></table></section>",
        history_body(opponent)
    );

    page.push_str("</body>\n</html>\n");
    page
}
