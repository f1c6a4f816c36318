//! Prompt lines as widget events.
//!
//! A plain line is the new content of the search box. Lines starting with
//! `:` drive the pager or the widget itself.

use crate::{InputError, WidgetEvent};

pub const HELP: &str = "type to search, :page N (:p N), :next (:n), :prev (:b), :quit (:q)";

pub fn parse_line(line: &str) -> Result<WidgetEvent, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return Ok(WidgetEvent::Input(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("page" | "p"), Some(number), None) => parse_page(number),
        (Some("next" | "n"), None, None) => Ok(WidgetEvent::NextPage),
        (Some("prev" | "b"), None, None) => Ok(WidgetEvent::PreviousPage),
        (Some("quit" | "q"), None, None) => Ok(WidgetEvent::Quit),
        _ => Err(InputError::UnknownCommand(line.to_string())),
    }
}

/// Page numbers are typed one-based, as the pager shows them.
fn parse_page(number: &str) -> Result<WidgetEvent, InputError> {
    match number.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(WidgetEvent::SelectPage(page - 1)),
        _ => Err(InputError::InvalidPage(number.to_string())),
    }
}
