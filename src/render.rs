//! Plain-text rendering of the search box, result list and pager.

use std::fmt::Write;

use crate::pagination::{PageLink, Pager};
use crate::{ResultItem, SearchSession};

pub const PLACEHOLDER: &str = "Search repositories";

/// Render the whole widget as it stands in `session`.
pub fn render(session: &SearchSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", PLACEHOLDER, session.query());

    for item in session.items() {
        out.push('\n');
        out.push_str(&render_item(item));
    }

    if let Some(pager) = session.pager() {
        out.push('\n');
        out.push_str(&render_pager(&pager, session.total_count()));
    }
    out
}

pub fn render_item(item: &ResultItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.full_name);
    if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  {}", description);
    }
    let _ = writeln!(out, "  {} <{}>", item.name, item.clone_url);
    if !item.owner.avatar_url.is_empty() {
        let _ = writeln!(out, "  avatar: {}", item.owner.avatar_url);
    }
    out
}

pub fn render_pager(pager: &Pager, total_count: u64) -> String {
    let links: Vec<String> = pager
        .links()
        .iter()
        .map(|link| match link {
            PageLink::Page { active: true, .. } => format!("[{}]", link.label()),
            _ => link.label(),
        })
        .collect();

    format!(
        "{}\npage {} of {}, {} results\n",
        links.join(" "),
        pager.selected() + 1,
        pager.page_count(),
        total_count
    )
}
