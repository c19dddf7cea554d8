//! Pure view rendering: state in, display description out. Nothing here
//! touches the network or the terminal, so every mapping is testable as a
//! plain function.

use shared::protocol::{DocumentRecord, SearchResultPage};

use crate::health::HealthView;

const SNIPPET_CHARS: usize = 60;

/// One pagination control. `label` is 1-based for display; `index` is the
/// zero-based page to request when the control is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub index: u32,
    pub label: String,
    pub active: bool,
}

/// One control per page, with the current page marked active.
pub fn page_controls(page: &SearchResultPage) -> Vec<PageControl> {
    (0..page.total_pages)
        .map(|index| PageControl {
            index,
            label: (index + 1).to_string(),
            active: index == page.number,
        })
        .collect()
}

/// First characters of the content, with an ellipsis when truncated.
pub fn snippet(content: &str) -> String {
    let mut out: String = content.chars().take(SNIPPET_CHARS).collect();
    if content.chars().count() > SNIPPET_CHARS {
        out.push_str("...");
    }
    out
}

/// One line per result row: id, title, snippet, creation time.
pub fn result_lines(page: &SearchResultPage) -> Vec<String> {
    if page.is_empty() {
        return vec!["No results found.".to_string()];
    }
    page.content.iter().map(result_line).collect()
}

fn result_line(doc: &DocumentRecord) -> String {
    format!(
        "[{}] {} | {} | {}",
        doc.id.0,
        doc.title,
        snippet(&doc.content),
        doc.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// Full document detail, title first, body last.
pub fn detail_lines(doc: &DocumentRecord) -> Vec<String> {
    vec![
        doc.title.clone(),
        format!("Created: {}", doc.created_at.format("%Y-%m-%d %H:%M:%S")),
        String::new(),
        doc.content.clone(),
    ]
}

pub fn health_line(view: &HealthView) -> String {
    match view {
        HealthView::Unknown => "Backend: checking...".to_string(),
        HealthView::Up => "Backend: Healthy".to_string(),
        HealthView::Reported(status) => format!("Backend: {status}"),
        HealthView::Unreachable(_) => "Backend: Unreachable".to_string(),
    }
}

/// Renders the pagination strip, current page bracketed: `1 [2] 3`.
pub fn pagination_line(page: &SearchResultPage) -> String {
    page_controls(page)
        .iter()
        .map(|control| {
            if control.active {
                format!("[{}]", control.label)
            } else {
                control.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
