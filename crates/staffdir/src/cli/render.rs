//! # Rendering
//!
//! Every function here returns a `String`; callers decide where it goes. Layout math
//! (column widths, truncation) is Unicode-aware via `unicode-width`. Colors come from
//! `colored`, which honors `NO_COLOR` and `CLICOLOR_FORCE`.
//!
//! Record fields are user input, so control characters are stripped before display.

use colored::{ColoredString, Colorize};
use staffdirapp::api::{CmdMessage, DirectoryStats, MessageLevel};
use staffdirapp::error::DirectoryError;
use staffdirapp::model::Employee;
use staffdirapp::paginate::{PageLink, PageResult};
use staffdirapp::view::ViewSnapshot;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a name or email may render before it is cut with an ellipsis.
pub const FIELD_WIDTH: usize = 48;
const ELLIPSIS: char = '…';
const EMPTY_HINT: &str = "Try adjusting your search or filter criteria.";

/// Drop control characters (escape sequences, newlines) from user-supplied text.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Cut `text` to at most `width` terminal columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

fn display(text: &str) -> String {
    truncate_to_width(&sanitize(text), FIELD_WIDTH)
}

/// One employee as a three-line card. `id_width` aligns cards in a list.
pub fn render_card(employee: &Employee, id_width: usize) -> String {
    let id = format!("{:>width$}", format!("#{}", employee.id), width = id_width);
    let indent = " ".repeat(id_width + 2);
    format!(
        "{}  {}\n{}{}\n{}{} · {}\n",
        id.dimmed(),
        display(&employee.full_name()).bold(),
        indent,
        display(&employee.email).cyan(),
        indent,
        employee.department.as_str().yellow(),
        employee.role.as_str(),
    )
}

pub fn render_cards(employees: &[Employee]) -> String {
    let id_width = employees
        .iter()
        .map(|e| format!("#{}", e.id).width())
        .max()
        .unwrap_or(0);
    employees
        .iter()
        .map(|e| render_card(e, id_width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `‹ 1 … 5 6 [7] 8 9 10 ›` with the arrows dimmed when there is nowhere to go.
pub fn render_pager<T>(page: &PageResult<T>, window: &[PageLink]) -> String {
    if window.is_empty() {
        return String::new();
    }
    let arrow = |glyph: &str, enabled: bool| -> ColoredString {
        if enabled {
            glyph.normal()
        } else {
            glyph.dimmed()
        }
    };
    let mut parts = vec![arrow("‹", page.has_prev_page).to_string()];
    for link in window {
        parts.push(match link {
            PageLink::Page {
                number,
                current: true,
            } => format!("[{}]", number).bold().to_string(),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "…".dimmed().to_string(),
        });
    }
    parts.push(arrow("›", page.has_next_page).to_string());
    parts.join(" ")
}

/// Cards, then the "Showing X-Y of N" line and the pager; the empty state when nothing matched.
pub fn render_page(page: &PageResult<Employee>) -> String {
    if page.is_empty() {
        return format!("{}\n{}\n", "No employees found".bold(), EMPTY_HINT.dimmed());
    }
    let mut out = render_cards(&page.items);
    out.push('\n');
    out.push_str(&page.summary().dimmed().to_string());
    out.push('\n');
    let pager = render_pager(page, &page.window());
    if !pager.is_empty() {
        out.push_str(&pager);
        out.push('\n');
    }
    out
}

pub fn render_snapshot(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();
    if let Some(id) = snapshot.editing {
        out.push_str(&format!("{}\n", format!("editing #{}", id).yellow()));
    }
    out.push_str(&render_page(&snapshot.page));
    out
}

pub fn render_stats(stats: &DirectoryStats) -> String {
    let mut lines = vec![
        format!("{:<14}{}", "Total", stats.total.to_string().bold()),
        format!("{:<14}{}", "Matching", stats.filtered),
        format!("{:<14}{}", "Departments", stats.department_count()),
        String::new(),
    ];
    for (department, count) in &stats.departments {
        lines.push(format!("  {:<12}{}", department.as_str(), count));
    }
    lines.push(String::new());
    for (role, count) in &stats.roles {
        lines.push(format!("  {:<12}{}", role.as_str(), count));
    }
    lines.join("\n") + "\n"
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let content = sanitize(&m.content);
            let styled = match m.level {
                MessageLevel::Info => content.normal(),
                MessageLevel::Success => content.green(),
                MessageLevel::Warning => content.yellow(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// Errors inside the shell; validation failures list each field on its own line.
pub fn render_error(error: &DirectoryError) -> String {
    match error.field_errors() {
        Some(fields) => {
            let mut out = format!("{}\n", "Please fix the following:".red());
            for (field, message) in fields.iter() {
                out.push_str(&format!("  {}: {}\n", field.as_str().bold(), message));
            }
            out
        }
        None => format!("{}\n", sanitize(&error.to_string()).red()),
    }
}
