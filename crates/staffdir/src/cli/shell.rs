//! # Interactive Session
//!
//! `staffdir shell` keeps one directory and one [`ViewCoordinator`] alive and reads
//! commands line by line. Lines are split with shell quoting rules (`add -f "Mary Ann"`)
//! and parsed with clap, so `help` and `<command> --help` work as usual.
//!
//! The coordinator renders through a callback registered at startup: every command that
//! changes the query or the data redraws the current page.
//!
//! Adds and edits wait out the configured mutation delay on a current-thread tokio
//! runtime. A failed edit leaves the session in edit mode (shown in the prompt) until the
//! next successful submit, `cancel`, or deletion of that employee.

use super::commands::AppContext;
use super::render;
use super::setup::{ShellCommand, ShellLine};
use clap::Parser;
use colored::Colorize;
use staffdirapp::error::{DirectoryError, FieldErrors, Result};
use staffdirapp::model::{Department, EmployeeDraft, EmployeeId, Field, Role};
use staffdirapp::query::SortSpec;
use staffdirapp::store::memory::InMemoryStore;
use staffdirapp::view::ViewCoordinator;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;
use tracing::debug;

enum Flow {
    Continue,
    Quit,
}

pub fn run(ctx: AppContext) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut view = ViewCoordinator::new(
        ctx.api,
        ctx.config.page_size,
        ctx.config.mutation_delay(),
    );
    view.on_render(|snapshot| print!("{}", render::render_snapshot(snapshot)));

    println!(
        "{}",
        "staffdir shell: `help` lists commands, `quit` leaves".dimmed()
    );
    view.refresh()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("{}", prompt(view.editing()));
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let words = match shell_words::split(line.trim()) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };
        debug!(?words, "shell command");

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        match execute(&runtime, &mut view, parsed.command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => print!("{}", render::render_error(&e)),
        }
    }
    Ok(())
}

fn prompt(editing: Option<EmployeeId>) -> String {
    match editing {
        Some(id) => format!("staffdir (editing #{})> ", id),
        None => "staffdir> ".to_string(),
    }
}

fn execute(
    runtime: &Runtime,
    view: &mut ViewCoordinator<InMemoryStore>,
    command: ShellCommand,
) -> Result<Flow> {
    match command {
        ShellCommand::List => {
            view.refresh()?;
        }
        ShellCommand::Search { term } => {
            view.set_search(term.join(" "))?;
        }
        ShellCommand::Filter { field, value } => {
            let value = canonical_filter_value(field, &value.join(" "))?;
            view.set_filter(field, value)?;
        }
        ShellCommand::Clear => {
            view.clear_query()?;
        }
        ShellCommand::Sort { field, desc, asc } => {
            match (field, desc, asc) {
                (None, _, _) => view.set_sort(None)?,
                (Some(field), true, _) => view.set_sort(Some(SortSpec::desc(field)))?,
                (Some(field), _, true) => view.set_sort(Some(SortSpec::asc(field)))?,
                (Some(field), false, false) => view.toggle_sort(field)?,
            };
        }
        ShellCommand::Page { number } => {
            view.go_to_page(number)?;
        }
        ShellCommand::Next => {
            view.next_page()?;
        }
        ShellCommand::Prev => {
            view.prev_page()?;
        }
        ShellCommand::Size { page_size } => {
            view.set_page_size(page_size)?;
        }
        ShellCommand::Show { ids } => {
            let result = view.api().view(&ids)?;
            print!("{}", render::render_cards(&result.listed_employees));
        }
        ShellCommand::Add(fields) => {
            view.cancel_edit();
            submit(runtime, view, fields.apply(EmployeeDraft::default()))?;
        }
        ShellCommand::Edit { id, changes } => {
            let current = view.begin_edit(id)?;
            submit(runtime, view, changes.apply(current))?;
        }
        ShellCommand::Cancel => {
            if view.editing().is_some() {
                view.cancel_edit();
                println!("Edit cancelled");
            }
        }
        ShellCommand::Delete { id } => {
            let result = view.delete(id)?;
            print!("{}", render::render_messages(&result.messages));
        }
        ShellCommand::Stats => {
            let stats = view.api().stats(view.query())?.stats.unwrap_or_default();
            print!("{}", render::render_stats(&stats));
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn submit(
    runtime: &Runtime,
    view: &mut ViewCoordinator<InMemoryStore>,
    draft: EmployeeDraft,
) -> Result<()> {
    println!("{}", "Saving…".dimmed());
    let result = runtime.block_on(view.submit(draft))?;
    print!("{}", render::render_messages(&result.messages));
    Ok(())
}

/// Department and role filters match canonical names exactly, so accept any casing here.
fn canonical_filter_value(field: Field, raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    let parsed = match field {
        Field::Department => raw.parse::<Department>().map(|d| d.as_str().to_string()),
        Field::Role => raw.parse::<Role>().map(|r| r.as_str().to_string()),
        _ => Ok(raw.to_string()),
    };
    parsed.map_err(|message| {
        let mut errors = FieldErrors::new();
        errors.insert(field, message);
        DirectoryError::Validation(errors)
    })
}
