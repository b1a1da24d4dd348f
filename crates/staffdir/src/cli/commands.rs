//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load config, apply env overrides, seed the directory
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Output Formatting**: Styled text or JSON, per `--output`

use super::logging::init_logging;
use super::render;
use super::setup::{Cli, Commands, OutputMode, QueryArgs};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use staffdirapp::api::{CmdMessage, CmdResult, DirectoryApi, MessageLevel};
use staffdirapp::config::DirectoryConfig;
use staffdirapp::error::Result;
use staffdirapp::model::EmployeeId;
use staffdirapp::paginate::clamp_page;
use staffdirapp::query::QueryState;
use staffdirapp::seed::{load_seed, sample_employees};
use staffdirapp::store::memory::InMemoryStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything a handler needs, built once per process.
pub struct AppContext {
    pub api: DirectoryApi<InMemoryStore>,
    pub config: DirectoryConfig,
    pub output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match &cli.command {
        None => handle_list(&ctx, &QueryArgs::default()),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Show { ids }) => handle_show(&ctx, ids),
        Some(Commands::Stats(args)) => handle_stats(&ctx, args),
        Some(Commands::Shell) => shell::run(ctx),
    }
}

/// `--config-dir`, else the platform config directory (e.g. `~/.config/staffdir`).
fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("", "", "staffdir").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

/// Relative seed paths in the config file are relative to the config directory.
fn resolve_seed_path(config_dir: Option<&Path>, path: &Path) -> PathBuf {
    match config_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config_dir(cli);
    let config = match &dir {
        Some(dir) => DirectoryConfig::load(dir)?,
        None => DirectoryConfig::default(),
    }
    .with_env_overrides(|key| std::env::var(key).ok())?;

    let seed = cli.seed.clone().or_else(|| {
        config
            .seed_file
            .as_deref()
            .map(|path| resolve_seed_path(dir.as_deref(), path))
    });
    let employees = match &seed {
        Some(path) => load_seed(path)?,
        None => sample_employees(),
    };
    info!(
        employees = employees.len(),
        page_size = config.page_size,
        seed = ?seed,
        "directory ready"
    );

    Ok(AppContext {
        api: DirectoryApi::in_memory(employees),
        config,
        output: cli.output,
    })
}

/// Run `query`, pulling a page number past the last page back to the last page.
///
/// Warns when a page was asked for that does not exist; an empty result shows page 1
/// without a warning.
fn list_page(api: &DirectoryApi<InMemoryStore>, query: &QueryState) -> Result<CmdResult> {
    let result = api.query(query)?;
    let Some(total_pages) = result.page.as_ref().map(|page| page.total_pages) else {
        return Ok(result);
    };
    let page = clamp_page(query.page, total_pages);
    if page == query.page {
        return Ok(result);
    }

    debug!(requested = query.page, page, "clamped page");
    let mut clamped = api.query(&query.clone().with_page(page, query.page_size))?;
    if total_pages > 0 {
        clamped.add_message(CmdMessage::warning(format!(
            "Page {} does not exist; showing page {} of {}",
            query.page, page, total_pages
        )));
    }
    Ok(clamped)
}

fn handle_list(ctx: &AppContext, args: &QueryArgs) -> Result<()> {
    let result = list_page(&ctx.api, &args.to_query(ctx.config.page_size))?;
    let Some(page) = &result.page else {
        return Ok(());
    };
    match ctx.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(page)?),
        OutputMode::Term => {
            let warnings: Vec<_> = result
                .messages
                .iter()
                .filter(|m| m.level == MessageLevel::Warning)
                .cloned()
                .collect();
            print!("{}", render::render_messages(&warnings));
            print!("{}", render::render_page(page));
        }
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[EmployeeId]) -> Result<()> {
    let result = ctx.api.view(ids)?;
    match ctx.output {
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result.listed_employees)?
        ),
        OutputMode::Term => print!("{}", render::render_cards(&result.listed_employees)),
    }
    Ok(())
}

fn handle_stats(ctx: &AppContext, args: &QueryArgs) -> Result<()> {
    let query = args.to_query(ctx.config.page_size);
    let stats = ctx.api.stats(&query)?.stats.unwrap_or_default();
    match ctx.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputMode::Term => print!("{}", render::render_stats(&stats)),
    }
    Ok(())
}
