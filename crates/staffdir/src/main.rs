//! # Staffdir CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/staffdirapp/`: Core library with UI-agnostic directory logic
//! - `crates/staffdir/`: This CLI tool, depends on the `staffdirapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/staffdir/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive session (shell.rs)                           │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View + API Layers (staffdirapp::view, staffdirapp::api)    │
//! │  - Query state, paging, edit mode                           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records live for the lifetime of the process. One-shot commands (`list`, `show`,
//! `stats`) read the seeded directory; edits happen inside `staffdir shell`.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each command, the pipeline stages and the view.
//! - **CLI**: `tests/cli_e2e.rs` drives the real binary with `assert_cmd`, including a
//!   scripted shell session over stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
