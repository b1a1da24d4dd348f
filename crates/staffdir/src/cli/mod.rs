//! # CLI Behavior
//!
//! This is **one possible UI client** for staffdir. The CLI is the only place that knows
//! about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`staffdir`)
//!
//! Running `staffdir` with no arguments defaults to `staffdir list`.
//!
//! ### One-shot vs. Session
//!
//! `list`, `show` and `stats` run a single query against the seeded directory and exit.
//! Nothing is persisted, so adding, editing and deleting only make sense inside
//! `staffdir shell`, which keeps one directory and one view alive across commands.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and dispatch
//! - `logging`: tracing subscriber setup from `-v`
//! - `render`: Output formatting (cards, pager, stats, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive session

mod commands;
mod logging;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
