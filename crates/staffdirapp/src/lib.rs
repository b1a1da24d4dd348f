//! # Staffdir Architecture
//!
//! Staffdir is a **UI-agnostic employee directory library**. The terminal client in
//! `crates/staffdir` is one renderer for it; a web page or a TUI could drive the same core.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view.rs)                                       │
//! │  - Owns query state, page position, edit mode               │
//! │  - Reruns the pipeline and notifies render callbacks        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, query/, paginate.rs)         │
//! │  - Validation, id assignment, duplicate detection           │
//! │  - Search → filter → sort pipeline, pagination              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - InMemoryStore (ordered, process lifetime only)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. Functions take
//! regular Rust values and return `Result<CmdResult>` or plain data. Logging goes through
//! `tracing`; installing a subscriber is the client's business.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for record operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: The search, filter and sort stages
//! - [`paginate`]: Page slicing and the page-number window
//! - [`view`]: The view coordinator
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Employee`, `Department`, `Role`, `Field`)
//! - [`validation`]: Draft validation and email normalization
//! - [`seed`]: Built-in sample data and JSON seed loading
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paginate;
pub mod query;
pub mod seed;
pub mod store;
pub mod validation;
pub mod view;
