//! # Duke Architecture
//!
//! Duke is a small task tracker driven by one-line commands such as
//! `todo buy milk` or `done 2`. The library holds everything that decides what a
//! command means; the binary only reads lines and prints replies.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads stdin, prints replies, colors messages             │
//! │  - Persists once more if input ends without `bye`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs)                                         │
//! │  - Splits a line into word / body / clause                  │
//! │  - Looks the word up and dispatches                         │
//! │  - Owns the session: list, store, exit latch                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) and Task List (list.rs)           │
//! │  - Validate arguments, convert dates                        │
//! │  - Mutate the list, report through CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TaskStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! Parser, commands and list:
//! - Return `Result<CmdResult>`; user mistakes are `DukeError::Command`
//! - **Never** write to stdout/stderr
//! - Touch the disk only through the `TaskStore` they were handed
//!
//! ## Module Overview
//!
//! - [`parser`]: Line classification and the session type
//! - [`commands`]: Task creation and list mutation handlers, `CmdResult`
//! - [`list`]: The ordered task list and its counters
//! - [`model`]: `Task` and its kinds
//! - [`date`]: `dd/mm/yyyy` parsing
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod list;
pub mod model;
pub mod parser;
pub mod store;
