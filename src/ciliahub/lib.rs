//! # CiliaHub Architecture
//!
//! CiliaHub is a **UI-agnostic gene-table query library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One `CiliaHub` instance per session                      │
//! │  - Owns the gene table and usage counters (no globals)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure query/export/stats logic                            │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract UsageStore trait for the search counters        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gene table itself is **immutable after load** (see [`dataset`]): it
//! is fetched once per session from a JSON document and every query runs
//! synchronously over the in-memory records. The only thing CiliaHub ever
//! writes is the usage-counter file behind the [`store::UsageStore`] trait.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a web frontend, a REST API, or any
//! other UI over the gene table.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Search, batch lookup, export, stats, suggestions
//! - [`dataset`]: The immutable gene table and its JSON loaders
//! - [`model`]: Core data types (`GeneRecord`, `QueryState`, `SortKey`)
//! - [`normalize`]: The two shared normalization functions
//! - [`reference`]: Citation-token classification (PubMed / DOI / URL)
//! - [`store`]: Usage-counter persistence abstraction and backends
//! - [`usage`]: The search/batch usage counters
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`/`main`: Argument parsing and terminal output for the binary
//!   (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod normalize;
pub mod reference;
pub mod store;
pub mod usage;
