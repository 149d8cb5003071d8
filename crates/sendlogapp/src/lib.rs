//! # Sendlog Architecture
//!
//! Sendlog is a **UI-agnostic climbing log library**. It keeps a personal catalogue
//! of climbs with their attempts, sends and beta links, and lets friends browse each
//! other's catalogues read-only and copy climbs across. The `sendlog` binary is one
//! client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (sendlog crate)                                        │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves the acting identity                             │
//! │  - Normalizes climb and attempt references to UUIDs         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, ownership and friend policy                  │
//! │  - Completion transitions, filtering, copying               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure rules that don't touch storage sit beside the layers: [`grade`] validates and
//! ranks grades, [`filter`] selects and splits catalogues, [`completion`] is the
//! send/unsend state machine and [`sharing`] decides who may read, mutate and copy.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns `Result<CmdResult>`.
//! It never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; installing a subscriber is the front end's business.
//!
//! ## Testing Strategy
//!
//! 1. **Rules and commands**: thorough unit tests against `InMemoryStore`, including
//!    simulated write failures.
//! 2. **API**: dispatch, identity and reference resolution.
//! 3. **Integration** (`tests/`): the file backend on a temp dir and full flows
//!    through the facade.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Climb`, `Attempt`, `Link`, `UserProfile`)
//! - [`identity`]: Who is acting
//! - [`config`]: Configuration management
//! - [`init`]: Wiring config, store and identity for a front end
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod filter;
pub mod grade;
pub mod identity;
pub mod init;
pub mod model;
pub mod sharing;
pub mod store;
