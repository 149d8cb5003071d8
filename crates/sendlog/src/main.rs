//! # Sendlog CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file only
//! invokes `cli::run()` and turns an error into a message and a non-zero exit.
//!
//! ## Workspace Structure
//!
//! - `crates/sendlogapp/`: the UI-agnostic library (climbs, sharing, storage)
//! - `crates/sendlog/`: this CLI, a client of the library's `SendlogApi`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/sendlog/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + context wiring (handlers.rs)                  │
//! │  - Terminal output (print.rs), log setup (telemetry.rs)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/sendlogapp/src/api.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the CLI layer returns structured `CmdResult` values and never
//! touches the terminal, so the CLI owns argument parsing, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - Library behavior is tested in `sendlogapp`.
//! - `cli/setup.rs` tests argument parsing; `cli/handlers.rs` tests the mapping from
//!   flags to library types.
//! - `tests/cli_e2e.rs` drives the built binary against a temp data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
