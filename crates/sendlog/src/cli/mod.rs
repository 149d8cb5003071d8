//! # CLI Layer
//!
//! One possible UI client for sendlog. This is the only place that knows about
//! stdout, stderr, colors and process exit codes.
//!
//! - [`setup`]: clap definitions and version string
//! - [`handlers`]: `run()`, context setup and one handler per command
//! - [`print`]: rendering of `CmdResult` data
//! - [`telemetry`]: `tracing` subscriber installation

mod handlers;
mod print;
mod setup;
mod telemetry;

pub use handlers::run;
