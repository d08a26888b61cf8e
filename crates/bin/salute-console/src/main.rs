//! # salute-console: terminal client for the salute bridge
//!
//! Composition root that wires the HTTP adapter and a terminal view into the
//! console service.
//!
//! ## Responsibilities
//! - Parse CLI arguments and configuration (file, env vars, flags)
//! - Initialize `tracing` logging to stderr
//! - Construct the `reqwest` bridge client (adapter) and the terminal view
//! - Construct the console service, injecting both via port traits
//! - Run one use-case per invocation and map failures to the exit code
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

use clap::Parser;

mod cli;
mod config;
mod terminal;

fn main() -> anyhow::Result<()> {
    cli::App::parse().run()
}
