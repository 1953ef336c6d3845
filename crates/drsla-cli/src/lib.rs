// drsla CLI: reads snapshot exports, runs the SLA rule set, prints reports.
//
// The binary never talks to the backing store. Snapshots are exported by the
// dashboard, so a run is reproducible from the file alone (plus `--now`).

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
