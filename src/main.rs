/*!
 * Memory Simulator - Main Entry Point
 *
 * Interactive command loop over a simulated contiguous address space:
 * - Allocation with first-fit, best-fit or worst-fit placement
 * - Release of every segment held by an owner
 * - Compaction
 * - Scripted command files
 */

use anyhow::Context;
use std::io;
use tracing::{info, warn};

use memsim::{init_tracing, Shell, SimConfig};

fn main() -> anyhow::Result<()> {
    // Initialize structured tracing
    init_tracing();

    let config = SimConfig::from_env().context("Invalid simulator configuration")?;
    info!(capacity = config.capacity, "Memory simulator starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, stdout.lock());
    shell
        .run_interactive(stdin.lock())
        .context("Command loop failed")?;

    let stats = shell.manager().stats();
    match serde_json::to_string(&stats) {
        Ok(json) => info!(stats = %json, "Final memory statistics"),
        Err(e) => warn!(error = %e, "Could not serialize final statistics"),
    }
    info!(commands = shell.executed(), "Memory simulator stopped");

    Ok(())
}
