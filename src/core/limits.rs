/*!
 * System Limits and Constants
 *
 * Centralized location for simulator-wide limits, thresholds and display symbols.
 */

// =============================================================================
// ADDRESS SPACE
// =============================================================================

/// Default number of addressable units in the simulated memory pool
pub const DEFAULT_CAPACITY: usize = 80;

/// Symbol rendered for an unowned cell by `Show`
pub const FREE_CELL: char = '.';

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage ratio at which pressure is reported as MEDIUM
pub const PRESSURE_MEDIUM: f64 = 0.60;

/// Usage ratio at which pressure is reported as HIGH
pub const PRESSURE_HIGH: f64 = 0.80;

/// Usage ratio at which pressure is reported as CRITICAL
pub const PRESSURE_CRITICAL: f64 = 0.95;

// =============================================================================
// SHELL
// =============================================================================

/// Prompt printed before every interactive command
pub const DEFAULT_PROMPT: &str = "command>";

/// Maximum nesting of `Read` commands (a script reading a script ...)
/// Stops a script that reads itself from recursing until the stack overflows
pub const MAX_READ_DEPTH: usize = 16;

// =============================================================================
// CONFIGURATION KEYS
// =============================================================================

/// Environment variable overriding the address space capacity
pub const ENV_CAPACITY: &str = "MEMSIM_CAPACITY";

/// Environment variable overriding the interactive prompt
pub const ENV_PROMPT: &str = "MEMSIM_PROMPT";

/// Environment variable toggling the echo of interactive input
pub const ENV_ECHO: &str = "MEMSIM_ECHO";

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "MEMSIM_TRACE_JSON";
