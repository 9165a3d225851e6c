/*!
 * Tracing
 * Structured tracing for shell commands using the tracing crate
 *
 * Features:
 * - Env-filter controlled verbosity (RUST_LOG)
 * - JSON-formatted logs for structured parsing
 * - One span per executed command, carrying its sequence number and outcome
 * - `log` records from the allocation engine forwarded into the same subscriber
 */

use crate::core::limits::ENV_TRACE_JSON;
use std::time::Instant;
use tracing::{debug, error, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing on stderr
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - MEMSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr so `Show` output on stdout stays clean.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for log processing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        // Human-readable output
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering the execution of one shell command
pub struct CommandSpan {
    span: tracing::Span,
    start: Instant,
    seq: u64,
}

impl CommandSpan {
    pub fn new(command: &str, seq: u64) -> Self {
        let span = span!(
            Level::DEBUG,
            "command",
            seq = seq,
            command = command,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            seq,
        }
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_success(&self) {
        self.span.record("result", "success");
    }

    /// Record a failed command, logged at `level`
    pub fn record_error(&self, error: &str, level: Level) {
        self.span.record("error", error);
        self.span.record("result", "error");
        let _entered = self.span.enter();
        if level == Level::ERROR {
            error!(seq = self.seq, error = error, "command failed");
        } else if level == Level::WARN {
            warn!(seq = self.seq, error = error, "command failed");
        } else {
            debug!(seq = self.seq, error = error, "command failed");
        }
    }
}

impl Drop for CommandSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);
        let _entered = self.span.enter();
        debug!(
            seq = self.seq,
            duration_us = duration.as_micros() as u64,
            "command completed"
        );
    }
}
