/*!
 * Monitoring Module
 * Structured tracing for the simulator
 */

pub mod tracer;

pub use tracer::{init_tracing, CommandSpan};
