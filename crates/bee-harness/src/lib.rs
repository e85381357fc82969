//! Minimal test and benchmark harness for bee.
//!
//! This crate provides:
//! - Test registry: named cases grouped by section, run in registration order
//! - Assertion context: `check`/`eq`/`gt`/... record failures instead of panicking
//! - Bench registry: named callables timed over a repeat count with output suppressed
//! - Output sink: a shared, swappable writer standing in for process stdout
//! - Structured log: JSONL run events with schema validation
//! - Report generation: console, markdown and JSON renderings of a run

#![forbid(unsafe_code)]

pub mod bench;
pub mod config;
pub mod error;
pub mod output;
mod panic;
pub mod report;
pub mod session;
pub mod source;
pub mod structured_log;
pub mod suites;
pub mod test;

pub use bench::{BenchRegistry, BenchResult};
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use output::{CaptureBuffer, Output};
pub use report::SuiteReport;
pub use session::Session;
pub use source::SourceLocation;
pub use test::{Failure, TestContext, TestOutcome, TestRegistry, TestSummary};
