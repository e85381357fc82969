//! Benchmark registry and runner.
//!
//! Each case is a callable run `repeat` times back to back while the session
//! output is swapped for a null sink, timed with a single clock read around the
//! whole loop. There is no warm-up, no statistics and no timeout.

use std::panic::{AssertUnwindSafe, catch_unwind};

use bee_core::time::ElapsedTimer;
use serde::{Deserialize, Serialize};

use crate::output::Output;
use crate::panic::panic_message;
use crate::report;
use crate::session::Session;
use crate::source::SourceLocation;
use crate::structured_log::{LogEntry, LogLevel, Outcome, StreamKind};

type BenchFn = Box<dyn Fn(&mut Output)>;

/// A registered benchmark.
pub struct BenchCase {
    pub name: String,
    pub repeat: u32,
    pub location: SourceLocation,
    run: BenchFn,
}

impl std::fmt::Debug for BenchCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchCase")
            .field("name", &self.name)
            .field("repeat", &self.repeat)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Timing of one benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub repeat: u32,
    /// Wall time of the whole loop, or up to the panic.
    pub elapsed_ns: u64,
    pub location: SourceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panic_message: Option<String>,
}

impl BenchResult {
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ns as f64 * bee_core::time::NS_TO_MS
    }

    #[must_use]
    pub fn panicked(&self) -> bool {
        self.panic_message.is_some()
    }
}

/// Ordered collection of benchmarks.
#[derive(Debug, Default)]
pub struct BenchRegistry {
    cases: Vec<BenchCase>,
}

impl BenchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` to run `repeat` times. The callable receives the session
    /// output, which is silenced while timing.
    #[track_caller]
    pub fn add(
        &mut self,
        name: impl Into<String>,
        repeat: u32,
        f: impl Fn(&mut Output) + 'static,
    ) -> &mut Self {
        self.cases.push(BenchCase {
            name: name.into(),
            repeat,
            location: SourceLocation::caller(),
            run: Box::new(f),
        });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BenchCase> {
        self.cases.iter()
    }

    /// Time every case in registration order.
    pub fn run(&self, session: &mut Session) -> Vec<BenchResult> {
        if session.config.banner {
            report::print_banner(&session.output, "😴 RUNNING BENCHMARKs");
        }

        let mut results = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let result = time_case(case, &session.output);
            session
                .output
                .line(report::bench_line(&result, session.config.align_column));

            if session.config.bench_echo_once && !result.panicked() {
                echo_once(case, &session.output);
            }

            log_case(session, &result);
            results.push(result);
        }
        log_summary(session, &results);
        results
    }
}

fn log_summary(session: &mut Session, results: &[BenchResult]) {
    let panicked = results.iter().filter(|result| result.panicked()).count();
    let (level, outcome) = if panicked == 0 {
        (LogLevel::Info, Outcome::Pass)
    } else {
        (LogLevel::Error, Outcome::Error)
    };
    let total_ns: u64 = results.iter().map(|result| result.elapsed_ns).sum();
    session.log(
        LogEntry::new("", level, "run_summary")
            .with_stream(StreamKind::Bench)
            .with_outcome(outcome)
            .with_duration_ms(total_ns / 1_000_000)
            .with_details(serde_json::json!({
                "cases": results.len(),
                "panicked": panicked,
            })),
    );
}

fn time_case(case: &BenchCase, output: &Output) -> BenchResult {
    let mut timer = ElapsedTimer::new();
    let (caught, elapsed_ns) = {
        let _quiet = output.suppress();
        let mut sink = output.clone();
        timer.reset();
        let caught = catch_unwind(AssertUnwindSafe(|| {
            for _ in 0..case.repeat {
                (case.run)(&mut sink);
            }
        }));
        (caught, timer.elapsed_ns() as u64)
    };

    BenchResult {
        name: case.name.clone(),
        repeat: case.repeat,
        elapsed_ns,
        location: case.location.clone(),
        panic_message: caught.err().map(|payload| panic_message(payload.as_ref())),
    }
}

fn echo_once(case: &BenchCase, output: &Output) {
    let mut visible = output.clone();
    if let Err(payload) = catch_unwind(AssertUnwindSafe(|| (case.run)(&mut visible))) {
        output.line(format_args!(
            "💥 {} :: echo run panicked: {}",
            case.name,
            panic_message(payload.as_ref())
        ));
    }
    output.line("");
}

fn log_case(session: &mut Session, result: &BenchResult) {
    let mut entry = LogEntry::new(
        "",
        if result.panicked() {
            LogLevel::Error
        } else {
            LogLevel::Info
        },
        "bench_case_end",
    )
    .with_stream(StreamKind::Bench)
    .with_case(&result.name)
    .with_repeat(result.repeat)
    .with_latency_ns(result.elapsed_ns)
    .with_source(result.location.to_string());

    entry = match &result.panic_message {
        Some(message) => entry.with_outcome(Outcome::Error).with_message(message),
        None => entry.with_outcome(Outcome::Pass),
    };
    session.log(entry);
}
