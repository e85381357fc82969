//! Test registry and runner.
//!
//! Cases are registered explicitly, grouped under the section that was current
//! at registration time, and run once each in registration order. A case that
//! panics is recorded as a single failed `"panic"` assertion and the run moves
//! on to the next case.


use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

pub use context::TestContext;
pub use outcome::{CaseResult, CaseStatus, Failure, TestOutcome, TestSummary};

use crate::panic::panic_message;
use crate::report;
use crate::session::Session;
use crate::source::SourceLocation;
use crate::structured_log::{LogEntry, LogLevel, Outcome, StreamKind};

type CaseFn = Box<dyn Fn(&mut TestContext)>;

/// A registered test case.
pub struct TestCase {
    pub name: String,
    pub section: String,
    pub location: SourceLocation,
    run: CaseFn,
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("section", &self.section)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of test cases.
#[derive(Debug, Default)]
pub struct TestRegistry {
    cases: Vec<TestCase>,
    section: String,
}

impl TestRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section for cases registered after this call.
    pub fn section(&mut self, name: impl Into<String>) -> &mut Self {
        self.section = name.into();
        self
    }

    /// Register a case at the caller's source location.
    #[track_caller]
    pub fn add(&mut self, name: impl Into<String>, f: impl Fn(&mut TestContext) + 'static) -> &mut Self {
        self.cases.push(TestCase {
            name: name.into(),
            section: self.section.clone(),
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

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    /// Run every case once, print the report and return the totals.
    pub fn run(&self, session: &mut Session) -> TestSummary {
        if session.config.banner {
            report::print_banner(&session.output, "👍 RUNNING TESTs");
        }

        let mut summary = TestSummary::default();
        for case in &self.cases {
            let (result, outcome) = run_case(case);
            report_case(session, &result, &outcome);
            summary.absorb(result, outcome);
        }

        print_totals(session, &summary);
        log_summary(session, &summary);
        summary
    }
}

fn run_case(case: &TestCase) -> (CaseResult, TestOutcome) {
    let mut ctx = TestContext::new(&case.name, &case.section);
    let started = Instant::now();
    let caught = catch_unwind(AssertUnwindSafe(|| (case.run)(&mut ctx)));
    let duration_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let panicked = match caught {
        Ok(()) => false,
        Err(payload) => {
            ctx.record_panic(panic_message(payload.as_ref()), case.location.clone());
            true
        }
    };

    let outcome = ctx.into_outcome();
    let status = if panicked {
        CaseStatus::Panicked
    } else if outcome.all_passed() {
        CaseStatus::Passed
    } else {
        CaseStatus::Failed
    };

    let result = CaseResult {
        name: case.name.clone(),
        section: case.section.clone(),
        status,
        total: outcome.total,
        passed: outcome.passed,
        failed: outcome.failed,
        duration_ns,
        location: case.location.clone(),
    };
    (result, outcome)
}

fn report_case(session: &mut Session, result: &CaseResult, outcome: &TestOutcome) {
    let align = session.config.align_column;
    for failure in &outcome.errors {
        session
            .output
            .line(report::failure_line(failure, outcome.total, align));
    }

    for failure in &outcome.errors {
        session.log(
            LogEntry::new("", LogLevel::Warn, "assertion_failed")
                .with_stream(StreamKind::Test)
                .with_case(&failure.case)
                .with_section(&failure.section)
                .with_assertion(&failure.assertion)
                .with_source(failure.location.to_string())
                .with_outcome(Outcome::Fail)
                .with_message(&failure.message),
        );
    }

    let (level, outcome_tag) = match result.status {
        CaseStatus::Passed => (LogLevel::Info, Outcome::Pass),
        CaseStatus::Failed => (LogLevel::Warn, Outcome::Fail),
        CaseStatus::Panicked => (LogLevel::Error, Outcome::Error),
    };
    session.log(
        LogEntry::new("", level, "test_case_end")
            .with_stream(StreamKind::Test)
            .with_case(&result.name)
            .with_section(&result.section)
            .with_source(result.location.to_string())
            .with_outcome(outcome_tag)
            .with_latency_ns(result.duration_ns)
            .with_details(serde_json::json!({
                "total": result.total,
                "passed": result.passed,
                "failed": result.failed,
            })),
    );
}

fn print_totals(session: &Session, summary: &TestSummary) {
    let out = &session.output;
    if summary.failed > 0 {
        out.line("");
        out.line(report::FAILURE_RULE);
        out.line("");
    }
    out.line(format_args!("📦 Total -> {}", summary.total));
    out.line(format_args!("✅ Pass  -> {}", summary.passed));
    out.line(format_args!("❌ Fail  -> {}", summary.failed));
}

fn log_summary(session: &mut Session, summary: &TestSummary) {
    let (level, outcome) = if summary.all_passed() {
        (LogLevel::Info, Outcome::Pass)
    } else {
        (LogLevel::Warn, Outcome::Fail)
    };
    session.log(
        LogEntry::new("", level, "run_summary")
            .with_stream(StreamKind::Test)
            .with_outcome(outcome)
            .with_details(serde_json::json!({
                "cases": summary.cases.len(),
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.failed,
                "panicked": summary.panicked_cases(),
            })),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;
    use crate::output::{CaptureBuffer, Output};

    fn quiet_session() -> (Session, CaptureBuffer) {
        let (output, buffer) = Output::capture();
        let session = Session::new(HarnessConfig::default()).with_output(output);
        (session, buffer)
    }

    #[test]
    fn registration_keeps_order_and_sections() {
        let mut registry = TestRegistry::new();
        registry.add("unsectioned", |_| {});
        registry.section("Strings").add("a", |_| {}).add("b", |_| {});
        registry.section("Files").add("c", |_| {});

        let rows: Vec<_> = registry
            .iter()
            .map(|case| (case.name.as_str(), case.section.as_str()))
            .collect();
        assert_eq!(
            rows,
            [("unsectioned", ""), ("a", "Strings"), ("b", "Strings"), ("c", "Files")]
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn two_pass_one_fail() {
        let mut registry = TestRegistry::new();
        registry.add("math", |t| {
            t.eq("sum", 1 + 1, 2);
            t.check("truth", true);
            t.eq("wrong", 2 + 2, 5);
        });

        let (mut session, buffer) = quiet_session();
        let summary = registry.run(&mut session);
        assert_eq!((summary.total, summary.passed, summary.failed), (3, 2, 1));
        assert!(!summary.all_passed());
        assert_ne!(summary.exit_code(), 0);

        let text = buffer.contents();
        assert!(text.contains("🚩 math :: wrong  ( "));
        assert!(text.contains("|  4 == 5"));
        assert!(text.contains("📦 Total -> 3"));
        assert!(text.contains("✅ Pass  -> 2"));
        assert!(text.contains("❌ Fail  -> 1"));
    }

    #[test]
    fn single_assertion_case_omits_case_prefix() {
        let mut registry = TestRegistry::new();
        registry.add("Only", |t| {
            t.check("lonely", false);
        });
        let (mut session, buffer) = quiet_session();
        registry.run(&mut session);
        assert!(buffer.contents().contains("🚩 lonely  ( "));
    }

    #[test]
    fn panicking_case_is_isolated() {
        let mut registry = TestRegistry::new();
        registry.add("explodes", |t| {
            t.check("before", true);
            panic!("case blew up");
        });
        registry.add("survivor", |t| {
            t.check("still runs", true);
        });

        let (mut session, buffer) = quiet_session();
        let summary = registry.run(&mut session);
        assert_eq!(summary.cases.len(), 2);
        assert_eq!(summary.cases[0].status, CaseStatus::Panicked);
        assert_eq!(summary.cases[1].status, CaseStatus::Passed);
        assert_eq!((summary.total, summary.passed, summary.failed), (3, 2, 1));
        assert_eq!(summary.failures[0].assertion, "panic");
        assert_eq!(summary.failures[0].message, "case blew up");
        assert!(buffer.contents().contains("case blew up"));
    }

    #[test]
    fn all_passing_run_exits_zero_without_rule() {
        let mut registry = TestRegistry::new();
        registry.add("fine", |t| {
            t.le("small", 1, 2);
        });
        let (mut session, buffer) = quiet_session();
        let summary = registry.run(&mut session);
        assert_eq!(summary.exit_code(), 0);
        assert!(!buffer.contents().contains(report::FAILURE_RULE));
        assert!(buffer.contents().contains("RUNNING TESTs"));
    }

    #[test]
    fn empty_registry_reports_zero_totals() {
        let registry = TestRegistry::new();
        assert!(registry.is_empty());
        let (mut session, buffer) = quiet_session();
        let summary = registry.run(&mut session);
        assert_eq!(summary.total, 0);
        assert!(summary.all_passed());
        assert!(buffer.contents().contains("📦 Total -> 0"));
    }
}
