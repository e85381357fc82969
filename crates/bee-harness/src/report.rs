//! Report rendering: console lines, markdown and JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bench::BenchResult;
use crate::error::HarnessError;
use crate::output::Output;
use crate::structured_log::now_utc;
use crate::test::{Failure, TestSummary};

pub const BANNER_RULE: &str = "============================================================";
pub const FAILURE_RULE: &str = "-----------------------------";

/// Print a `RUNNING ...` banner centered under [`BANNER_RULE`].
pub fn print_banner(output: &Output, title: &str) {
    let rule_width = BANNER_RULE.chars().count();
    let indent = rule_width.saturating_sub(title.chars().count()) / 2;
    output.line("");
    output.line(BANNER_RULE);
    output.line(format_args!("{}{title}", " ".repeat(indent)));
    output.line(BANNER_RULE);
    output.line("");
}

/// Right-pad `left` with spaces up to `column` characters.
#[must_use]
pub fn pad_to_column(left: &str, column: usize) -> String {
    let width = left.chars().count();
    format!("{left}{}", " ".repeat(column.saturating_sub(width)))
}

/// `🚩 <case> :: <assertion>  ( file:line )  |  <message>`.
///
/// The case prefix is dropped when the case made fewer than two assertions.
#[must_use]
pub fn failure_line(failure: &Failure, case_total: usize, align_column: usize) -> String {
    let left = if case_total < 2 {
        format!("🚩 {}  ( {} )", failure.assertion, failure.location)
    } else {
        format!(
            "🚩 {} :: {}  ( {} )",
            failure.case, failure.assertion, failure.location
        )
    };
    format!("{}  |  {}", pad_to_column(&left, align_column), failure.message)
}

/// `⌚ <name> :: Executed <repeat> times in <ms> ms  ( file:line )`, or a
/// `💥` line carrying the panic message.
#[must_use]
pub fn bench_line(result: &BenchResult, align_column: usize) -> String {
    match &result.panic_message {
        None => {
            let left = format!(
                "⌚ {} :: Executed {} times in {:.3} ms",
                result.name,
                result.repeat,
                result.elapsed_ms()
            );
            format!("{}  ( {} )", pad_to_column(&left, align_column), result.location)
        }
        Some(message) => {
            let left = format!(
                "💥 {} :: Panicked after {:.3} ms",
                result.name,
                result.elapsed_ms()
            );
            format!(
                "{}  ( {} )  |  {message}",
                pad_to_column(&left, align_column),
                result.location
            )
        }
    }
}

/// Machine- and human-readable record of a whole harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<TestSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benches: Vec<BenchResult>,
}

impl SuiteReport {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timestamp: now_utc(),
            tests: None,
            benches: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tests(mut self, summary: TestSummary) -> Self {
        self.tests = Some(summary);
        self
    }

    #[must_use]
    pub fn with_benches(mut self, results: Vec<BenchResult>) -> Self {
        self.benches = results;
        self
    }

    /// True when no assertion failed and no bench panicked.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.tests.as_ref().is_none_or(TestSummary::all_passed)
            && !self.benches.iter().any(BenchResult::panicked)
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));

        if let Some(tests) = &self.tests {
            out.push_str(&format!("- Total: {}\n", tests.total));
            out.push_str(&format!("- Passed: {}\n", tests.passed));
            out.push_str(&format!("- Failed: {}\n\n", tests.failed));

            out.push_str("## Tests\n\n");
            out.push_str("| Case | Section | Status | Assertions |\n");
            out.push_str("|------|---------|--------|------------|\n");
            for case in &tests.cases {
                let status = match case.status {
                    crate::test::CaseStatus::Passed => "PASS",
                    crate::test::CaseStatus::Failed => "FAIL",
                    crate::test::CaseStatus::Panicked => "PANIC",
                };
                out.push_str(&format!(
                    "| {} | {} | {} | {}/{} |\n",
                    case.name, case.section, status, case.passed, case.total
                ));
            }

            if !tests.failures.is_empty() {
                out.push_str("\n### Failures\n\n");
                for failure in &tests.failures {
                    out.push_str(&format!(
                        "- `{}` {} :: {}: {}\n",
                        failure.location, failure.case, failure.assertion, failure.message
                    ));
                }
            }
        } else {
            out.push('\n');
        }

        if !self.benches.is_empty() {
            out.push_str("\n## Benchmarks\n\n");
            out.push_str("| Bench | Repeat | Elapsed (ms) | Status |\n");
            out.push_str("|-------|--------|--------------|--------|\n");
            for bench in &self.benches {
                let status = if bench.panicked() { "PANIC" } else { "OK" };
                out.push_str(&format!(
                    "| {} | {} | {:.3} | {} |\n",
                    bench.name,
                    bench.repeat,
                    bench.elapsed_ms(),
                    status
                ));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    /// Write the report to `path`: JSON for a `.json` extension, markdown otherwise.
    pub fn write_to(&self, path: &Path) -> Result<(), HarnessError> {
        let body = if bee_core::fs::has_extension(path, "json") {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_markdown()
        };
        bee_core::fs::try_write_file(path, body, bee_core::fs::WriteMode::Truncate)?;
        Ok(())
    }
}
