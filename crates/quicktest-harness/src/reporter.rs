//! Test reporter - display test results
//!
//! Line formats are fixed:
//!
//! ```text
//! <name>: Passed
//! <name>: Failed - <message>
//!
//! Results: <passed>/<total> tests passed
//! ```
//!
//! With the banner enabled, a terminal-width `#` rule labeled
//! ` Completed ` is printed (after a blank line) before the summary
//! block. Coloring only changes rendering, never the text of a line.

use crate::runner::{RunResult, TestResult, TestRun};
use colored::*;
use std::io::{self, Write};

/// Rule width used when the terminal size is unobtainable (output
/// redirected to a file or pipe, CI, tests).
pub const DEFAULT_RULE_WIDTH: usize = 80;

const COMPLETED_LABEL: &str = " Completed ";

/// Observes test execution. The runner calls `on_test_complete` as each
/// method finishes and `on_run_complete` once after the loop.
pub trait TestReporter {
    /// Called when a single test completes
    fn on_test_complete(&mut self, run: &TestRun);

    /// Called when all tests have completed
    fn on_run_complete(&mut self, result: &RunResult);
}

/// Console reporter writing per-test and summary lines to a sink.
pub struct ConsoleReporter<W: Write> {
    out: W,
    banner: bool,
    no_color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter over an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            banner: false,
            no_color: false,
        }
    }

    /// Set whether to print the `Completed` rule before the summary
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_test_complete(&mut self, run: &TestRun) {
        let line = match &run.result {
            TestResult::Passed => {
                if self.no_color {
                    format!("{}: Passed", run.name)
                } else {
                    format!("{}: {}", run.name, "Passed".green().bold())
                }
            }
            TestResult::Failed { message } => {
                if self.no_color {
                    format!("{}: Failed - {}", run.name, message)
                } else {
                    format!("{}: {} - {}", run.name, "Failed".red().bold(), message)
                }
            }
        };

        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }

    fn on_run_complete(&mut self, result: &RunResult) {
        if self.banner {
            let _ = writeln!(self.out);
            let _ = writeln!(self.out, "{}", completed_rule(terminal_width()));
        }

        let _ = writeln!(self.out);
        let _ = writeln!(
            self.out,
            "Results: {}/{} tests passed",
            result.passed, result.total
        );
        let _ = self.out.flush();
    }
}

/// Width of the attached terminal, or [`DEFAULT_RULE_WIDTH`] when none is.
fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols as usize)
        .unwrap_or(DEFAULT_RULE_WIDTH)
}

/// ` Completed ` centered in a `#` fill of the given width.
fn completed_rule(width: usize) -> String {
    format!("{label:#^width$}", label = COMPLETED_LABEL, width = width)
}
