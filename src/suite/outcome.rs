//! Per-case outcomes and the aggregate suite report.

use serde::Serialize;

/// Result of running one smoke case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Every assertion held
    Passed,

    /// An assertion did not hold
    Failed {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },

    /// The case could not complete its checks (e.g. connection refused)
    Errored { message: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    /// Short console label for the outcome
    pub fn label(&self) -> &'static str {
        match self {
            CaseOutcome::Passed => "PASS",
            CaseOutcome::Failed { .. } => "FAIL",
            CaseOutcome::Errored { .. } => "ERROR",
        }
    }

    /// Failure or error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CaseOutcome::Passed => None,
            CaseOutcome::Failed { message, .. } | CaseOutcome::Errored { message } => {
                Some(message)
            }
        }
    }
}

/// Report for a single smoke case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
    pub elapsed_ms: u64,
}

/// Aggregate report for one suite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub target: String,
    pub cases: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl SuiteReport {
    pub fn new<S: Into<String>>(target: S) -> Self {
        Self { target: target.into(), cases: Vec::new(), passed: 0, failed: 0, errored: 0 }
    }

    /// Append a case report and update the tally
    pub fn record(&mut self, case: CaseReport) {
        match case.outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed { .. } => self.failed += 1,
            CaseOutcome::Errored { .. } => self.errored += 1,
        }
        self.cases.push(case);
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// True iff no case failed or errored
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Process exit status for this report: 0 on success, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Look up a case report by name
    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|case| case.name == name)
    }
}
