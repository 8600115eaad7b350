/// Outcome of a single sequencer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Passed,
    /// Diagnostic failure; the suite keeps going.
    SoftFailed,
    /// Hard precondition failure; the suite stops here.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseResult {
    pub name: &'static str,
    pub status: PhaseStatus,
    pub detail: String,
}

impl PhaseResult {
    pub fn passed(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: PhaseStatus::Passed,
            detail: detail.into(),
        }
    }

    pub fn soft_failed(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: PhaseStatus::SoftFailed,
            detail: detail.into(),
        }
    }

    pub fn failed(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: PhaseStatus::Failed,
            detail: detail.into(),
        }
    }
}

/// Aggregated suite outcome.
///
/// Only the health gate decides overall pass/fail; later phases are
/// diagnostic and surface as soft failures without changing the suite's
/// binary completion status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteReport {
    pub phases: Vec<PhaseResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.phases
            .first()
            .map(|phase| phase.status == PhaseStatus::Passed)
            .unwrap_or(false)
    }

    pub fn soft_failures(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| phase.status == PhaseStatus::SoftFailed)
            .count()
    }
}
