use chrono::NaiveDate;
use serde::Serialize;

use super::SampleAppData;
use crate::domains::sample_app::models::Job;

/// Result of checking one job across all records.
///
/// A record "fails" a job when its flag for that job is unset.
#[derive(Debug, Clone, Serialize)]
pub struct JobCheckReport {
    pub job: Job,
    pub checked_on: NaiveDate,
    pub failures: Vec<SampleAppData>,
}

impl JobCheckReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status for a scheduler: 0 on success, 1 when any record failed
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// e.g. `Job0003_failure_result_2026-10-18.json`
    pub fn report_file_name(&self) -> String {
        format!(
            "{}_failure_result_{}.json",
            self.job,
            self.checked_on.format("%Y-%m-%d")
        )
    }
}
