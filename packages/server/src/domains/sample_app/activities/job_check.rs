//! Job check - report records whose flag for a job is unset

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::domains::sample_app::data::{JobCheckReport, SampleAppData};
use crate::domains::sample_app::errors::SampleAppError;
use crate::domains::sample_app::models::Job;
use crate::kernel::ServerDeps;

/// Check `job` against all records, dated today (local time)
pub async fn check_job(job: Job, deps: &ServerDeps) -> Result<JobCheckReport, SampleAppError> {
    check_job_on(job, Local::now().date_naive(), deps).await
}

/// Check `job` against all records with an explicit report date
pub async fn check_job_on(
    job: Job,
    checked_on: NaiveDate,
    deps: &ServerDeps,
) -> Result<JobCheckReport, SampleAppError> {
    let failures: Vec<SampleAppData> = deps
        .sample_apps
        .find_by_flag(job, false)
        .await?
        .into_iter()
        .map(SampleAppData::from)
        .collect();

    if failures.is_empty() {
        info!(job = %job, "Job check passed");
    } else {
        warn!(job = %job, failures = failures.len(), "Job check found unset flags");
    }

    Ok(JobCheckReport {
        job,
        checked_on,
        failures,
    })
}

/// Write the failing records of `report` into `dir` as a pretty-printed JSON
/// array of records.
///
/// Returns the path written, or `None` when the job passed and there is
/// nothing to report.
pub async fn write_report(report: &JobCheckReport, dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    if report.is_success() {
        return Ok(None);
    }

    let path = dir.join(report.report_file_name());
    let json =
        serde_json::to_string_pretty(&report.failures).context("Failed to serialize report")?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(job = %report.job, path = %path.display(), "Wrote job check report");

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SampleAppId;
    use crate::domains::sample_app::models::SampleApp;
    use crate::kernel::{MemorySampleAppStore, TestDependencies};

    fn record(id: i32, flags: [bool; 5]) -> SampleApp {
        SampleApp {
            id: SampleAppId::new(id),
            name: format!("record {}", id),
            job0001_flag: flags[0],
            job0002_flag: flags[1],
            job0003_flag: flags[2],
            job0004_flag: flags[3],
            job0005_flag: flags[4],
        }
    }

    #[tokio::test]
    async fn reports_only_records_with_unset_flag() {
        let deps = TestDependencies::with_store(MemorySampleAppStore::with_records(vec![
            record(1, [true, true, false, true, true]),
            record(2, [true, true, true, true, true]),
            record(3, [false, false, false, false, false]),
        ]))
        .into_server_deps();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let report = check_job_on(Job::Job0003, date, &deps).await.unwrap();

        assert!(!report.is_success());
        let ids: Vec<_> = report.failures.iter().map(|r| r.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(
            report.report_file_name(),
            "Job0003_failure_result_2026-10-18.json"
        );
    }

    #[tokio::test]
    async fn all_flags_set_is_success() {
        let deps = TestDependencies::with_store(MemorySampleAppStore::with_records(vec![
            record(1, [true; 5]),
        ]))
        .into_server_deps();

        let report = check_job(Job::Job0001, &deps).await.unwrap();

        assert!(report.is_success());
        assert_eq!(report.job, Job::Job0001);
    }

    #[tokio::test]
    async fn failed_check_writes_record_array_and_exits_one() {
        let deps = TestDependencies::with_store(MemorySampleAppStore::with_records(vec![
            record(1, [true, false, true, true, true]),
            record(2, [true; 5]),
        ]))
        .into_server_deps();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let report = check_job_on(Job::Job0002, date, &deps).await.unwrap();
        let path = write_report(&report, dir.path()).await.unwrap().unwrap();

        assert_eq!(report.exit_status(), 1);
        assert_eq!(path, dir.path().join("Job0002_failure_result_2026-10-18.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  "), "report should be pretty-printed");
        let records: Vec<SampleAppData> = serde_json::from_str(&written).unwrap();
        assert_eq!(records, report.failures);
        assert_eq!(records[0].id, SampleAppId::new(1));
        assert!(!records[0].job0002_flag);
    }

    #[tokio::test]
    async fn passed_check_writes_nothing_and_exits_zero() {
        let deps = TestDependencies::with_store(MemorySampleAppStore::with_records(vec![
            record(1, [true; 5]),
        ]))
        .into_server_deps();
        let dir = tempfile::tempdir().unwrap();

        let report = check_job(Job::Job0005, &deps).await.unwrap();
        let written = write_report(&report, dir.path()).await.unwrap();

        assert_eq!(written, None);
        assert_eq!(report.exit_status(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
