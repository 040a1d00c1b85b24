use serde::{Deserialize, Serialize};

use crate::domains::sample_app::errors::SampleAppError;

/// One of the five jobs a sample app record carries a flag for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    Job0001,
    Job0002,
    Job0003,
    Job0004,
    Job0005,
}

impl Job {
    pub const ALL: [Job; 5] = [
        Job::Job0001,
        Job::Job0002,
        Job::Job0003,
        Job::Job0004,
        Job::Job0005,
    ];

    /// 1-based job number
    pub fn number(self) -> u8 {
        match self {
            Job::Job0001 => 1,
            Job::Job0002 => 2,
            Job::Job0003 => 3,
            Job::Job0004 => 4,
            Job::Job0005 => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Column holding this job's flag in `sampleapp_table`
    pub fn column(self) -> &'static str {
        match self {
            Job::Job0001 => "job0001_flag",
            Job::Job0002 => "job0002_flag",
            Job::Job0003 => "job0003_flag",
            Job::Job0004 => "job0004_flag",
            Job::Job0005 => "job0005_flag",
        }
    }

    /// Form field suffix used by the edit form (`sampleAppList[N].job0001Flag`)
    pub fn form_field(self) -> &'static str {
        match self {
            Job::Job0001 => "job0001Flag",
            Job::Job0002 => "job0002Flag",
            Job::Job0003 => "job0003Flag",
            Job::Job0004 => "job0004Flag",
            Job::Job0005 => "job0005Flag",
        }
    }

    pub fn from_form_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|job| job.form_field() == field)
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job{:04}", self.number())
    }
}

impl std::str::FromStr for Job {
    type Err = SampleAppError;

    /// Accepts `Job0003`, `job0003` or a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let digits = lower.strip_prefix("job").unwrap_or(&lower);

        digits
            .parse::<u8>()
            .ok()
            .and_then(Job::from_number)
            .ok_or_else(|| SampleAppError::UnknownJob(trimmed.to_string()))
    }
}
