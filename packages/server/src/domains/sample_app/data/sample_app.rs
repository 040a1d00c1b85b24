use serde::{Deserialize, Serialize};

use crate::common::SampleAppId;
use crate::domains::sample_app::models::{Job, SampleApp};

/// Flat sample app record exchanged with the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAppData {
    pub id: SampleAppId,
    pub name: String,
    pub job0001_flag: bool,
    pub job0002_flag: bool,
    pub job0003_flag: bool,
    pub job0004_flag: bool,
    pub job0005_flag: bool,
}

impl SampleAppData {
    pub fn flag(&self, job: Job) -> bool {
        match job {
            Job::Job0001 => self.job0001_flag,
            Job::Job0002 => self.job0002_flag,
            Job::Job0003 => self.job0003_flag,
            Job::Job0004 => self.job0004_flag,
            Job::Job0005 => self.job0005_flag,
        }
    }

    pub fn flags(&self) -> [bool; 5] {
        Job::ALL.map(|job| self.flag(job))
    }
}

impl From<SampleApp> for SampleAppData {
    fn from(record: SampleApp) -> Self {
        Self {
            id: record.id,
            name: record.name,
            job0001_flag: record.job0001_flag,
            job0002_flag: record.job0002_flag,
            job0003_flag: record.job0003_flag,
            job0004_flag: record.job0004_flag,
            job0005_flag: record.job0005_flag,
        }
    }
}

/// New flag values for a single record, as posted to the JSON API.
///
/// All five flags are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SampleAppFlagsInput {
    pub job0001_flag: bool,
    pub job0002_flag: bool,
    pub job0003_flag: bool,
    pub job0004_flag: bool,
    pub job0005_flag: bool,
}

impl SampleAppFlagsInput {
    /// The list entry `update_all` expects for record `id`
    pub fn into_entry(self, id: SampleAppId) -> SampleAppData {
        SampleAppData {
            id,
            name: String::new(),
            job0001_flag: self.job0001_flag,
            job0002_flag: self.job0002_flag,
            job0003_flag: self.job0003_flag,
            job0004_flag: self.job0004_flag,
            job0005_flag: self.job0005_flag,
        }
    }
}

/// The list shape shared by the list view, the form view and the update input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAppListData {
    pub sample_app_list: Vec<SampleAppData>,
}

impl SampleAppListData {
    pub fn len(&self) -> usize {
        self.sample_app_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_app_list.is_empty()
    }
}

impl From<Vec<SampleApp>> for SampleAppListData {
    fn from(records: Vec<SampleApp>) -> Self {
        Self {
            sample_app_list: records.into_iter().map(SampleAppData::from).collect(),
        }
    }
}
