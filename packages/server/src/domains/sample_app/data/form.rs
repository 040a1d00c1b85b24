//! Binding for the bulk edit form.
//!
//! The form posts one group of fields per row, indexed like
//! `sampleAppList[0].id`, `sampleAppList[0].job0001Flag`. Unchecked checkboxes
//! are not submitted, so a missing flag binds as `false`. The rendered form
//! puts a hidden `false` input before each checkbox; when a key repeats, the
//! last value wins.

use std::collections::BTreeMap;

use super::{SampleAppData, SampleAppListData};
use crate::common::SampleAppId;
use crate::domains::sample_app::errors::SampleAppError;
use crate::domains::sample_app::models::Job;

pub const FORM_LIST_NAME: &str = "sampleAppList";

/// Raw submitted fields for one row, before type checks
#[derive(Debug, Default)]
struct RowFields {
    id: Option<String>,
    name: Option<String>,
    flags: [Option<String>; 5],
}

/// Submitted form, grouped by row index
#[derive(Debug, Default)]
pub struct SampleAppForm {
    rows: BTreeMap<usize, RowFields>,
}

impl SampleAppForm {
    /// Field name for `field` of row `index`
    pub fn field_name(index: usize, field: &str) -> String {
        format!("{}[{}].{}", FORM_LIST_NAME, index, field)
    }

    /// Group url-decoded key/value pairs by row. Rejects unknown keys.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SampleAppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();

        for (key, value) in pairs {
            let (index, field) = parse_key(&key)?;
            let row = form.rows.entry(index).or_default();

            match field {
                "id" => row.id = Some(value),
                "name" => row.name = Some(value),
                other => match Job::from_form_field(other) {
                    Some(job) => row.flags[usize::from(job.number() - 1)] = Some(value),
                    None => {
                        return Err(SampleAppError::InvalidForm(format!(
                            "unknown field '{}'",
                            key
                        )))
                    }
                },
            }
        }

        Ok(form)
    }

    /// Type-check every row and produce the update input, in index order.
    pub fn into_list(self) -> Result<SampleAppListData, SampleAppError> {
        let sample_app_list = self
            .rows
            .into_iter()
            .map(|(index, row)| bind_row(index, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SampleAppListData { sample_app_list })
    }
}

fn parse_key(key: &str) -> Result<(usize, &str), SampleAppError> {
    let invalid = || SampleAppError::InvalidForm(format!("unexpected field '{}'", key));

    let rest = key
        .strip_prefix(FORM_LIST_NAME)
        .and_then(|rest| rest.strip_prefix('['))
        .ok_or_else(invalid)?;
    let (index, field) = rest.split_once("].").ok_or_else(invalid)?;
    let index = index.parse::<usize>().map_err(|_| invalid())?;

    Ok((index, field))
}

fn bind_row(index: usize, row: RowFields) -> Result<SampleAppData, SampleAppError> {
    let id = row
        .id
        .ok_or_else(|| SampleAppError::InvalidForm(format!("row {}: id is required", index)))?;
    let id = id.parse::<SampleAppId>().map_err(|_| {
        SampleAppError::InvalidForm(format!("row {}: id '{}' is not an integer", index, id))
    })?;

    let mut flags = [false; 5];
    for (job, raw) in Job::ALL.into_iter().zip(row.flags) {
        if let Some(raw) = raw {
            flags[usize::from(job.number() - 1)] = parse_flag(&raw).ok_or_else(|| {
                SampleAppError::InvalidForm(format!(
                    "row {}: {} must be a boolean, got '{}'",
                    index,
                    job.form_field(),
                    raw
                ))
            })?;
        }
    }

    Ok(SampleAppData {
        id,
        name: row.name.unwrap_or_default(),
        job0001_flag: flags[0],
        job0002_flag: flags[1],
        job0003_flag: flags[2],
        job0004_flag: flags[3],
        job0005_flag: flags[4],
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" => Some(true),
        "false" | "off" => Some(false),
        _ => None,
    }
}
