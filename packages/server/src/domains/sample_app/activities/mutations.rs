//! Sample app mutation activities

use std::collections::HashMap;

use tracing::{info, warn};

use crate::common::SampleAppId;
use crate::domains::sample_app::activities::get_sample_app;
use crate::domains::sample_app::data::{SampleAppData, SampleAppFlagsInput, SampleAppListData};
use crate::domains::sample_app::errors::SampleAppError;
use crate::domains::sample_app::models::{Job, SampleApp};
use crate::kernel::ServerDeps;

/// Overwrite the five job flags of every submitted record.
///
/// Each record is loaded by id first; if any id is unknown the whole batch is
/// rejected and nothing is written. Names and ids are never changed. Repeated
/// ids apply in submission order, so the last entry wins. Returns the number
/// of records saved.
pub async fn update_all(
    input: &SampleAppListData,
    deps: &ServerDeps,
) -> Result<usize, SampleAppError> {
    let mut loaded: Vec<SampleApp> = Vec::with_capacity(input.len());
    let mut positions = HashMap::new();

    for entry in &input.sample_app_list {
        let position = match positions.get(&entry.id) {
            Some(&position) => position,
            None => {
                let Some(record) = deps.sample_apps.find_by_id(entry.id).await? else {
                    warn!(sample_app_id = %entry.id, "Update references unknown record");
                    return Err(SampleAppError::NotFound(entry.id));
                };
                loaded.push(record);
                positions.insert(entry.id, loaded.len() - 1);
                loaded.len() - 1
            }
        };

        let record = &mut loaded[position];
        for job in Job::ALL {
            record.set_flag(job, entry.flag(job));
        }
    }

    deps.sample_apps.save_all(&loaded).await?;

    info!(count = loaded.len(), "Updated sample app flags");

    Ok(loaded.len())
}

/// Overwrite the five job flags of one record and return it as stored.
///
/// Goes through the same load-then-save path as [`update_all`].
pub async fn update_flags(
    id: SampleAppId,
    flags: SampleAppFlagsInput,
    deps: &ServerDeps,
) -> Result<SampleAppData, SampleAppError> {
    let input = SampleAppListData {
        sample_app_list: vec![flags.into_entry(id)],
    };
    update_all(&input, deps).await?;

    get_sample_app(id, deps).await
}
