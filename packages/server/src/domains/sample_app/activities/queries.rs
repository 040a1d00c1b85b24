//! Sample app query activities

use tracing::info;

use crate::common::SampleAppId;
use crate::domains::sample_app::data::{SampleAppData, SampleAppListData};
use crate::domains::sample_app::errors::SampleAppError;
use crate::kernel::ServerDeps;

/// Get every record as flat data, in store order
pub async fn list_all(deps: &ServerDeps) -> Result<SampleAppListData, SampleAppError> {
    let records = deps.sample_apps.find_all().await?;

    info!(count = records.len(), "Listed sample app records");

    Ok(SampleAppListData::from(records))
}

/// Get a single record by ID
pub async fn get_sample_app(
    id: SampleAppId,
    deps: &ServerDeps,
) -> Result<SampleAppData, SampleAppError> {
    info!(sample_app_id = %id, "Getting sample app record");

    deps.sample_apps
        .find_by_id(id)
        .await?
        .map(SampleAppData::from)
        .ok_or(SampleAppError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::sample_app::models::SampleApp;
    use crate::kernel::{MemorySampleAppStore, TestDependencies};

    fn record(id: i32, name: &str, flags: [bool; 5]) -> SampleApp {
        SampleApp {
            id: SampleAppId::new(id),
            name: name.to_string(),
            job0001_flag: flags[0],
            job0002_flag: flags[1],
            job0003_flag: flags[2],
            job0004_flag: flags[3],
            job0005_flag: flags[4],
        }
    }

    fn deps(records: Vec<SampleApp>) -> ServerDeps {
        TestDependencies::with_store(MemorySampleAppStore::with_records(records))
            .into_server_deps()
    }

    #[tokio::test]
    async fn list_all_copies_every_field_in_store_order() {
        let deps = deps(vec![
            record(2, "B", [false, true, false, true, false]),
            record(1, "A", [true, false, false, false, true]),
        ]);

        let list = list_all(&deps).await.unwrap();

        assert_eq!(list.len(), 2);
        let first = &list.sample_app_list[0];
        assert_eq!(first.id, SampleAppId::new(1));
        assert_eq!(first.name, "A");
        assert_eq!(first.flags(), [true, false, false, false, true]);
        let second = &list.sample_app_list[1];
        assert_eq!(second.id, SampleAppId::new(2));
        assert_eq!(second.name, "B");
        assert_eq!(second.flags(), [false, true, false, true, false]);
    }

    #[tokio::test]
    async fn list_all_of_empty_store_is_empty() {
        let list = list_all(&deps(vec![])).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn get_sample_app_reports_missing_ids() {
        let deps = deps(vec![record(1, "A", [false; 5])]);

        let found = get_sample_app(SampleAppId::new(1), &deps).await.unwrap();
        assert_eq!(found.name, "A");

        let err = get_sample_app(SampleAppId::new(9), &deps).await.unwrap_err();
        assert!(matches!(err, SampleAppError::NotFound(id) if id == SampleAppId::new(9)));
    }
}
