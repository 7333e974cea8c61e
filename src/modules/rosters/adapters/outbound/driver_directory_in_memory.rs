use crate::modules::rosters::adapters::mappers::driver_row::DriverRow;
use crate::modules::rosters::adapters::outbound::driver_directory::{
    DirectoryError, DriverDirectory,
};
use crate::modules::rosters::core::driver::Driver;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDriverDirectory {
    rows: RwLock<Vec<DriverRow>>,
    is_offline: bool,
}

impl InMemoryDriverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<DriverRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
            is_offline: false,
        }
    }

    /// Seed from a JSON array of driver rows.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::with_rows(serde_json::from_str(json)?))
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, row: DriverRow) {
        self.rows.write().await.push(row);
    }
}

#[async_trait::async_trait]
impl DriverDirectory for InMemoryDriverDirectory {
    async fn list_active_drivers(&self) -> Result<Vec<Driver>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Driver directory offline".into()));
        }

        let mut drivers: Vec<Driver> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.is_active_driver())
            .cloned()
            .map(Driver::from)
            .collect();
        drivers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(drivers)
    }
}

#[cfg(test)]
mod in_memory_driver_directory_tests {
    use super::*;
    use rstest::rstest;

    const ROWS: &str = r#"[
        {"id":"d2","name":"Zoe","email":"zoe@example.test","role":"driver"},
        {"id":"d1","name":"Ann","role":"driver"},
        {"id":"d3","name":"Old","role":"driver","active":false},
        {"id":"m1","name":"Max","role":"manager"}
    ]"#;

    #[rstest]
    #[tokio::test]
    async fn it_should_list_only_active_drivers_sorted_by_name() {
        let directory = InMemoryDriverDirectory::from_json(ROWS).unwrap();
        let drivers = directory.list_active_drivers().await.unwrap();
        let ids: Vec<&str> = drivers.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_include_inserted_drivers() {
        let directory = InMemoryDriverDirectory::new();
        directory
            .insert(serde_json::from_str(r#"{"id":"d9","role":"driver"}"#).unwrap())
            .await;
        assert_eq!(directory.list_active_drivers().await.unwrap().len(), 1);
    }

    #[rstest]
    fn it_should_reject_malformed_seed_json() {
        assert!(InMemoryDriverDirectory::from_json(r#"[{"name":"no id"}]"#).is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut directory = InMemoryDriverDirectory::from_json(ROWS).unwrap();
        directory.toggle_offline();
        let result = directory.list_active_drivers().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Driver directory offline")
        );
    }
}
