use crate::modules::rosters::core::driver::{DRIVER_ROLE, Driver};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRow {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl DriverRow {
    pub fn is_active_driver(&self) -> bool {
        self.active && self.role.trim().eq_ignore_ascii_case(DRIVER_ROLE)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        let name = non_blank(row.name).unwrap_or_else(|| row.id.clone());
        Self {
            id: row.id,
            name,
            email: non_blank(row.email),
            role: row.role.trim().to_ascii_lowercase(),
            color: non_blank(row.color),
            vehicle_id: non_blank(row.vehicle_id),
        }
    }
}
