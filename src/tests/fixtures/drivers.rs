use crate::modules::rosters::adapters::mappers::driver_row::DriverRow;
use crate::modules::rosters::adapters::outbound::driver_directory_in_memory::InMemoryDriverDirectory;
use crate::modules::rosters::core::driver::{DRIVER_ROLE, Driver};

/// An active driver reachable at `{id}@example.test`.
pub fn driver_row(id: &str, name: &str) -> DriverRow {
    DriverRow {
        id: id.to_string(),
        name: Some(name.to_string()),
        email: Some(format!("{id}@example.test")),
        role: DRIVER_ROLE.to_string(),
        color: None,
        vehicle_id: None,
        active: true,
    }
}

pub fn driver_row_without_email(id: &str, name: &str) -> DriverRow {
    DriverRow {
        email: None,
        ..driver_row(id, name)
    }
}

pub fn driver(id: &str, name: &str) -> Driver {
    Driver::from(driver_row(id, name))
}

pub fn driver_without_email(id: &str, name: &str) -> Driver {
    Driver::from(driver_row_without_email(id, name))
}

/// d1 Dana, d2 Eli (no email), d3 Fay.
pub fn fleet() -> InMemoryDriverDirectory {
    InMemoryDriverDirectory::with_rows(vec![
        driver_row("d1", "Dana"),
        driver_row_without_email("d2", "Eli"),
        driver_row("d3", "Fay"),
    ])
}
