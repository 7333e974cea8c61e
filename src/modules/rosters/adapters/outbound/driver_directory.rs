use crate::modules::rosters::core::driver::Driver;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("driver directory backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DriverDirectory: Send + Sync {
    /// Users with the driver role whose account is active.
    async fn list_active_drivers(&self) -> Result<Vec<Driver>, DirectoryError>;
}
