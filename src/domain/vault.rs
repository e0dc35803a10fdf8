use crate::domain::models::{FetchOutcome, ServiceIndex, ServiceList};
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaultClient: Send + Sync {
    // The full list of service names for the logged-in user.
    async fn list_services(&self) -> Result<ServiceList>;

    // Fetch one credential record by its position in the service list.
    async fn fetch_entry(&self, index: ServiceIndex) -> Result<FetchOutcome>;
}
