//! The client facade.

use std::sync::Arc;

use erp_core::ClientConfig;

use crate::entities::{
    CustomersClient, InvoicesClient, ProductsClient, PurchasedServicesClient, WorkstationsClient,
};
use crate::error::Result;
use crate::resource::EntityClient;
use crate::transport::{HttpTransport, Transport};

/// Entry point: one shared transport, one accessor per entity.
#[derive(Clone)]
pub struct ErpClient {
    transport: Arc<dyn Transport>,
}

impl ErpClient {
    /// Build a client from explicit configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Build a client from `ERP_API_URL` / `ERP_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(&config)
    }

    /// Build a client over a custom transport (tests, instrumentation).
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn customers(&self) -> CustomersClient {
        EntityClient::new(self.transport.clone())
    }

    pub fn products(&self) -> ProductsClient {
        EntityClient::new(self.transport.clone())
    }

    pub fn invoices(&self) -> InvoicesClient {
        EntityClient::new(self.transport.clone())
    }

    pub fn purchased_services(&self) -> PurchasedServicesClient {
        EntityClient::new(self.transport.clone())
    }

    pub fn workstations(&self) -> WorkstationsClient {
        EntityClient::new(self.transport.clone())
    }
}
