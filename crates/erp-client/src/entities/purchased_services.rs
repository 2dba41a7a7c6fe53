//! Purchased services endpoints.

use erp_core::Method;
use erp_query::FieldTable;

use crate::error::Result;
use crate::resource::{EntityClient, Resource};

pub struct PurchasedServices;

impl Resource for PurchasedServices {
    const PATH: &'static str = "/purchasedservices";
    const FIELDS: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("name", "NAME"),
        ("status", "STATUS"),
        ("supplierCode", "SUPPLIER_CODE"),
        ("price", "PRICE"),
        ("dateCreated", "DATE_CREATED"),
    ]);
}

pub type PurchasedServicesClient = EntityClient<PurchasedServices>;

impl PurchasedServicesClient {
    /// All purchased services for one supplier.
    pub async fn by_supplier(&self, supplier_code: &str) -> Result<serde_json::Value> {
        self.call(
            Method::Get,
            &format!("/purchasedservices/supplier/{}", supplier_code),
            None,
        )
        .await
    }
}
