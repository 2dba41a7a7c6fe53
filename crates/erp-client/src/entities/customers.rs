//! Customers endpoints.

use erp_core::{Id, Method};
use erp_query::FieldTable;

use crate::error::Result;
use crate::resource::{EntityClient, Resource};

pub struct Customers;

impl Resource for Customers {
    const PATH: &'static str = "/customers";
    const FIELDS: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("name", "NAME"),
        ("status", "STATUS"),
        ("city", "CITY"),
        ("groupCode", "GROUP_CODE"),
        ("dateCreated", "DATE_CREATED"),
        ("dateChanged", "DATE_CHANGED"),
    ]);
}

pub type CustomersClient = EntityClient<Customers>;

impl CustomersClient {
    /// Open balance for one customer.
    pub async fn balance(&self, id: Id) -> Result<serde_json::Value> {
        self.call(Method::Get, &format!("/customers/{}/balance", id), None)
            .await
    }
}
