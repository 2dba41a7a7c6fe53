//! Invoices endpoints.

use erp_core::{Id, Method};
use erp_query::FieldTable;

use crate::error::Result;
use crate::resource::{EntityClient, Resource};

pub struct Invoices;

impl Resource for Invoices {
    const PATH: &'static str = "/invoices";
    const FIELDS: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("number", "NUMBER"),
        ("customerCode", "CUSTOMER_CODE"),
        ("status", "STATUS"),
        ("total", "TOTAL"),
        ("dueDate", "DUE_DATE"),
        ("dateCreated", "DATE_CREATED"),
    ]);
}

pub type InvoicesClient = EntityClient<Invoices>;

impl InvoicesClient {
    /// Queue one invoice for sending.
    pub async fn send(&self, id: Id) -> Result<serde_json::Value> {
        self.call(Method::Post, &format!("/invoices/{}/send", id), None)
            .await
    }
}
