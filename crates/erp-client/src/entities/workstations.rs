//! Workstations endpoints.

use erp_core::{Id, Method};
use erp_query::FieldTable;

use crate::error::Result;
use crate::resource::{EntityClient, Resource};

pub struct Workstations;

impl Resource for Workstations {
    const PATH: &'static str = "/workstations";
    const FIELDS: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("name", "NAME"),
        ("status", "STATUS"),
        ("department", "DEPARTMENT"),
        ("capacity", "CAPACITY"),
        ("dateCreated", "DATE_CREATED"),
    ]);
}

pub type WorkstationsClient = EntityClient<Workstations>;

impl WorkstationsClient {
    /// Toggle a workstation's active flag.
    pub async fn set_active(&self, id: Id, active: bool) -> Result<serde_json::Value> {
        let body = serde_json::json!({ "active": active });
        self.call(
            Method::Patch,
            &format!("/workstations/{}/active", id),
            Some(body),
        )
        .await
    }
}
