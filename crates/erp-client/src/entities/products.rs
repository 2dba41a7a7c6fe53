//! Products endpoints.

use erp_core::{Id, Method};
use erp_query::FieldTable;

use crate::error::Result;
use crate::resource::{EntityClient, Resource};

pub struct Products;

impl Resource for Products {
    const PATH: &'static str = "/products";
    const FIELDS: FieldTable = FieldTable::new(&[
        ("code", "CODE"),
        ("name", "NAME"),
        ("status", "STATUS"),
        ("price", "PRICE"),
        ("unit", "UNIT"),
        ("productGroup", "PRODUCT_GROUP"),
        ("dateCreated", "DATE_CREATED"),
    ]);
}

pub type ProductsClient = EntityClient<Products>;

impl ProductsClient {
    /// Current stock levels for one product across warehouses.
    pub async fn stock(&self, id: Id) -> Result<serde_json::Value> {
        self.call(Method::Get, &format!("/products/{}/stock", id), None)
            .await
    }
}
