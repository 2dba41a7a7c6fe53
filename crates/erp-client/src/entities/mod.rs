//! Per-entity clients.
//!
//! Each module declares one entity: its collection path, its field table,
//! and any custom endpoint wrappers beyond the standard generated surface.

pub mod customers;
pub mod invoices;
pub mod products;
pub mod purchased_services;
pub mod workstations;

pub use customers::{Customers, CustomersClient};
pub use invoices::{Invoices, InvoicesClient};
pub use products::{Products, ProductsClient};
pub use purchased_services::{PurchasedServices, PurchasedServicesClient};
pub use workstations::{Workstations, WorkstationsClient};
