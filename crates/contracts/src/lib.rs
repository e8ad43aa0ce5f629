//! Request/response schemas shared between the admin console and the
//! CRM backend REST API.
//!
//! Everything here is plain serde data; the crate performs no I/O.

pub mod ai;
pub mod domain;
pub mod reports;
pub mod shared;
pub mod system;
