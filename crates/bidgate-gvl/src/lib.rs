//! Global Vendor List (GVL) data model.
//!
//! The GVL maps each advertising vendor to the purposes it declares under
//! consent basis, under legitimate-interest basis, and the purposes whose
//! basis a publisher restriction may override (flexible purposes).
//!
//! HTTP retrieval and version refresh of the list live upstream; this crate
//! models an already-fetched snapshot. The declared-set invariants are
//! enforced here, at the loader boundary, so the enforcement engine never
//! has to tolerate malformed capabilities.

pub mod registry;
pub mod vendor;

pub use registry::Gvl;
pub use vendor::{GvlError, VendorCapability};
