//! Read-only data model over a decoded TCF2 consent string.
//!
//! The binary consent-string decoder lives upstream; this crate only models
//! what the enforcement engine needs from its output: per-purpose and
//! per-vendor membership sets plus the publisher restriction list.

pub mod idset;
pub mod record;

pub use idset::{BitSet, IdSet};
pub use record::{ConsentRecord, PurposeId, RestrictionKind, VendorId};
