//! GDPR/TCF2 purpose enforcement engine.
//!
//! For one TCF purpose at a time, the engine decides which advertising
//! vendors may legally process data, given a decoded consent record, each
//! vendor's Global Vendor List declaration, and publisher overrides. The
//! outer auction pipeline calls it once per purpose and intersects the
//! results into a final per-vendor enforcement action; that aggregation, the
//! consent-string decoder, and the GVL fetcher all live upstream.
//!
//! Three strategies exist, selected per purpose at configuration time and
//! sharing one contract so the caller stays variant-agnostic:
//!
//! - [`PurposeStrategy::Full`] — the complete rule set: publisher veto,
//!   declared/overridden legal basis, purpose- and vendor-level signals.
//! - [`PurposeStrategy::Basic`] — consent signals only, no GVL or
//!   restriction handling.
//! - [`PurposeStrategy::None`] — no enforcement.

pub mod config;
pub mod permission;
pub mod strategy;

pub use config::{load_config, ConfigError, EnforcementMode, PurposeConfig, TcfConfig};
pub use permission::{PrivacyEnforcementAction, VendorEntry, VendorPermission};
pub use strategy::PurposeStrategy;
