//! Purpose enforcement strategies.
//!
//! One strategy is selected per TCF purpose at configuration time. All three
//! share the same contract: given the consent record and the vendor entries
//! for this auction, return the subset of permissions that may process data
//! for the purpose. Entries the caller already knows to be outside this
//! purpose's enforcement scope (`exempt`) pass through unchecked, except
//! where a strategy defines a global veto.

mod basic;
mod full;
mod none;

use crate::permission::{VendorEntry, VendorPermission};
use bidgate_consent::{ConsentRecord, IdSet, PurposeId};

/// Closed set of enforcement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeStrategy {
    /// No enforcement: every entry is allowed.
    None,
    /// Consent-signal-only check, ignoring GVL declarations and publisher
    /// restrictions.
    Basic,
    /// Full rule set: publisher veto, declared/overridden legal basis,
    /// purpose- and vendor-level signals.
    Full,
}

impl PurposeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "no",
            Self::Basic => "basic",
            Self::Full => "full",
        }
    }

    /// Vendors permitted to process data for `purpose`.
    ///
    /// `subject` entries are evaluated against the strategy's rules;
    /// `exempt` entries pass through unconditionally unless the strategy's
    /// global veto fires. When `enforce_vendor` is set, the vendor-level
    /// signal must hold in addition to the purpose-level one.
    ///
    /// Pure over its inputs: no entry is mutated and nothing is cached, so
    /// concurrent calls from parallel auction tasks need no synchronization.
    pub fn allowed_vendors<'a, S: IdSet>(
        &self,
        purpose: PurposeId,
        consent: &ConsentRecord<S>,
        subject: &'a [VendorEntry],
        exempt: &'a [VendorEntry],
        enforce_vendor: bool,
    ) -> Vec<&'a VendorPermission> {
        match self {
            Self::None => none::allowed_vendors(subject, exempt),
            Self::Basic => basic::allowed_vendors(purpose, consent, subject, exempt, enforce_vendor),
            Self::Full => full::allowed_vendors(purpose, consent, subject, exempt, enforce_vendor),
        }
    }
}
