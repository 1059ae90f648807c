use crate::idset::BitSet;

/// One of the fixed TCF2 data-processing purposes (1..=10).
pub type PurposeId = u16;

/// GVL vendor identifier.
pub type VendorId = u16;

/// Publisher override for one purpose, carried in the consent string.
///
/// Absence of a restriction entry reads as `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionKind {
    Undefined,
    NotAllowed,
    RequireConsent,
    RequireLegitimateInterest,
}

impl RestrictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::NotAllowed => "not_allowed",
            Self::RequireConsent => "require_consent",
            Self::RequireLegitimateInterest => "require_legitimate_interest",
        }
    }
}

/// Read-only view over one decoded consent string.
///
/// Generic over the membership-set representation so callers can plug in
/// anything with a `contains`; the decoder produces [`BitSet`]s.
///
/// Instances are immutable request-scoped snapshots: built once per auction,
/// consumed synchronously, discarded.
#[derive(Debug, Clone)]
pub struct ConsentRecord<S = BitSet> {
    purpose_consent: S,
    purpose_li: S,
    vendor_consent: S,
    vendor_li: S,
    restrictions: Vec<(PurposeId, RestrictionKind)>,
}

impl<S> ConsentRecord<S> {
    pub fn new(
        purpose_consent: S,
        purpose_li: S,
        vendor_consent: S,
        vendor_li: S,
        restrictions: Vec<(PurposeId, RestrictionKind)>,
    ) -> Self {
        Self {
            purpose_consent,
            purpose_li,
            vendor_consent,
            vendor_li,
            restrictions,
        }
    }

    /// Per-purpose consent set.
    pub fn purpose_consent(&self) -> &S {
        &self.purpose_consent
    }

    /// Per-purpose legitimate-interest (transparency) set.
    pub fn purpose_li(&self) -> &S {
        &self.purpose_li
    }

    /// Per-vendor consent set.
    pub fn vendor_consent(&self) -> &S {
        &self.vendor_consent
    }

    /// Per-vendor legitimate-interest set.
    pub fn vendor_li(&self) -> &S {
        &self.vendor_li
    }

    /// Publisher restriction for `purpose`, `Undefined` when no entry exists.
    ///
    /// The decoder contract guarantees at most one entry per purpose; the
    /// first match wins on malformed input.
    pub fn restriction_kind(&self, purpose: PurposeId) -> RestrictionKind {
        self.restrictions
            .iter()
            .find(|(p, _)| *p == purpose)
            .map_or(RestrictionKind::Undefined, |(_, kind)| *kind)
    }
}
