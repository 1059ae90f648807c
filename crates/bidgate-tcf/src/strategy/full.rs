//! Full purpose enforcement.
//!
//! Decision order, per call:
//!
//! 1. A `NotAllowed` publisher restriction for the purpose vetoes every
//!    vendor, exempt ones included. This is the only path that can suppress
//!    exempt entries.
//! 2. Exempt entries pass through unconditionally.
//! 3. Each subject vendor is evaluated on its effective legal basis: the
//!    basis it declares in the GVL, unless the purpose is flexible for the
//!    vendor and a `RequireConsent`/`RequireLegitimateInterest` restriction
//!    forces the other one. The override replaces the declared basis; the
//!    other signal channel is never consulted.
//!
//! Every check short-circuits. A vendor with no declared basis is denied
//! without touching the consent sets, and a failed purpose-level bit stops
//! the vendor-level bit from being read. Callers rely on this when the sets
//! are instrumented.

use crate::permission::{VendorEntry, VendorPermission};
use bidgate_consent::{ConsentRecord, IdSet, PurposeId, RestrictionKind};
use bidgate_gvl::VendorCapability;
use tracing::{debug, trace};

/// Legal basis a vendor relies on for one purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Basis {
    Consent,
    LegitimateInterest,
}

pub(super) fn allowed_vendors<'a, S: IdSet>(
    purpose: PurposeId,
    consent: &ConsentRecord<S>,
    subject: &'a [VendorEntry],
    exempt: &'a [VendorEntry],
    enforce_vendor: bool,
) -> Vec<&'a VendorPermission> {
    let restriction = consent.restriction_kind(purpose);
    if restriction == RestrictionKind::NotAllowed {
        debug!(purpose, "publisher restriction vetoes purpose for all vendors");
        return Vec::new();
    }

    let mut allowed: Vec<&VendorPermission> =
        exempt.iter().map(|entry| &entry.permission).collect();

    for entry in subject {
        if is_allowed(purpose, consent, entry, restriction, enforce_vendor) {
            allowed.push(&entry.permission);
        } else {
            trace!(
                purpose,
                vendor_id = entry.permission.vendor_id,
                restriction = restriction.as_str(),
                "vendor denied for purpose"
            );
        }
    }

    allowed
}

/// The basis `vendor` is evaluated on for `purpose`, or `None` when the GVL
/// entry declares the purpose under neither basis.
fn effective_basis(
    purpose: PurposeId,
    capability: &VendorCapability,
    restriction: RestrictionKind,
) -> Option<Basis> {
    let declared = if capability.declares_consent(purpose) {
        Basis::Consent
    } else if capability.declares_li(purpose) {
        Basis::LegitimateInterest
    } else {
        return None;
    };

    // A publisher may only force the basis of purposes the vendor marked
    // flexible; otherwise the declaration stands.
    if capability.is_flexible(purpose) {
        match restriction {
            RestrictionKind::RequireConsent => return Some(Basis::Consent),
            RestrictionKind::RequireLegitimateInterest => return Some(Basis::LegitimateInterest),
            RestrictionKind::Undefined | RestrictionKind::NotAllowed => {}
        }
    }

    Some(declared)
}

fn is_allowed<S: IdSet>(
    purpose: PurposeId,
    consent: &ConsentRecord<S>,
    entry: &VendorEntry,
    restriction: RestrictionKind,
    enforce_vendor: bool,
) -> bool {
    let Some(basis) = effective_basis(purpose, &entry.capability, restriction) else {
        return false;
    };

    let vendor_id = entry.permission.vendor_id;
    match basis {
        Basis::Consent => {
            consent.purpose_consent().contains(purpose)
                && (!enforce_vendor || consent.vendor_consent().contains(vendor_id))
        }
        Basis::LegitimateInterest => {
            consent.purpose_li().contains(purpose)
                && (!enforce_vendor || consent.vendor_li().contains(vendor_id))
        }
    }
}
