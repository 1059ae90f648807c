//! Basic purpose enforcement: consent signals only.
//!
//! GVL declarations and publisher restrictions are not consulted, so no veto
//! path exists and exempt entries always pass. A subject vendor is allowed
//! on either signal pair: purpose consent (plus vendor consent when
//! enforced) or purpose legitimate interest (plus vendor legitimate
//! interest when enforced).

use crate::permission::{VendorEntry, VendorPermission};
use bidgate_consent::{ConsentRecord, IdSet, PurposeId, VendorId};

pub(super) fn allowed_vendors<'a, S: IdSet>(
    purpose: PurposeId,
    consent: &ConsentRecord<S>,
    subject: &'a [VendorEntry],
    exempt: &'a [VendorEntry],
    enforce_vendor: bool,
) -> Vec<&'a VendorPermission> {
    let mut allowed: Vec<&VendorPermission> =
        exempt.iter().map(|entry| &entry.permission).collect();

    for entry in subject {
        if is_allowed(purpose, consent, entry.permission.vendor_id, enforce_vendor) {
            allowed.push(&entry.permission);
        }
    }

    allowed
}

fn is_allowed<S: IdSet>(
    purpose: PurposeId,
    consent: &ConsentRecord<S>,
    vendor_id: VendorId,
    enforce_vendor: bool,
) -> bool {
    if consent.purpose_consent().contains(purpose)
        && (!enforce_vendor || consent.vendor_consent().contains(vendor_id))
    {
        return true;
    }

    consent.purpose_li().contains(purpose)
        && (!enforce_vendor || consent.vendor_li().contains(vendor_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PrivacyEnforcementAction;
    use bidgate_consent::BitSet;
    use bidgate_gvl::VendorCapability;

    fn entry(vendor_id: VendorId) -> VendorEntry {
        VendorEntry::new(
            VendorPermission::new(vendor_id, None, PrivacyEnforcementAction::restrict_all()),
            VendorCapability::empty(vendor_id),
        )
    }

    fn consent(
        purpose_consent: &[u16],
        purpose_li: &[u16],
        vendor_consent: &[u16],
        vendor_li: &[u16],
    ) -> ConsentRecord {
        ConsentRecord::new(
            BitSet::from_ids(purpose_consent.iter().copied()),
            BitSet::from_ids(purpose_li.iter().copied()),
            BitSet::from_ids(vendor_consent.iter().copied()),
            BitSet::from_ids(vendor_li.iter().copied()),
            Vec::new(),
        )
    }

    #[test]
    fn test_purpose_consent_suffices_without_vendor_enforcement() {
        let consent = consent(&[1], &[], &[], &[]);
        let subject = [entry(1)];
        let allowed = allowed_vendors(1, &consent, &subject, &[], false);
        assert_eq!(allowed.len(), 1);
        assert_eq!(allowed[0].vendor_id, 1);
    }

    #[test]
    fn test_vendor_bit_required_when_enforced() {
        let without_vendor_bit = consent(&[1], &[], &[], &[]);
        let subject = [entry(1)];
        assert!(allowed_vendors(1, &without_vendor_bit, &subject, &[], true).is_empty());

        let with_vendor_bit = consent(&[1], &[], &[1], &[]);
        assert_eq!(allowed_vendors(1, &with_vendor_bit, &subject, &[], true).len(), 1);
    }

    #[test]
    fn test_li_pair_allows_without_consent_pair() {
        let consent = consent(&[], &[1], &[], &[1]);
        let subject = [entry(1)];
        assert_eq!(allowed_vendors(1, &consent, &subject, &[], true).len(), 1);
    }

    #[test]
    fn test_signal_pairs_do_not_mix() {
        // Purpose bit from the consent channel, vendor bit from the LI
        // channel: neither pair is complete.
        let consent = consent(&[1], &[], &[], &[1]);
        let subject = [entry(1)];
        assert!(allowed_vendors(1, &consent, &subject, &[], true).is_empty());
    }

    #[test]
    fn test_exempt_pass_through() {
        let consent = consent(&[], &[], &[], &[]);
        let exempt = [entry(2)];
        let allowed = allowed_vendors(1, &consent, &[], &exempt, true);
        assert_eq!(allowed.len(), 1);
        assert_eq!(allowed[0].vendor_id, 2);
    }
}
