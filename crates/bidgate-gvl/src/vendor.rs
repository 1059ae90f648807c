use bidgate_consent::{PurposeId, VendorId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// GVL loading and validation errors.
#[derive(Debug, Error)]
pub enum GvlError {
    #[error(
        "vendor {vendor_id}: flexible purpose {purpose} is declared under neither \
         consent nor legitimate interest"
    )]
    FlexibleNotDeclared {
        vendor_id: VendorId,
        purpose: PurposeId,
    },

    #[error(
        "vendor {vendor_id}: purpose {purpose} declared under both consent and \
         legitimate interest but not flexible"
    )]
    OverlapNotFlexible {
        vendor_id: VendorId,
        purpose: PurposeId,
    },

    #[error("snapshot entry keyed {key} declares vendor id {declared}")]
    KeyMismatch { key: VendorId, declared: VendorId },

    #[error("failed to parse GVL snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One vendor's GVL declaration.
///
/// Field names follow the published GVL JSON schema, so a snapshot entry
/// deserializes directly into this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCapability {
    #[serde(rename = "id")]
    pub vendor_id: VendorId,

    /// Purposes processed under consent basis.
    #[serde(rename = "purposes", default)]
    pub consent_purposes: BTreeSet<PurposeId>,

    /// Purposes processed under legitimate-interest basis.
    #[serde(rename = "legIntPurposes", default)]
    pub li_purposes: BTreeSet<PurposeId>,

    /// Purposes whose basis a publisher restriction may override.
    #[serde(default)]
    pub flexible_purposes: BTreeSet<PurposeId>,
}

impl VendorCapability {
    /// Capability for a vendor absent from the GVL: all sets empty.
    ///
    /// The registry hands this out instead of an `Option` so the engine has
    /// a uniform shape to evaluate (an unknown vendor simply has no basis
    /// for any purpose).
    pub fn empty(vendor_id: VendorId) -> Self {
        Self {
            vendor_id,
            ..Self::default()
        }
    }

    pub fn declares_consent(&self, purpose: PurposeId) -> bool {
        self.consent_purposes.contains(&purpose)
    }

    pub fn declares_li(&self, purpose: PurposeId) -> bool {
        self.li_purposes.contains(&purpose)
    }

    pub fn is_flexible(&self, purpose: PurposeId) -> bool {
        self.flexible_purposes.contains(&purpose)
    }

    /// Validate the declared-set invariants.
    ///
    /// Flexible purposes must be a subset of the union of the two basis
    /// sets, and the basis sets may only overlap inside the flexible set.
    pub fn validate(&self) -> Result<(), GvlError> {
        for &purpose in &self.flexible_purposes {
            if !self.declares_consent(purpose) && !self.declares_li(purpose) {
                return Err(GvlError::FlexibleNotDeclared {
                    vendor_id: self.vendor_id,
                    purpose,
                });
            }
        }
        for &purpose in self.consent_purposes.intersection(&self.li_purposes) {
            if !self.is_flexible(purpose) {
                return Err(GvlError::OverlapNotFlexible {
                    vendor_id: self.vendor_id,
                    purpose,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capability(
        consent: &[PurposeId],
        li: &[PurposeId],
        flexible: &[PurposeId],
    ) -> VendorCapability {
        VendorCapability {
            vendor_id: 42,
            consent_purposes: consent.iter().copied().collect(),
            li_purposes: li.iter().copied().collect(),
            flexible_purposes: flexible.iter().copied().collect(),
        }
    }

    #[test]
    fn test_empty_declares_nothing() {
        let cap = VendorCapability::empty(7);
        assert_eq!(cap.vendor_id, 7);
        assert!(!cap.declares_consent(1));
        assert!(!cap.declares_li(1));
        assert!(!cap.is_flexible(1));
        assert!(cap.validate().is_ok());
    }

    #[test]
    fn test_flexible_subset_holds() {
        let cap = capability(&[1, 2], &[3], &[2, 3]);
        assert!(cap.validate().is_ok());
    }

    #[test]
    fn test_flexible_outside_basis_sets_rejected() {
        let cap = capability(&[1], &[2], &[4]);
        assert!(matches!(
            cap.validate(),
            Err(GvlError::FlexibleNotDeclared {
                vendor_id: 42,
                purpose: 4
            })
        ));
    }

    #[test]
    fn test_basis_overlap_outside_flexible_rejected() {
        let cap = capability(&[1, 2], &[2], &[]);
        assert!(matches!(
            cap.validate(),
            Err(GvlError::OverlapNotFlexible {
                vendor_id: 42,
                purpose: 2
            })
        ));
    }

    #[test]
    fn test_snapshot_entry_field_names() {
        let cap: VendorCapability = serde_json::from_str(
            r#"{"id": 8, "purposes": [1, 3], "legIntPurposes": [2], "flexiblePurposes": [2]}"#,
        )
        .unwrap();
        assert_eq!(cap.vendor_id, 8);
        assert!(cap.declares_consent(1));
        assert!(cap.declares_consent(3));
        assert!(cap.declares_li(2));
        assert!(cap.is_flexible(2));
    }

    #[test]
    fn test_snapshot_entry_missing_sets_default_empty() {
        let cap: VendorCapability = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(cap, VendorCapability::empty(9));
    }
}
