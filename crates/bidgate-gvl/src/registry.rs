use crate::vendor::{GvlError, VendorCapability};
use bidgate_consent::VendorId;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// On-wire shape of a GVL snapshot, as published by the framework.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    vendor_list_version: u32,
    vendors: BTreeMap<VendorId, VendorCapability>,
}

/// In-memory Global Vendor List snapshot.
///
/// Lookups never fail: a vendor absent from the list resolves to
/// [`VendorCapability::empty`], so callers always receive a capability to
/// evaluate.
#[derive(Debug, Clone, Default)]
pub struct Gvl {
    version: u32,
    vendors: BTreeMap<VendorId, VendorCapability>,
}

impl Gvl {
    /// Build a registry from already-constructed capabilities, validating
    /// each entry's declared-set invariants.
    pub fn new(capabilities: impl IntoIterator<Item = VendorCapability>) -> Result<Self, GvlError> {
        let mut vendors = BTreeMap::new();
        for capability in capabilities {
            capability.validate()?;
            vendors.insert(capability.vendor_id, capability);
        }
        Ok(Self {
            version: 0,
            vendors,
        })
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, GvlError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        for (&key, capability) in &snapshot.vendors {
            if capability.vendor_id != key {
                return Err(GvlError::KeyMismatch {
                    key,
                    declared: capability.vendor_id,
                });
            }
            capability.validate()?;
        }
        Ok(Self {
            version: snapshot.vendor_list_version,
            vendors: snapshot.vendors,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Capability for `vendor_id`, defaulting to the all-empty capability
    /// for vendors not on the list.
    pub fn capability(&self, vendor_id: VendorId) -> Cow<'_, VendorCapability> {
        match self.vendors.get(&vendor_id) {
            Some(capability) => Cow::Borrowed(capability),
            None => Cow::Owned(VendorCapability::empty(vendor_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "vendorListVersion": 131,
        "vendors": {
            "1": {"id": 1, "purposes": [1], "legIntPurposes": [2], "flexiblePurposes": [2]},
            "9": {"id": 9, "purposes": [1, 3]}
        }
    }"#;

    #[test]
    fn test_snapshot_parses() {
        let gvl = Gvl::from_json(SNAPSHOT).unwrap();
        assert_eq!(gvl.version(), 131);
        assert_eq!(gvl.len(), 2);
        assert!(gvl.capability(1).declares_li(2));
        assert!(gvl.capability(9).declares_consent(3));
    }

    #[test]
    fn test_unknown_vendor_resolves_empty() {
        let gvl = Gvl::from_json(SNAPSHOT).unwrap();
        let cap = gvl.capability(777);
        assert_eq!(*cap, VendorCapability::empty(777));
    }

    #[test]
    fn test_key_mismatch_rejected() {
        let err = Gvl::from_json(r#"{"vendors": {"3": {"id": 4}}}"#).unwrap_err();
        assert!(matches!(
            err,
            GvlError::KeyMismatch {
                key: 3,
                declared: 4
            }
        ));
    }

    #[test]
    fn test_invalid_capability_rejected_at_load() {
        let err = Gvl::from_json(r#"{"vendors": {"5": {"id": 5, "flexiblePurposes": [1]}}}"#)
            .unwrap_err();
        assert!(matches!(err, GvlError::FlexibleNotDeclared { .. }));
    }

    #[test]
    fn test_new_validates_entries() {
        let bad = VendorCapability {
            vendor_id: 2,
            flexible_purposes: [1].into_iter().collect(),
            ..VendorCapability::default()
        };
        assert!(Gvl::new([bad]).is_err());
        assert!(Gvl::new([VendorCapability::empty(2)]).is_ok());
    }
}
