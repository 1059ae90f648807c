use bidgate_consent::VendorId;
use bidgate_gvl::VendorCapability;

/// Per-vendor enforcement state carried through the auction.
///
/// The aggregator starts every vendor at [`restrict_all`] and relaxes
/// individual flags as per-purpose results come back. The purpose strategies
/// never read or write these fields; they only pass the containing
/// permission through by vendor identity.
///
/// [`restrict_all`]: Self::restrict_all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivacyEnforcementAction {
    pub remove_user_ids: bool,
    pub mask_geo: bool,
    pub mask_device_ip: bool,
    pub mask_device_info: bool,
    pub block_analytics_report: bool,
    pub block_bidder_request: bool,
    pub block_pixel_sync: bool,
}

impl PrivacyEnforcementAction {
    /// Block everything: the starting state for every vendor.
    pub fn restrict_all() -> Self {
        Self {
            remove_user_ids: true,
            mask_geo: true,
            mask_device_ip: true,
            mask_device_info: true,
            block_analytics_report: true,
            block_bidder_request: true,
            block_pixel_sync: true,
        }
    }

    /// Block nothing.
    pub fn allow_all() -> Self {
        Self::default()
    }
}

/// A vendor's identity plus its carried-forward enforcement state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorPermission {
    pub vendor_id: VendorId,
    /// Bidder name the auction pipeline resolved this vendor from, if any.
    pub bidder: Option<String>,
    pub action: PrivacyEnforcementAction,
}

impl VendorPermission {
    pub fn new(vendor_id: VendorId, bidder: Option<String>, action: PrivacyEnforcementAction) -> Self {
        Self {
            vendor_id,
            bidder,
            action,
        }
    }
}

/// A permission paired with the vendor's GVL declaration, built once per
/// auction per vendor by the caller and read-only to the strategies.
#[derive(Debug, Clone)]
pub struct VendorEntry {
    pub permission: VendorPermission,
    pub capability: VendorCapability,
}

impl VendorEntry {
    pub fn new(permission: VendorPermission, capability: VendorCapability) -> Self {
        Self {
            permission,
            capability,
        }
    }
}
