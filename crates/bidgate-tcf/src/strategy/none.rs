//! No enforcement: every entry is allowed.

use crate::permission::{VendorEntry, VendorPermission};

pub(super) fn allowed_vendors<'a>(
    subject: &'a [VendorEntry],
    exempt: &'a [VendorEntry],
) -> Vec<&'a VendorPermission> {
    subject
        .iter()
        .chain(exempt)
        .map(|entry| &entry.permission)
        .collect()
}
