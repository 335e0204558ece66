// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection of the device a widget instance displays.
//!
//! Single-device widgets store the selected device's network identifier in
//! their binding; list widgets skip resolution entirely and show every
//! record in snapshot order.

use crate::device::{Device, DeviceSnapshot};

/// Picks the device a single-device widget should display.
///
/// A configured selection that matches a record wins. When the selection
/// is unset or no longer matches anything (the device was removed since
/// the widget was configured), a non-empty snapshot falls back to its
/// first record rather than erroring; only an empty snapshot yields
/// `None`.
///
/// # Examples
///
/// ```
/// use plugwidget_lib::{Device, DeviceSnapshot, resolver};
///
/// let snapshot = DeviceSnapshot::from(vec![
///     Device::new("10.0.0.1", "P100", false, true),
///     Device::new("10.0.0.5", "P110", true, true),
/// ]);
///
/// assert_eq!(resolver::resolve(&snapshot, Some("10.0.0.5")).unwrap().ip(), "10.0.0.5");
/// assert_eq!(resolver::resolve(&snapshot, None).unwrap().ip(), "10.0.0.1");
/// assert!(resolver::resolve(&DeviceSnapshot::empty(), None).is_none());
/// ```
#[must_use]
pub fn resolve<'a>(snapshot: &'a DeviceSnapshot, selected_ip: Option<&str>) -> Option<&'a Device> {
    if let Some(ip) = selected_ip {
        if let Some(device) = snapshot.find(ip) {
            return Some(device);
        }
        // TODO: a stale binding silently shows the first device; consider
        // an explicit "device not found" state instead.
        tracing::debug!(ip, "Selected device not in snapshot, falling back to first record");
    }
    snapshot.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DeviceSnapshot {
        DeviceSnapshot::from(vec![
            Device::new("10.0.0.1", "P100", false, true),
            Device::new("10.0.0.5", "P110", true, true),
            Device::new("10.0.0.9", "P115", true, false),
        ])
    }

    #[test]
    fn configured_selection_wins() {
        let snapshot = snapshot();
        let device = resolve(&snapshot, Some("10.0.0.5")).unwrap();
        assert_eq!(device.ip(), "10.0.0.5");
        assert_eq!(device.model(), "P110");
    }

    #[test]
    fn unset_selection_falls_back_to_first() {
        let snapshot = snapshot();
        assert_eq!(resolve(&snapshot, None).unwrap().ip(), "10.0.0.1");
    }

    #[test]
    fn stale_selection_falls_back_to_first() {
        let snapshot = snapshot();
        assert_eq!(resolve(&snapshot, Some("192.168.0.1")).unwrap().ip(), "10.0.0.1");
    }

    #[test]
    fn empty_snapshot_resolves_to_none() {
        let empty = DeviceSnapshot::empty();
        assert!(resolve(&empty, None).is_none());
        assert!(resolve(&empty, Some("10.0.0.1")).is_none());
    }
}
