// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records and snapshots.
//!
//! A [`Device`] is one smart plug as known to the host application at the
//! time of its last sync. A [`DeviceSnapshot`] is the ordered list of all
//! such records, read fresh on every widget render and treated as an
//! immutable value for the duration of that render.

use std::fmt;

use serde::Deserialize;

/// One smart plug known to the host application.
///
/// The wire format is a JSON object with fields `ip`, `model`, `deviceOn`
/// and an optional `isOnline`:
///
/// ```
/// use plugwidget_lib::Device;
///
/// let json = r#"{"ip":"192.168.1.10","model":"P110","deviceOn":true}"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.ip(), "192.168.1.10");
/// assert!(device.is_online()); // absent isOnline defaults to true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    /// Network address; the stable key for widget-to-device binding.
    ip: String,
    /// Human-readable model/label.
    model: String,
    /// Last known switch state.
    #[serde(rename = "deviceOn")]
    device_on: bool,
    /// Reachability at last sync. Older snapshots lack this field, and a
    /// device that never reported otherwise is assumed reachable.
    #[serde(rename = "isOnline", default = "default_online")]
    is_online: bool,
}

const fn default_online() -> bool {
    true
}

impl Device {
    /// Creates a device record.
    #[must_use]
    pub fn new(
        ip: impl Into<String>,
        model: impl Into<String>,
        device_on: bool,
        is_online: bool,
    ) -> Self {
        Self {
            ip: ip.into(),
            model: model.into(),
            device_on,
            is_online,
        }
    }

    /// The device's network identifier.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// The human-readable model name shown on the widget.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Last known switch state.
    #[must_use]
    pub const fn is_powered_on(&self) -> bool {
        self.device_on
    }

    /// Whether the device was reachable at last sync.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.is_online
    }
}

/// An ordered list of device records read at one point in time.
///
/// Insertion order is preserved and is display order for list widgets.
/// The snapshot is replaced wholesale by the host application between
/// renders; this crate never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSnapshot {
    devices: Vec<Device>,
}

impl DeviceSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// The records in snapshot order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// The first record, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Device> {
        self.devices.first()
    }

    /// Finds a record by its network identifier.
    ///
    /// `ip` values are unique within one snapshot; should duplicates occur
    /// anyway, the first match wins.
    #[must_use]
    pub fn find(&self, ip: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.ip() == ip)
    }

    /// Items for the host's device-selection UI, in snapshot order.
    #[must_use]
    pub fn picker_items(&self) -> Vec<PickerItem> {
        self.devices.iter().map(PickerItem::from).collect()
    }

    /// Iterates over the records in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }
}

impl From<Vec<Device>> for DeviceSnapshot {
    fn from(devices: Vec<Device>) -> Self {
        Self { devices }
    }
}

impl<'a> IntoIterator for &'a DeviceSnapshot {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

/// One entry in the host's device-selection UI.
///
/// The id is the device's network identifier (the same value later stored
/// in the widget binding); the title combines model and address so users
/// can tell identical models apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    /// Selection id, equal to the device `ip`.
    pub id: String,
    /// Display title, `"<model> (<ip>)"`.
    pub title: String,
}

impl From<&Device> for PickerItem {
    fn from(device: &Device) -> Self {
        Self {
            id: device.ip().to_string(),
            title: format!("{} ({})", device.model(), device.ip()),
        }
    }
}

impl fmt::Display for PickerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
