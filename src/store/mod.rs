// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Access to the platform-shared widget store.
//!
//! The host application writes two kinds of keys into a platform-shared
//! key-value store (`SharedPreferences` on Android, a `UserDefaults` app
//! group on iOS): the serialized device list under [`DEVICES_KEY`], and one
//! binding key per configured widget instance. This crate never performs
//! the OS-level read itself — the store is an injected read-only
//! dependency, which keeps the render pipeline testable without a real
//! platform store.
//!
//! # Examples
//!
//! ```
//! use plugwidget_lib::store::{MemoryStore, WidgetInstanceId, WidgetStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert("devices", r#"[{"ip":"10.0.0.1","model":"P100","deviceOn":true}]"#);
//!
//! let instance = WidgetInstanceId::from(42);
//! store.insert(instance.binding_key(), "10.0.0.1");
//!
//! assert!(store.raw_devices().is_some());
//! assert_eq!(store.selected_ip(&instance).as_deref(), Some("10.0.0.1"));
//! ```

mod reader;

pub use reader::{parse, read_snapshot, try_parse};

use std::collections::HashMap;
use std::fmt;

/// Store key under which the host writes the serialized device list.
pub const DEVICES_KEY: &str = "devices";

/// Identifier of one placed home-screen widget.
///
/// The host framework assigns these (an integer on Android, an opaque
/// string on iOS); this crate only uses them to derive the binding key
/// under which the user's device selection is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetInstanceId(String);

impl WidgetInstanceId {
    /// Creates an instance id from a host-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The store key holding this widget's selected device, in the form
    /// `widget_<id>_ip`.
    #[must_use]
    pub fn binding_key(&self) -> String {
        format!("widget_{}_ip", self.0)
    }

    /// The raw host-assigned identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i32> for WidgetInstanceId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for WidgetInstanceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for WidgetInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of the platform-shared key-value store.
///
/// Implementations wrap whatever the host platform provides; renders only
/// ever read through `&self`, so concurrent renders for multiple widget
/// instances share no mutable state.
pub trait WidgetStore {
    /// Fetches the raw string stored under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// The serialized device list written by the host application.
    fn raw_devices(&self) -> Option<String> {
        self.get(DEVICES_KEY)
    }

    /// The device identifier bound to a widget instance, if the user has
    /// configured one.
    fn selected_ip(&self, instance: &WidgetInstanceId) -> Option<String> {
        self.get(&instance.binding_key())
    }
}

/// In-memory [`WidgetStore`] for hosts without a platform store and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a key, mirroring what the host does when a widget instance
    /// is deleted.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl WidgetStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
