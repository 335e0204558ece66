// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The widget render pipeline.
//!
//! A render is a single synchronous pass over two inputs, the device
//! snapshot and the widget's binding: read the raw blob, decode it,
//! resolve the bound device, classify its status, and attach the toggle
//! target. Nothing is cached and nothing persists between renders; the
//! host re-runs the pipeline on every refresh or configuration change.
//!
//! # Examples
//!
//! ```
//! use plugwidget_lib::store::{MemoryStore, WidgetInstanceId};
//! use plugwidget_lib::widget::{self, Branding, DisplayState};
//! use plugwidget_lib::Status;
//!
//! let mut store = MemoryStore::new();
//! store.insert(
//!     "devices",
//!     r#"[{"ip":"192.168.1.2","model":"P100","deviceOn":true}]"#,
//! );
//!
//! let instance = WidgetInstanceId::from(1);
//! let state = widget::single_state(&store, &instance, &Branding::default());
//!
//! match state {
//!     DisplayState::Plug { label, status, toggle } => {
//!         assert_eq!(label, "P100");
//!         assert_eq!(status, Status::On);
//!         assert_eq!(toggle.uri(), "tapotoggle://toggle?ip=192.168.1.2");
//!     }
//!     DisplayState::NoDevice => unreachable!(),
//! }
//! ```

use crate::action::{DEFAULT_SCHEME, ToggleTarget};
use crate::device::Device;
use crate::resolver::resolve;
use crate::status::Status;
use crate::store::{WidgetInstanceId, WidgetStore, read_snapshot};

/// Per-build-variant identity injected into the pipeline.
///
/// The original app shipped the same widget logic twice under different
/// package identifiers; the forks differed only in branding, which lives
/// here instead of in a second code path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    scheme: String,
    no_device_label: String,
}

impl Branding {
    /// Creates a branding with a custom toggle scheme and placeholder
    /// label.
    #[must_use]
    pub fn new(scheme: impl Into<String>, no_device_label: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            no_device_label: no_device_label.into(),
        }
    }

    /// The URI scheme toggle targets dispatch under.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Placeholder label shown when no device resolves.
    #[must_use]
    pub fn no_device_label(&self) -> &str {
        &self.no_device_label
    }

    /// Builds a toggle target under this branding's scheme.
    #[must_use]
    pub fn toggle_target(&self, ip: impl Into<String>) -> ToggleTarget {
        ToggleTarget::new(&self.scheme, ip)
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME, "No device")
    }
}

/// What one widget (or one list row) displays.
///
/// Derived per render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// A resolved device.
    Plug {
        /// The device's model name.
        label: String,
        /// Classified display status.
        status: Status,
        /// Tap target addressing this device.
        toggle: ToggleTarget,
    },
    /// Resolution failed; the host renders its placeholder.
    NoDevice,
}

impl DisplayState {
    /// Builds the display state for one resolved device.
    #[must_use]
    pub fn for_device(device: &Device, branding: &Branding) -> Self {
        Self::Plug {
            label: device.model().to_string(),
            status: Status::from(device),
            toggle: branding.toggle_target(device.ip()),
        }
    }

    /// The label to show, falling back to the branding placeholder.
    #[must_use]
    pub fn label<'a>(&'a self, branding: &'a Branding) -> &'a str {
        match self {
            Self::Plug { label, .. } => label,
            Self::NoDevice => branding.no_device_label(),
        }
    }

    /// The classified status, if a device resolved.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        match self {
            Self::Plug { status, .. } => Some(*status),
            Self::NoDevice => None,
        }
    }

    /// The toggle target, if a device resolved.
    #[must_use]
    pub const fn toggle(&self) -> Option<&ToggleTarget> {
        match self {
            Self::Plug { toggle, .. } => Some(toggle),
            Self::NoDevice => None,
        }
    }
}

/// Computes the display state for a single-device widget instance.
///
/// Reads the snapshot and the instance's stored binding from `store`,
/// then resolves, classifies, and attaches the toggle target in one pass.
#[must_use]
pub fn single_state(
    store: &impl WidgetStore,
    instance: &WidgetInstanceId,
    branding: &Branding,
) -> DisplayState {
    let snapshot = read_snapshot(store);
    let selected = store.selected_ip(instance);

    match resolve(&snapshot, selected.as_deref()) {
        Some(device) => DisplayState::for_device(device, branding),
        None => {
            tracing::debug!(instance = %instance, "No device resolved for widget");
            DisplayState::NoDevice
        }
    }
}

/// Computes display states for every device, in snapshot order.
///
/// List widgets perform no resolution; each record gets its own row,
/// classified and addressed independently.
#[must_use]
pub fn list_states(store: &impl WidgetStore, branding: &Branding) -> Vec<DisplayState> {
    read_snapshot(store)
        .iter()
        .map(|device| DisplayState::for_device(device, branding))
        .collect()
}

/// Host-side rendering seam.
///
/// Platform view-binding APIs (remote view trees on Android, declarative
/// view builders on iOS) stay behind this trait; the core hands over a
/// [`DisplayState`] and receives whatever opaque view handle the host
/// framework works with.
pub trait RenderSurface {
    /// The host framework's view handle.
    type View;

    /// Renders one display state into a host view.
    fn render(&self, state: &DisplayState) -> Self::View;
}

/// Runs the single-device pipeline and renders the result.
pub fn render_single<S: RenderSurface>(
    surface: &S,
    store: &impl WidgetStore,
    instance: &WidgetInstanceId,
    branding: &Branding,
) -> S::View {
    surface.render(&single_state(store, instance, branding))
}

/// Runs the list pipeline and renders one view per row.
pub fn render_list<S: RenderSurface>(
    surface: &S,
    store: &impl WidgetStore,
    branding: &Branding,
) -> Vec<S::View> {
    list_states(store, branding)
        .iter()
        .map(|state| surface.render(state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DEVICES_KEY, MemoryStore};

    fn store_with(blob: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(DEVICES_KEY, blob);
        store
    }

    #[test]
    fn single_state_uses_binding() {
        let mut store = store_with(
            r#"[
                {"ip":"10.0.0.1","model":"P100","deviceOn":false},
                {"ip":"10.0.0.2","model":"P110","deviceOn":true}
            ]"#,
        );
        let instance = WidgetInstanceId::from(7);
        store.insert(instance.binding_key(), "10.0.0.2");

        let state = single_state(&store, &instance, &Branding::default());
        assert_eq!(state.label(&Branding::default()), "P110");
        assert_eq!(state.status(), Some(Status::On));
        assert_eq!(
            state.toggle().unwrap().uri(),
            "tapotoggle://toggle?ip=10.0.0.2"
        );
    }

    #[test]
    fn single_state_without_binding_shows_first_device() {
        let store = store_with(r#"[{"ip":"10.0.0.1","model":"P100","deviceOn":true}]"#);
        let instance = WidgetInstanceId::from(1);

        let state = single_state(&store, &instance, &Branding::default());
        assert_eq!(state.status(), Some(Status::On));
        assert_eq!(state.toggle().unwrap().ip(), "10.0.0.1");
    }

    #[test]
    fn single_state_with_empty_store_is_no_device() {
        let store = MemoryStore::new();
        let instance = WidgetInstanceId::from(1);
        let branding = Branding::default();

        let state = single_state(&store, &instance, &branding);
        assert_eq!(state, DisplayState::NoDevice);
        assert_eq!(state.label(&branding), "No device");
        assert!(state.status().is_none());
        assert!(state.toggle().is_none());
    }

    #[test]
    fn list_states_preserve_snapshot_order() {
        let store = store_with(
            r#"[
                {"ip":"10.0.0.3","model":"C","deviceOn":true},
                {"ip":"10.0.0.1","model":"A","deviceOn":false},
                {"ip":"10.0.0.2","model":"B","deviceOn":true,"isOnline":false}
            ]"#,
        );
        let branding = Branding::default();

        let states = list_states(&store, &branding);
        let labels: Vec<&str> = states.iter().map(|s| s.label(&branding)).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
        assert_eq!(states[2].status(), Some(Status::Offline));
    }

    #[test]
    fn branding_controls_scheme_and_placeholder() {
        let branding = Branding::new("plugtoggle", "No plugs available");
        assert_eq!(
            branding.toggle_target("10.0.0.1").uri(),
            "plugtoggle://toggle?ip=10.0.0.1"
        );
        assert_eq!(DisplayState::NoDevice.label(&branding), "No plugs available");
    }

    struct LabelSurface;

    impl RenderSurface for LabelSurface {
        type View = String;

        fn render(&self, state: &DisplayState) -> String {
            state.label(&Branding::default()).to_string()
        }
    }

    #[test]
    fn render_through_surface() {
        let store = store_with(r#"[{"ip":"10.0.0.1","model":"P100","deviceOn":true}]"#);
        let instance = WidgetInstanceId::from(1);

        let view = render_single(&LabelSurface, &store, &instance, &Branding::default());
        assert_eq!(view, "P100");

        let views = render_list(&LabelSurface, &store, &Branding::default());
        assert_eq!(views, vec!["P100".to_string()]);
    }
}
