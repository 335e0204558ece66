// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `PlugWidget` Lib - the shared core of smart-plug home-screen widgets.
//!
//! Home-screen widgets (Android `AppWidget`, iOS `WidgetKit`) mirror the
//! on/off/online state of a set of smart plugs and toggle a device on tap.
//! The platform halves of that are host-framework glue; this library is
//! the logic both platforms otherwise reimplement:
//!
//! - **Device list decoding**: turn the serialized blob the host app
//!   stores into an ordered [`DeviceSnapshot`], silently dropping
//!   anything undecodable
//! - **Target resolution**: pick the device a configured widget instance
//!   should display
//! - **Status classification**: map (online, powered-on) to a display
//!   [`Status`] and an indicator color
//! - **Toggle actions**: build the custom-scheme URI a tap dispatches to
//!   the host's background handler
//!
//! The whole pipeline is synchronous, stateless, and network-free; the
//! host owns storage, refresh scheduling, and the actual device
//! communication.
//!
//! # Quick Start
//!
//! ```
//! use plugwidget_lib::store::{MemoryStore, WidgetInstanceId};
//! use plugwidget_lib::widget::{self, Branding};
//! use plugwidget_lib::{Status, StatusPalette};
//!
//! // The host app keeps the device list in a platform-shared store.
//! let mut store = MemoryStore::new();
//! store.insert(
//!     "devices",
//!     r#"[{"ip":"192.168.1.2","model":"P100","deviceOn":false,"isOnline":false}]"#,
//! );
//!
//! let instance = WidgetInstanceId::from(1);
//! let state = widget::single_state(&store, &instance, &Branding::default());
//!
//! assert_eq!(state.status(), Some(Status::Offline));
//! let color = StatusPalette::default().color(state.status().unwrap());
//! assert_eq!(color, StatusPalette::RED);
//! ```

pub mod action;
pub mod device;
pub mod error;
pub mod resolver;
pub mod status;
pub mod store;
pub mod widget;

pub use action::{DEFAULT_SCHEME, ToggleTarget};
pub use device::{Device, DeviceSnapshot, PickerItem};
pub use error::{Error, ParseError, Result};
pub use status::{Argb, Status, StatusPalette};
pub use store::{MemoryStore, WidgetInstanceId, WidgetStore};
pub use widget::{Branding, DisplayState, RenderSurface};
