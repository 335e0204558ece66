// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Toggle action construction.
//!
//! Tapping a widget must reach the host application's background-action
//! handler, which performs the actual device communication and then
//! refreshes the affected widgets. This module only builds the
//! custom-scheme URI addressing that request; it never talks to a device
//! and never waits for, retries, or interprets the toggle's outcome.

use std::fmt;

/// URI scheme the stock build variant registers for toggle dispatch.
pub const DEFAULT_SCHEME: &str = "tapotoggle";

/// An addressable toggle request for one device.
///
/// Rendered as `scheme://toggle?ip=<identifier>`. The identifier is
/// percent-encoded; a plain IP literal round-trips unchanged.
///
/// # Examples
///
/// ```
/// use plugwidget_lib::ToggleTarget;
///
/// let target = ToggleTarget::for_device("192.168.1.10");
/// assert_eq!(target.uri(), "tapotoggle://toggle?ip=192.168.1.10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleTarget {
    scheme: String,
    ip: String,
}

impl ToggleTarget {
    /// Creates a toggle target under a custom scheme.
    ///
    /// Rebranded build variants register their own scheme with the host
    /// OS and pass it here.
    #[must_use]
    pub fn new(scheme: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            ip: ip.into(),
        }
    }

    /// Creates a toggle target under [`DEFAULT_SCHEME`].
    #[must_use]
    pub fn for_device(ip: impl Into<String>) -> Self {
        Self::new(DEFAULT_SCHEME, ip)
    }

    /// The addressed device's network identifier.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// The URI scheme this target dispatches under.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Renders the dispatchable URI.
    #[must_use]
    pub fn uri(&self) -> String {
        format!(
            "{}://toggle?ip={}",
            self.scheme,
            urlencoding::encode(&self.ip)
        )
    }
}

impl fmt::Display for ToggleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}
