// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display status classification and the status color palette.

use std::fmt;

use crate::device::Device;

/// Display status of one device on a widget.
///
/// Derived per render, never persisted. Offline dominates: an unreachable
/// device cannot reliably report its switch state, so its power flag is
/// ignored.
///
/// # Examples
///
/// ```
/// use plugwidget_lib::Status;
///
/// assert_eq!(Status::classify(true, true), Status::On);
/// assert_eq!(Status::classify(true, false), Status::Off);
/// assert_eq!(Status::classify(false, true), Status::Offline);
/// assert_eq!(Status::classify(false, false), Status::Offline);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Device is reachable and switched on.
    On,
    /// Device is reachable and switched off.
    Off,
    /// Device was unreachable at last sync.
    Offline,
}

impl Status {
    /// Classifies a device's display status from its two state flags.
    #[must_use]
    pub const fn classify(is_online: bool, is_powered_on: bool) -> Self {
        if !is_online {
            Self::Offline
        } else if is_powered_on {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Returns the lowercase status name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Offline => "offline",
        }
    }
}

impl From<&Device> for Status {
    fn from(device: &Device) -> Self {
        Self::classify(device.is_online(), device.is_powered_on())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A packed ARGB color, one byte per channel.
///
/// Hosts unpack it into whatever their view layer wants: Android consumes
/// the packed value directly, iOS divides the channels by 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(u32);

impl Argb {
    /// Creates a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// The packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn packed(&self) -> u32 {
        self.0
    }

    /// Alpha channel (0-255).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel (0-255).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel (0-255).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel (0-255).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Maps display statuses to indicator colors.
///
/// The defaults are the colors both platform widgets shipped with; build
/// variants that rebrand inject their own palette.
///
/// # Examples
///
/// ```
/// use plugwidget_lib::{Status, StatusPalette};
///
/// let palette = StatusPalette::default();
/// assert_eq!(palette.color(Status::Offline), StatusPalette::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    on: Argb,
    off: Argb,
    offline: Argb,
}

impl StatusPalette {
    /// Default on color (deep purple).
    pub const DEEP_PURPLE: Argb = Argb::new(0xFF67_3AB7);
    /// Default off color (grey).
    pub const GREY: Argb = Argb::new(0xFF9E_9E9E);
    /// Default offline color (red).
    pub const RED: Argb = Argb::new(0xFFD3_2F2F);

    /// Creates a palette with custom colors.
    #[must_use]
    pub const fn new(on: Argb, off: Argb, offline: Argb) -> Self {
        Self { on, off, offline }
    }

    /// The indicator color for a status.
    #[must_use]
    pub const fn color(&self, status: Status) -> Argb {
        match status {
            Status::On => self.on,
            Status::Off => self.off,
            Status::Offline => self.offline,
        }
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self::new(Self::DEEP_PURPLE, Self::GREY, Self::RED)
    }
}
