// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `PlugWidget` library.
//!
//! The render pipeline itself never surfaces errors to the host — parse
//! failures are absorbed and the affected records dropped, per the widget
//! "ignore parse errors" policy. These types back the fallible
//! [`try_parse`](crate::store::try_parse) entry point and the debug
//! logging that names precisely what was dropped.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while decoding the device blob.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to decoding the serialized device list.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The raw blob is not a valid JSON array of device objects.
    #[error("malformed device blob: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A device record lacks a required field.
    #[error("missing field in device record: {0}")]
    MissingField(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
