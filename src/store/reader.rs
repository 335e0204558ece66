// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of the serialized device list.
//!
//! Widgets render whatever survives decoding: a malformed blob yields an
//! empty snapshot, a record missing a required field is dropped on its
//! own, and no failure ever escapes to the caller. Dropped input is noted
//! at debug level so host logs can still explain an unexpectedly empty
//! widget. Hosts that want to validate a blob before storing it use
//! [`try_parse`], which surfaces the malformed-blob case instead of
//! absorbing it.

use serde_json::Value;

use crate::device::{Device, DeviceSnapshot};
use crate::error::{ParseError, Result};

use super::WidgetStore;

/// Decodes the raw `devices` blob into a snapshot.
///
/// Never fails: `None`, empty, or malformed input yields an empty
/// snapshot, and undecodable records are skipped while the rest are kept.
/// Parsing the same input twice yields element-wise equal snapshots.
///
/// # Examples
///
/// ```
/// use plugwidget_lib::store;
///
/// let blob = r#"[
///     {"ip":"10.0.0.1","model":"P110","deviceOn":true},
///     {"model":"missing ip"}
/// ]"#;
///
/// let snapshot = store::parse(Some(blob));
/// assert_eq!(snapshot.len(), 1);
/// assert!(store::parse(Some("not json")).is_empty());
/// assert!(store::parse(None).is_empty());
/// ```
#[must_use]
pub fn parse(raw: Option<&str>) -> DeviceSnapshot {
    let Some(raw) = raw else {
        return DeviceSnapshot::empty();
    };

    try_parse(raw).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Ignoring malformed device blob");
        DeviceSnapshot::empty()
    })
}

/// Decodes the raw `devices` blob, surfacing a malformed top-level
/// structure instead of absorbing it.
///
/// Undecodable records within a well-formed array are still dropped
/// individually, matching what widgets render. [`parse`] wraps this for
/// the widget pipeline; hosts use it directly to validate a blob before
/// writing it to the shared store.
///
/// # Errors
///
/// Returns [`ParseError::MalformedInput`] wrapped in [`Error`](crate::Error)
/// when the blob is not a valid JSON array.
pub fn try_parse(raw: &str) -> Result<DeviceSnapshot> {
    let values: Vec<Value> = serde_json::from_str(raw).map_err(ParseError::MalformedInput)?;

    let devices: Vec<Device> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match decode_record(value) {
            Ok(device) => Some(device),
            Err(err) => {
                tracing::debug!(index, error = %err, "Dropping undecodable device record");
                None
            }
        })
        .collect();

    Ok(DeviceSnapshot::from(devices))
}

/// Reads and decodes the snapshot from an injected store.
#[must_use]
pub fn read_snapshot(store: &impl WidgetStore) -> DeviceSnapshot {
    parse(store.raw_devices().as_deref())
}

/// Decodes one array element, naming the missing field when that is what
/// went wrong.
fn decode_record(value: Value) -> std::result::Result<Device, ParseError> {
    if let Some(object) = value.as_object() {
        for field in ["ip", "model", "deviceOn"] {
            if !object.contains_key(field) {
                return Err(ParseError::MissingField(field.to_string()));
            }
        }
    }
    serde_json::from_value(value).map_err(ParseError::MalformedInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::{DEVICES_KEY, MemoryStore};

    #[test]
    fn parse_none_yields_empty_snapshot() {
        assert!(parse(None).is_empty());
    }

    #[test]
    fn parse_empty_string_yields_empty_snapshot() {
        assert!(parse(Some("")).is_empty());
    }

    #[test]
    fn parse_garbage_yields_empty_snapshot() {
        assert!(parse(Some("not json")).is_empty());
        assert!(parse(Some("{\"ip\":\"10.0.0.1\"}")).is_empty()); // object, not array
        assert!(parse(Some("[1, 2, 3")).is_empty());
    }

    #[test]
    fn parse_valid_blob() {
        let blob = r#"[
            {"ip":"10.0.0.1","model":"P100","deviceOn":true},
            {"ip":"10.0.0.2","model":"P110","deviceOn":false,"isOnline":false}
        ]"#;

        let snapshot = parse(Some(blob));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.devices()[0].ip(), "10.0.0.1");
        assert!(snapshot.devices()[0].is_online());
        assert!(!snapshot.devices()[1].is_online());
    }

    #[test]
    fn record_missing_required_field_is_dropped_alone() {
        let blob = r#"[
            {"ip":"1.1.1.1","model":"P110","deviceOn":true},
            {"model":"bad"}
        ]"#;

        let snapshot = parse(Some(blob));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.devices()[0].ip(), "1.1.1.1");
    }

    #[test]
    fn non_object_elements_are_dropped() {
        let blob = r#"[42, {"ip":"1.1.1.1","model":"P100","deviceOn":false}, "text"]"#;
        let snapshot = parse(Some(blob));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn parse_is_idempotent() {
        let blob = r#"[
            {"ip":"10.0.0.1","model":"P100","deviceOn":true},
            {"model":"bad"},
            {"ip":"10.0.0.2","model":"P110","deviceOn":false}
        ]"#;

        assert_eq!(parse(Some(blob)), parse(Some(blob)));
    }

    #[test]
    fn try_parse_rejects_malformed_blob() {
        let err = try_parse("not json").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::MalformedInput(_))
        ));

        assert!(try_parse(r#"{"ip":"10.0.0.1"}"#).is_err());
    }

    #[test]
    fn try_parse_still_drops_bad_records() {
        let blob = r#"[
            {"ip":"10.0.0.1","model":"P100","deviceOn":true},
            {"model":"bad"}
        ]"#;

        let snapshot = try_parse(blob).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.devices()[0].ip(), "10.0.0.1");
    }

    #[test]
    fn try_parse_agrees_with_parse_on_well_formed_input() {
        let blob = r#"[{"ip":"10.0.0.1","model":"P100","deviceOn":true}]"#;
        assert_eq!(try_parse(blob).unwrap(), parse(Some(blob)));
    }

    #[test]
    fn decode_record_names_missing_field() {
        let value: Value = serde_json::from_str(r#"{"model":"P100","deviceOn":true}"#).unwrap();
        let err = decode_record(value).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(field) if field == "ip"));
    }

    #[test]
    fn read_snapshot_through_store() {
        let mut store = MemoryStore::new();
        assert!(read_snapshot(&store).is_empty());

        store.insert(
            DEVICES_KEY,
            r#"[{"ip":"10.0.0.1","model":"P100","deviceOn":true}]"#,
        );
        assert_eq!(read_snapshot(&store).len(), 1);
    }
}
