//! Device record and its JSON wire form.
//!
//! Decoding is lenient: field names match without regard to ASCII case,
//! missing fields fall back to their zero value, unknown fields are ignored,
//! and anything after the first JSON value in the body is left unread. A
//! known field with the wrong JSON type is a decode error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MonitoringError, Result};

const FIELDS: [&str; 3] = ["id", "mac", "firmware"];

/// A managed network endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: i64,
    pub mac: String,
    pub firmware: String,
}

impl Device {
    pub fn new(id: i64, mac: impl Into<String>, firmware: impl Into<String>) -> Self {
        Self {
            id,
            mac: mac.into(),
            firmware: firmware.into(),
        }
    }

    /// Decode a single device from a request body.
    ///
    /// The error message is the raw parser message so callers can hand it
    /// back to the client unchanged.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or_else(|| MonitoringError::BadRequest("EOF".into()))?
            .map_err(decode_err)?;

        match first {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => {
                serde_json::from_value(Value::Object(fold_field_names(fields))).map_err(decode_err)
            }
            // arrays would otherwise fill the struct positionally
            other => Err(decode_err(
                serde_json::from_value::<Map<String, Value>>(other)
                    .err()
                    .unwrap_or_else(|| <serde_json::Error as serde::de::Error>::custom("expected a JSON object")),
            )),
        }
    }

    /// Encode a device list as a JSON array.
    pub fn list_to_json(devices: &[Device]) -> Result<Vec<u8>> {
        serde_json::to_vec(devices).map_err(|e| MonitoringError::BadRequest(e.to_string()))
    }
}

/// Rename keys that match a `Device` field case-insensitively to the field's
/// canonical name. An exact match wins over a folded one.
fn fold_field_names(fields: Map<String, Value>) -> Map<String, Value> {
    let mut exact = Map::new();
    let mut folded = Map::new();
    for (key, value) in fields {
        match FIELDS.iter().find(|f| f.eq_ignore_ascii_case(&key)) {
            Some(name) if *name == key => {
                exact.insert(key, value);
            }
            Some(name) => {
                folded.insert((*name).to_string(), value);
            }
            None => {}
        }
    }
    for (key, value) in exact {
        folded.insert(key, value);
    }
    folded
}

fn decode_err(e: serde_json::Error) -> MonitoringError {
    tracing::debug!(error = %e, "device decode failed");
    MonitoringError::BadRequest(e.to_string())
}
