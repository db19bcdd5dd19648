use std::fmt::{Display, Formatter};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// A point in time as exchanged with JSON-protocol services.
///
/// Services send epoch seconds (optionally fractional); some responses carry
/// RFC 3339 strings instead, so both are accepted. Serialization always
/// writes epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
  #[must_use]
  pub fn now() -> Self {
    Self(Utc::now())
  }

  #[must_use]
  pub const fn as_datetime(&self) -> &DateTime<Utc> {
    &self.0
  }

  #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
  fn from_epoch_seconds(seconds: f64) -> Option<Self> {
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999)).map(Self)
  }
}

impl From<DateTime<Utc>> for Timestamp {
  fn from(value: DateTime<Utc>) -> Self {
    Self(value)
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0.to_rfc3339())
  }
}

impl Serialize for Timestamp {
  #[allow(clippy::cast_precision_loss)]
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let millis = self.0.timestamp_millis();
    if millis % 1000 == 0 {
      serializer.serialize_i64(self.0.timestamp())
    } else {
      serializer.serialize_f64(millis as f64 / 1000.0)
    }
  }
}

impl<'de> Deserialize<'de> for Timestamp {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Seconds(f64),
      Text(String),
    }

    match Raw::deserialize(deserializer)? {
      Raw::Seconds(seconds) => Self::from_epoch_seconds(seconds)
        .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}"))),
      Raw::Text(text) => DateTime::parse_from_rfc3339(&text)
        .map(|parsed| Self(parsed.with_timezone(&Utc)))
        .map_err(|err| D::Error::custom(format!("invalid timestamp '{text}': {err}"))),
    }
  }
}

/// Opaque binary payload, base64 encoded on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(pub Vec<u8>);

impl Blob {
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl From<Vec<u8>> for Blob {
  fn from(value: Vec<u8>) -> Self {
    Self(value)
  }
}

impl Serialize for Blob {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&STANDARD.encode(&self.0))
  }
}

impl<'de> Deserialize<'de> for Blob {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let encoded = String::deserialize(deserializer)?;
    STANDARD.decode(encoded.as_bytes()).map(Self).map_err(D::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::{Blob, Timestamp};

  #[test]
  fn timestamp_accepts_epoch_seconds_and_rfc3339() {
    let from_number: Timestamp = serde_json::from_value(json!(1_700_000_000)).unwrap();
    let from_text: Timestamp = serde_json::from_value(json!("2023-11-14T22:13:20Z")).unwrap();
    assert_eq!(from_number, from_text);
  }

  #[test]
  fn timestamp_writes_whole_seconds_as_integer() {
    let ts: Timestamp = serde_json::from_value(json!(1_700_000_000)).unwrap();
    assert_eq!(serde_json::to_value(ts).unwrap(), json!(1_700_000_000));
  }

  #[test]
  fn timestamp_keeps_fractional_seconds() {
    let ts: Timestamp = serde_json::from_value(json!(1_700_000_000.5)).unwrap();
    assert_eq!(serde_json::to_value(ts).unwrap(), json!(1_700_000_000.5));
  }

  #[test]
  fn blob_is_base64() {
    let blob = Blob(b"hello".to_vec());
    assert_eq!(serde_json::to_value(&blob).unwrap(), json!("aGVsbG8="));
    let decoded: Blob = serde_json::from_value(json!("aGVsbG8=")).unwrap();
    assert_eq!(decoded.as_bytes(), b"hello");
  }
}
