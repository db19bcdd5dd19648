use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional attribute of a generated shape or resource.
///
/// `Unassigned` means the caller never supplied the attribute and it is left
/// out of request bodies entirely. `Null` is an explicit null that is sent
/// over the wire. Generated fields pair this type with
/// `#[serde(default, skip_serializing_if = "Field::is_unassigned")]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
  Unassigned,
  Null,
  Value(T),
}

impl<T> Field<T> {
  #[must_use]
  pub const fn is_unassigned(&self) -> bool {
    matches!(self, Self::Unassigned)
  }

  #[must_use]
  pub const fn is_null(&self) -> bool {
    matches!(self, Self::Null)
  }

  /// `None` becomes an explicit `Null`, not `Unassigned`.
  pub fn from_option(value: Option<T>) -> Self {
    value.map_or(Self::Null, Self::Value)
  }

  #[must_use]
  pub const fn as_value(&self) -> Option<&T> {
    match self {
      Self::Value(value) => Some(value),
      Self::Unassigned | Self::Null => None,
    }
  }

  #[must_use]
  pub fn into_value(self) -> Option<T> {
    match self {
      Self::Value(value) => Some(value),
      Self::Unassigned | Self::Null => None,
    }
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
    match self {
      Self::Unassigned => Field::Unassigned,
      Self::Null => Field::Null,
      Self::Value(value) => Field::Value(f(value)),
    }
  }

  #[must_use]
  pub const fn as_ref(&self) -> Field<&T> {
    match self {
      Self::Unassigned => Field::Unassigned,
      Self::Null => Field::Null,
      Self::Value(value) => Field::Value(value),
    }
  }
}

impl<T> Default for Field<T> {
  fn default() -> Self {
    Self::Unassigned
  }
}

impl<T> From<T> for Field<T> {
  fn from(value: T) -> Self {
    Self::Value(value)
  }
}

impl<T: Serialize> Serialize for Field<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Self::Value(value) => value.serialize(serializer),
      Self::Unassigned | Self::Null => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<T>::deserialize(deserializer).map(Self::from_option)
  }
}
