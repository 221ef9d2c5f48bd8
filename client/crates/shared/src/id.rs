//! Common ID Types
//!
//! Type-safe wrappers for identifiers the client generates itself.
//! Identifiers issued by the backend (check ids, post ids) stay opaque strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Per-kind textual prefix, e.g. `guest_3f2a...`
pub trait IdMarker {
    const PREFIX: &'static str;
}

/// Generic typed ID wrapper
///
/// Renders as `<prefix>_<uuid without hyphens>` and parses from either that
/// form or a bare UUID.
///
/// Usage:
/// ```
/// use kernel::id::GuestId;
/// let id = GuestId::new();
/// assert!(id.to_string().starts_with("guest_"));
/// let parsed: GuestId = id.to_string().parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", T::PREFIX, self.value.simple())
    }
}

/// Error returned when a stored identifier cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {prefix} id: {value}")]
pub struct ParseIdError {
    pub prefix: &'static str,
    pub value: String,
}

impl<T: IdMarker> FromStr for Id<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let body = raw
            .strip_prefix(T::PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(raw);
        Uuid::parse_str(body)
            .map(Self::from_uuid)
            .map_err(|_| ParseIdError {
                prefix: T::PREFIX,
                value: s.to_string(),
            })
    }
}

impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    use super::IdMarker;

    /// Marker for unauthenticated visitor ids
    pub struct Guest;

    impl IdMarker for Guest {
        const PREFIX: &'static str = "guest";
    }

    /// Marker for toast notifications
    pub struct Toast;

    impl IdMarker for Toast {
        const PREFIX: &'static str = "toast";
    }
}

pub type GuestId = Id<markers::Guest>;
pub type ToastId = Id<markers::Toast>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_id_display_has_prefix() {
        let id = GuestId::new();
        let text = id.to_string();
        assert!(text.starts_with("guest_"));
        assert_eq!(text.len(), "guest_".len() + 32);
    }

    #[test]
    fn test_parse_prefixed_and_bare() {
        let uuid = Uuid::new_v4();
        let id: GuestId = Id::from_uuid(uuid);

        let prefixed: GuestId = id.to_string().parse().unwrap();
        let bare: GuestId = uuid.to_string().parse().unwrap();
        assert_eq!(prefixed, id);
        assert_eq!(bare, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "guest_nope".parse::<GuestId>().unwrap_err();
        assert_eq!(err.prefix, "guest");
    }

    #[test]
    fn test_serde_as_string() {
        let id = GuestId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: GuestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
