//! Opaque endpoint identifiers.
//!
//! Bundle routines return one path per endpoint. Results are keyed by a
//! caller-assigned [`PortId`] rather than by the endpoint transformation, so
//! two endpoints that happen to share a position stay distinguishable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an endpoint taking part in a bundle route.
///
/// Ordered by raw value, so maps keyed by it iterate in caller order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(u32);

impl PortId {
    /// Wraps a caller-chosen number.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the wrapped number.
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PortId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn ordered_by_raw_value() {
        let set: BTreeSet<PortId> = [3, 1, 2, 1].into_iter().map(PortId::from).collect();
        let raw: Vec<u32> = set.into_iter().map(PortId::as_raw).collect();
        assert_eq!(raw, vec![1, 2, 3]);
    }

    #[test]
    fn display_prefixes_p() {
        assert_eq!(PortId::from_raw(7).to_string(), "p7");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&PortId::from_raw(55)).unwrap();
        assert_eq!(json, "55");
        let back: PortId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PortId::from_raw(55));
    }
}
