//! Oriented endpoints handed to the bundle router.

use mroute_common::{PortId, Trans};
use serde::{Deserialize, Serialize};

/// An endpoint of a bundle: an oriented frame plus the width of the
/// connection that leaves it.
///
/// The frame's local +x axis, after rotation, is the direction the
/// connection leaves the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlePort {
    /// Caller-assigned identifier; results are keyed by it.
    pub id: PortId,
    /// Position and orientation.
    pub trans: Trans,
    /// Width of the connection in grid units.
    pub width: i64,
}

impl BundlePort {
    /// Creates a bundle endpoint.
    pub fn new(id: PortId, trans: Trans, width: i64) -> Self {
        Self { id, trans, width }
    }
}
