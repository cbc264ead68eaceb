use serde::{Deserialize, Serialize};
use std::fmt;

/// NodeId: stable handle of a node inside one [`Graph`](super::Graph)
///
/// Handles are dense arena indices assigned in insertion order, so they can
/// index per-node side tables directly. A handle is only meaningful for the
/// graph that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(u32);

/// EdgeId: stable handle of an edge inside one [`Graph`](super::Graph)
///
/// Parallel edges between the same ordered pair of nodes get distinct handles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EdgeId(u32);

macro_rules! arena_handle {
    ($name:ident, $prefix:literal) => {
        impl $name {
            /// Create a handle from an arena index
            pub fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            /// Get the arena index
            pub fn index(&self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> usize {
                id.index()
            }
        }
    };
}

arena_handle!(NodeId, "n");
arena_handle!(EdgeId, "e");
