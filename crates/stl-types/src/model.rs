//! Whole-mesh model type.

use crate::Triangle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete STL mesh: a name and an ordered facet list.
///
/// The name is the `solid`/`endsolid` token in ASCII or the
/// NUL-terminated run inside the 80-byte binary header. Facet order is
/// meaningful and preserved across conversions.
///
/// A model is built fresh by decoding one input buffer and consumed by
/// one encode call; there is no in-place mutation path and nothing is
/// cached across conversions.
///
/// # Example
///
/// ```
/// use stl_types::StlModel;
///
/// let empty = StlModel::new("plate", Vec::new());
/// assert_eq!(empty.triangle_count(), 0);
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StlModel {
    /// Free-text mesh label.
    pub name: String,
    /// Facets in emission order.
    pub triangles: Vec<Triangle>,
}

impl StlModel {
    /// Create a model from a name and facet list.
    #[must_use]
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Number of facets as the u32 the binary format stores.
    ///
    /// Derived from the facet list, so it always equals
    /// `triangles.len()`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: the binary format caps facet counts at u32 range
    pub fn triangle_count(&self) -> u32 {
        self.triangles.len() as u32
    }

    /// Whether the model has no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
