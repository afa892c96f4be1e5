//! Triangle (facet) type.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One facet of an STL mesh.
///
/// Stores exactly what the file formats store: the facet normal as
/// written (possibly zero or inconsistent with the winding - it is not
/// recomputed), the three corner points in emission order, and the
/// binary-only attribute word.
///
/// The three-vertex invariant is structural: `vertices` is a fixed-size
/// array, so a facet can never carry fewer or more corners.
///
/// # Example
///
/// ```
/// use stl_types::{Point3, Triangle, Vector3};
///
/// let facet = Triangle::new(
///     Vector3::new(0.0, 0.0, 1.0),
///     [
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     0,
/// );
/// assert_eq!(facet.attribute, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Facet normal as stored in the file. May be degenerate.
    pub normal: Vector3<f32>,
    /// Corner points in winding order.
    pub vertices: [Point3<f32>; 3],
    /// Attribute byte count word. Binary STL only; 0 when the facet
    /// was decoded from ASCII.
    pub attribute: u16,
}

impl Triangle {
    /// Create a facet from its stored fields.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector3<f32>, vertices: [Point3<f32>; 3], attribute: u16) -> Self {
        Self {
            normal,
            vertices,
            attribute,
        }
    }

    /// Create a facet from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use stl_types::Triangle;
    ///
    /// let facet = Triangle::from_arrays(
    ///     [0.0, 0.0, 1.0],
    ///     [
    ///         [0.0, 0.0, 0.0],
    ///         [1.0, 0.0, 0.0],
    ///         [0.0, 1.0, 0.0],
    ///     ],
    ///     0,
    /// );
    /// assert_eq!(facet.normal.z, 1.0);
    /// ```
    #[must_use]
    pub fn from_arrays(normal: [f32; 3], vertices: [[f32; 3]; 3], attribute: u16) -> Self {
        Self {
            normal: Vector3::new(normal[0], normal[1], normal[2]),
            vertices: [
                Point3::new(vertices[0][0], vertices[0][1], vertices[0][2]),
                Point3::new(vertices[1][0], vertices[1][1], vertices[1][2]),
                Point3::new(vertices[2][0], vertices[2][1], vertices[2][2]),
            ],
            attribute,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn from_arrays_matches_new() {
        let a = Triangle::from_arrays(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            7,
        );
        let b = Triangle::new(
            Vector3::new(0.0, 0.0, 1.0),
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            7,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_components_pass_through() {
        let facet = Triangle::from_arrays(
            [f32::NAN, f32::INFINITY, 0.0],
            [[0.0; 3], [0.0; 3], [0.0; 3]],
            0,
        );
        assert!(facet.normal.x.is_nan());
        assert!(facet.normal.y.is_infinite());
    }
}
