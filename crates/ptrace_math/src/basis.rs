//! Orthonormal frames used to move samples between local and world space.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Vec3;

/// Errors raised while building math types from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Invalid axis pair {0:?}: expected two distinct letters out of x, y, z")]
    InvalidAxes(String),
}

/// Ordered pair of axis names for [`OrthonormalBasis::from_two`].
///
/// The first letter names the axis taking the first vector, the second letter
/// the axis taking the second one. The remaining letter receives their cross
/// product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPair {
    XY,
    YX,
    XZ,
    ZX,
    YZ,
    ZY,
}

impl AxisPair {
    pub const ALL: [AxisPair; 6] = [
        AxisPair::XY,
        AxisPair::YX,
        AxisPair::XZ,
        AxisPair::ZX,
        AxisPair::YZ,
        AxisPair::ZY,
    ];

    /// Axis indices (0 = x, 1 = y, 2 = z) as (first, second, remaining).
    pub fn indices(self) -> (usize, usize, usize) {
        match self {
            AxisPair::XY => (0, 1, 2),
            AxisPair::YX => (1, 0, 2),
            AxisPair::XZ => (0, 2, 1),
            AxisPair::ZX => (2, 0, 1),
            AxisPair::YZ => (1, 2, 0),
            AxisPair::ZY => (2, 1, 0),
        }
    }
}

impl FromStr for AxisPair {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(AxisPair::XY),
            "yx" => Ok(AxisPair::YX),
            "xz" => Ok(AxisPair::XZ),
            "zx" => Ok(AxisPair::ZX),
            "yz" => Ok(AxisPair::YZ),
            "zy" => Ok(AxisPair::ZY),
            _ => Err(MathError::InvalidAxes(s.to_string())),
        }
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [char; 3] = ['x', 'y', 'z'];
        let (first, second, _) = self.indices();
        write!(f, "{}{}", NAMES[first], NAMES[second])
    }
}

/// Three mutually orthogonal unit vectors expressed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalBasis {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl OrthonormalBasis {
    /// Create a basis from three axes.
    ///
    /// The caller guarantees the axes are unit length and mutually orthogonal.
    pub fn new(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Build a basis from two unit vectors placed on the axes named by `axes`.
    ///
    /// `second` only needs to be roughly orthogonal to `first`: it is
    /// re-derived from the cross products so the result is exactly orthogonal.
    pub fn from_two(axes: AxisPair, first: Vec3, second: Vec3) -> Self {
        let third = first.cross(second).normalize();
        let second = third.cross(first);

        let mut slots = [Vec3::ZERO; 3];
        let (a, b, c) = axes.indices();
        slots[a] = first;
        slots[b] = second;
        slots[c] = third;

        Self::new(slots[0], slots[1], slots[2])
    }

    /// Build a basis around a unit `z_axis` with arbitrary x and y axes.
    pub fn from_z_axis(z_axis: Vec3) -> Self {
        let candidate = if z_axis.dot(Vec3::X).abs() > 0.99 {
            Vec3::Y
        } else {
            Vec3::X
        };
        let x_axis = candidate.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();
        Self::new(x_axis, y_axis, z_axis)
    }

    /// Map a vector given in this basis' local coordinates to world space.
    #[inline]
    pub fn transform(&self, local: Vec3) -> Vec3 {
        self.x_axis * local.x + self.y_axis * local.y + self.z_axis * local.z
    }
}
