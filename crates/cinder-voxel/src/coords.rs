//! Integer 3-vector used for absolute block coordinates, chunk origins and
//! region sizes. `z` is the vertical axis.

use std::fmt;
use std::ops::{Add, Rem, Sub};

use serde::{Deserialize, Serialize};

/// An integer block coordinate, offset, or size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Int3D {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component (vertical).
    pub z: i32,
}

impl Int3D {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// `(1, 1, 1)`, handy for converting a size into an inclusive max corner.
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Creates a new vector.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all three components set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Component-wise floor modulo: the result is always in `[0, rhs)` for a
    /// positive `rhs`, including for negative `self`.
    pub fn rem_euclid(self, rhs: Int3D) -> Int3D {
        Int3D::new(
            self.x.rem_euclid(rhs.x),
            self.y.rem_euclid(rhs.y),
            self.z.rem_euclid(rhs.z),
        )
    }

    /// Product of the components, treating a size with any non-positive
    /// component as empty.
    pub fn volume(self) -> usize {
        if self.x <= 0 || self.y <= 0 || self.z <= 0 {
            return 0;
        }
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Returns `true` if every component is strictly positive.
    pub fn is_positive(self) -> bool {
        self.x > 0 && self.y > 0 && self.z > 0
    }
}

impl Add for Int3D {
    type Output = Int3D;

    fn add(self, rhs: Int3D) -> Int3D {
        Int3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Int3D {
    type Output = Int3D;

    fn sub(self, rhs: Int3D) -> Int3D {
        Int3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Floor (Euclidean) modulo. Truncating modulo would misalign negative
/// coordinates to the chunk grid.
impl Rem for Int3D {
    type Output = Int3D;

    fn rem(self, rhs: Int3D) -> Int3D {
        self.rem_euclid(rhs)
    }
}

impl fmt::Display for Int3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
