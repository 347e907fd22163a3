//! Linear maps projecting lattice vectors onto numbers or onto other coordinate systems.

use std::ops::{Add, Mul};

use crate::{interval::Interval, pitch::Pitch};

/// Anything that can be read as a `(w, h)` pair of lattice coordinates.
///
/// Implemented by [`Pitch`], [`Interval`], [`crate::pitch::Axis`] and the coordinate-agnostic [`MapVec`].
pub trait Vector: Copy {
    fn components(self) -> (i32, i32);
}

/// A 2-vector without any musical meaning attached, e.g. the result of a basis change.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MapVec {
    pub x: i32,
    pub y: i32,
}

impl MapVec {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_pitch(self) -> Pitch {
        Pitch::new(self.x, self.y)
    }

    pub fn to_interval(self) -> Interval {
        Interval::new(self.x, self.y)
    }
}

impl Vector for MapVec {
    fn components(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// A 1×2 matrix reducing a lattice vector to a single number.
///
/// The scalar type defaults to `i32`, e.g. for counting the steps of an equal temperament, but can be any type integers convert into, e.g. `f64` for cents.
///
/// # Examples
///
/// ```
/// # use meantonal::map::{self, Map1D};
/// # use meantonal::pitch::Pitch;
/// let c4 = Pitch::new(25, 10);
///
/// assert_eq!(map::EDO12.map(c4), 60);
/// assert_eq!(map::EDO31.map(c4), 155);
/// assert_eq!(Map1D::new(100.0, 50.0).map(c4), 3000.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Map1D<T = i32> {
    pub m0: T,
    pub m1: T,
}

impl<T> Map1D<T> {
    pub const fn new(m0: T, m1: T) -> Self {
        Self { m0, m1 }
    }
}

impl<T> Map1D<T>
where
    T: Copy + From<i32> + Add<Output = T> + Mul<Output = T>,
{
    pub fn map(&self, v: impl Vector) -> T {
        let (w, h) = v.components();
        self.m0 * T::from(w) + self.m1 * T::from(h)
    }

    /// Returns the matrix product `self · other`, i.e. the map that applies `other` first and `self` afterwards.
    ///
    /// ```
    /// # use meantonal::map::{self, Map1D};
    /// # use meantonal::interval::Interval;
    /// // (fifths, octaves) -> cents in 12-EDO
    /// let cents_of_generators = Map1D::new(700, 1200);
    /// let cents = cents_of_generators.compose(&map::GENERATORS_TO);
    ///
    /// assert_eq!(cents, Map1D::new(200, 100));
    /// assert_eq!(cents.map(Interval::new(2, 0)), 400);
    /// ```
    pub fn compose(&self, other: &Map2D) -> Map1D<T> {
        Map1D::new(
            self.m0 * T::from(other.m00) + self.m1 * T::from(other.m10),
            self.m0 * T::from(other.m01) + self.m1 * T::from(other.m11),
        )
    }
}

/// A 2×2 matrix changing the basis of a lattice vector.
///
/// # Examples
///
/// ```
/// # use meantonal::map::{self, MapVec};
/// # use meantonal::interval::Interval;
/// let major_third = Interval::new(2, 0);
///
/// // Four fifths up, two octaves down
/// assert_eq!(map::GENERATORS_TO.map(major_third), MapVec::new(4, -2));
/// assert_eq!(map::GENERATORS_FROM.map(MapVec::new(4, -2)).to_interval(), major_third);
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Map2D {
    pub m00: i32,
    pub m01: i32,
    pub m10: i32,
    pub m11: i32,
}

impl Map2D {
    pub const fn new(m00: i32, m01: i32, m10: i32, m11: i32) -> Self {
        Self { m00, m01, m10, m11 }
    }

    pub fn map(&self, v: impl Vector) -> MapVec {
        let (w, h) = v.components();
        MapVec::new(self.m00 * w + self.m01 * h, self.m10 * w + self.m11 * h)
    }

    /// Returns the matrix product `self · other`.
    ///
    /// ```
    /// # use meantonal::map::{self, Map2D};
    /// assert_eq!(map::GENERATORS_TO.compose(&map::GENERATORS_FROM), Map2D::new(1, 0, 0, 1));
    /// assert_eq!(map::WICKI_TO.compose(&map::WICKI_FROM), Map2D::new(1, 0, 0, 1));
    /// ```
    pub fn compose(&self, other: &Map2D) -> Map2D {
        Map2D::new(
            self.m00 * other.m00 + self.m01 * other.m10,
            self.m00 * other.m01 + self.m01 * other.m11,
            self.m10 * other.m00 + self.m11 * other.m10,
            self.m10 * other.m01 + self.m11 * other.m11,
        )
    }
}

/// `(w, h)` to `(fifths, octaves)`.
pub const GENERATORS_TO: Map2D = Map2D::new(2, -5, -1, 3);
/// `(fifths, octaves)` to `(w, h)`.
pub const GENERATORS_FROM: Map2D = Map2D::new(3, 5, 1, 2);

/// `(w, h)` to the coordinates of a Wicki-Hayden keyboard.
pub const WICKI_TO: Map2D = Map2D::new(1, -3, 0, 1);
/// Wicki-Hayden keyboard coordinates to `(w, h)`.
pub const WICKI_FROM: Map2D = Map2D::new(1, 3, 0, 1);

// Whole step and half step sizes in EDO steps
pub const EDO7: Map1D = Map1D::new(1, 1);
pub const EDO12: Map1D = Map1D::new(2, 1);
pub const EDO17: Map1D = Map1D::new(3, 1);
pub const EDO19: Map1D = Map1D::new(3, 2);
pub const EDO22: Map1D = Map1D::new(4, 1);
pub const EDO31: Map1D = Map1D::new(5, 3);
pub const EDO50: Map1D = Map1D::new(8, 5);
pub const EDO53: Map1D = Map1D::new(9, 4);
pub const EDO55: Map1D = Map1D::new(9, 5);
pub const EDO81: Map1D = Map1D::new(13, 8);
