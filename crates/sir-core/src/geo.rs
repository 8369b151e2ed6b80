//! Planar geometry: points, velocities, and rectangular extents.
//!
//! All coordinates are `f64` in abstract domain units with the origin at the
//! top-left corner of the domain.  There is no geographic projection.

/// A position in the simulation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `[x, y]` array form, as used by the R-tree index.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Translate by one tick of `velocity`.
    #[inline]
    pub fn advanced(self, velocity: Velocity) -> Point {
        Point::new(self.x + velocity.dx, self.y + velocity.dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Per-tick displacement of an agent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Width and height of an axis-aligned region anchored at the origin.
///
/// Used both for the full domain and for the reduced "work" domain.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Closed membership test against `[0, width] × [0, height]`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// This extent scaled per axis, e.g. `(0.5, 0.5)` for a quarter of the area.
    #[inline]
    pub fn scaled(self, width_fraction: f64, height_fraction: f64) -> Extent {
        Extent::new(self.width * width_fraction, self.height * height_fraction)
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}
