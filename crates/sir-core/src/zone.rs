//! Shopping zones: fixed rectangles with elevated transmission.
//!
//! A transmission event is "in a zone" when a single zone contains both the
//! infected and the susceptible agent.  Overlapping zones do not stack: the
//! registry only answers whether *any* zone contains both points.

use crate::error::{SirError, SirResult};
use crate::geo::{Extent, Point};

/// An axis-aligned rectangle with strict (open) membership.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub top_left: Point,
    pub extent: Extent,
}

impl Zone {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(x, y),
            extent: Extent::new(width, height),
        }
    }

    /// Strict interior test: points on any edge are outside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.top_left.x
            && p.x < self.top_left.x + self.extent.width
            && p.y > self.top_left.y
            && p.y < self.top_left.y + self.extent.height
    }

    #[inline]
    pub fn contains_both(&self, a: Point, b: Point) -> bool {
        self.contains(a) && self.contains(b)
    }
}

/// Immutable collection of zones for one run.
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    /// Validate and freeze `zones`.  Every zone must have finite coordinates
    /// and strictly positive extents.
    pub fn new(zones: Vec<Zone>) -> SirResult<Self> {
        for (index, zone) in zones.iter().enumerate() {
            let coords_finite = zone.top_left.x.is_finite() && zone.top_left.y.is_finite();
            if !coords_finite {
                return Err(SirError::InvalidZone {
                    index,
                    reason: format!("non-finite corner {}", zone.top_left),
                });
            }
            let w = zone.extent.width;
            let h = zone.extent.height;
            if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
                return Err(SirError::InvalidZone {
                    index,
                    reason: format!("extent must be positive, got {}", zone.extent),
                });
            }
        }
        Ok(Self { zones })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// `true` if at least one zone contains both `a` and `b`.
    pub fn shared_by(&self, a: Point, b: Point) -> bool {
        self.zones.iter().any(|z| z.contains_both(a, b))
    }
}
