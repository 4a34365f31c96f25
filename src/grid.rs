use glam::{I64Vec2, UVec2};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// A grid coordinate. Both axes are non-negative.
pub type Coord = UVec2;

/// The bounded Martian surface a batch of robots is dropped onto.
///
/// Bounds are inclusive: valid `x` ranges over `0..=max.x`, valid `y` over
/// `0..=max.y`. The scent set records the last valid coordinate of every robot
/// that has fallen off the edge so far and only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Inclusive upper-right corner of the surface.
    max: Coord,

    /// Coordinates where a robot was lost.
    #[serde(serialize_with = "serialize_sorted")]
    scents: HashSet<Coord>,
}

/// Writes the scent set ordered by `(x, y)` so serialized output is stable.
fn serialize_sorted<S: Serializer>(
    scents: &HashSet<Coord>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut sorted: Vec<Coord> = scents.iter().copied().collect();
    sorted.sort_unstable_by_key(|c| (c.x, c.y));
    serializer.collect_seq(sorted)
}

impl Grid {
    /// Creates an unscented grid with upper-right corner `(max_x, max_y)`.
    pub fn new(max_x: u32, max_y: u32) -> Self {
        Self {
            max: UVec2::new(max_x, max_y),
            scents: HashSet::new(),
        }
    }

    /// Builds a grid that already carries scents, e.g. from a previous batch.
    pub fn with_scents(max_x: u32, max_y: u32, scents: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            max: UVec2::new(max_x, max_y),
            scents: scents.into_iter().collect(),
        }
    }

    /// Inclusive upper-right corner.
    pub fn max(&self) -> Coord {
        self.max
    }

    /// Largest valid `x`.
    pub fn max_x(&self) -> u32 {
        self.max.x
    }

    /// Largest valid `y`.
    pub fn max_y(&self) -> u32 {
        self.max.y
    }

    /// Every coordinate a robot has been lost from.
    pub fn scents(&self) -> &HashSet<Coord> {
        &self.scents
    }

    /// Returns `true` if the signed candidate lies on the surface.
    ///
    /// Candidates are 64-bit so that a step past either `0` or `u32::MAX` is
    /// representable and rejected here instead of wrapping.
    pub fn contains(&self, candidate: I64Vec2) -> bool {
        candidate.cmpge(I64Vec2::ZERO).all() && candidate.cmple(self.max.as_i64vec2()).all()
    }

    /// Returns `true` if a robot was previously lost at `coord`.
    pub fn has_scent(&self, coord: Coord) -> bool {
        self.scents.contains(&coord)
    }

    /// Returns the grid with `coord` added to its scents. Re-adding a scent is a no-op.
    #[must_use]
    pub fn with_scent(mut self, coord: Coord) -> Self {
        self.scents.insert(coord);
        self
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.max.x, self.max.y)
    }
}
