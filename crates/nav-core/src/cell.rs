//! Grid coordinates and facing directions.
//!
//! `GridCell` uses `i32` components: scene-local search coordinates are
//! always non-negative, but world coordinates may sit below a scene's origin,
//! and origin subtraction must not underflow.

/// A tile coordinate — scene-local or world-space depending on context.
///
/// Local cells index into a `GridStore`; adding the owning scene's origin
/// converts them back to world space.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `(x + dx, y + dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> GridCell {
        GridCell { x: self.x + dx, y: self.y + dy }
    }

    /// Translate a local cell into world space by the scene origin.
    #[inline]
    pub fn to_world(self, origin: GridCell) -> GridCell {
        GridCell { x: self.x + origin.x, y: self.y + origin.y }
    }

    /// Translate a world cell into local space by the scene origin.
    #[inline]
    pub fn to_local(self, origin: GridCell) -> GridCell {
        GridCell { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// `true` if `other` is one of this cell's 8 neighbors and lies on a
    /// diagonal (both axes differ).
    #[inline]
    pub fn is_diagonal_to(self, other: GridCell) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// The direction an agent faces on arrival.
///
/// Discriminant values follow the usual sprite-sheet row convention
/// (down, right, up, left) so applications can cast directly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Facing {
    #[default]
    Down = 0,
    Right = 1,
    Up = 2,
    Left = 3,
}

impl Facing {
    /// Parse a lowercase facing name (`"down"`, `"right"`, `"up"`, `"left"`).
    pub fn parse(s: &str) -> Option<Facing> {
        match s {
            "down" => Some(Facing::Down),
            "right" => Some(Facing::Right),
            "up" => Some(Facing::Up),
            "left" => Some(Facing::Left),
            _ => None,
        }
    }
}
