//! Basic unit types for the cube coordinate system: the integer cell
//! coordinate [Hex], its transient fractional counterpart [FractionalHex],
//! and the two fixed direction tables. See the parent module documentation
//! for more info on the coordinate system.

use crate::error::HexError;
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::cmp;
use strum::{EnumIter, IntoEnumIterator};

/// A cell in a hexagonal grid, addressed by its cube coordinate: three
/// signed integer components `(q, r, s)` satisfying `q + r + s = 0`.
///
/// Cells are immutable values; every operation returns a new instance.
/// Equality and hashing are structural.
///
/// ## Implementation
///
/// Since the components always sum to zero, this struct only stores `q` and
/// `r` and derives `s` as needed. Besides saving a third of the memory, this
/// makes the derived arithmetic (`Add`, `Sub`, `Neg`, scalar `Mul`)
/// automatically closed over the invariant: the stored pair is combined
/// componentwise and the derived `s` stays consistent by construction.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a cell from a full cube triple. Returns
    /// [HexError::InvalidCoordinate] if the components don't sum to zero;
    /// an invalid triple is never silently corrected.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q + r + s != 0 {
            Err(HexError::InvalidCoordinate { q, r, s })
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a cell from its q and r components. Since q+r+s=0 for all
    /// cells, s can be derived, so this can't fail.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a cell from its q and s components, deriving r.
    pub const fn new_qs(q: i32, s: i32) -> Self {
        Self::new_qr(q, -q - s)
    }

    /// Construct a cell from its r and s components, deriving q.
    pub const fn new_rs(r: i32, s: i32) -> Self {
        Self::new_qr(-r - s, r)
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The number of steps needed to walk from the origin to this cell.
    pub fn length(self) -> u32 {
        // IMPORTANT: We divide by 2 here because two adjacent cell centers
        // are always separated by two cube edges. The absolute sum is always
        // even for a valid cube coordinate, so the division is exact.
        ((self.q.abs() + self.r.abs() + self.s().abs()) / 2) as u32
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// steps it takes to get from one to the other. 0 if the cells are
    /// equal, 1 if they are adjacent, 2 if there is one cell between them,
    /// etc. Symmetric in its arguments.
    pub fn distance_to(self, other: Hex) -> u32 {
        (self - other).length()
    }

    /// Get the cell adjacent to this one in the given direction.
    pub fn adjacent(self, direction: HexDirection) -> Hex {
        self + direction.to_vector()
    }

    /// Get an iterator of the six cells directly adjacent to this one, in
    /// direction table order.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Get the diagonal (vertex-sharing, distance 2) neighbor of this cell
    /// in the given direction.
    pub fn diagonal(self, direction: DiagonalDirection) -> Hex {
        self + direction.to_vector()
    }

    /// Get an iterator of the six diagonal neighbors of this cell, in
    /// direction table order.
    pub fn diagonals(self) -> impl Iterator<Item = Hex> {
        DiagonalDirection::iter().map(move |dir| self.diagonal(dir))
    }

    /// Rotate this cell about the origin in 60° increments. Each positive
    /// 60° applies the permutation `(q, r, s) -> (-s, -q, -r)`, which maps
    /// every direction table entry onto the next one; each negative 60°
    /// applies the inverse permutation `(q, r, s) -> (-r, -s, -q)`.
    ///
    /// `degrees` that are not a multiple of 60 truncate toward zero on the
    /// step count, matching integer division: `rotate(59)` is the identity
    /// and `rotate(-119)` equals `rotate(-60)`. Callers that consider a
    /// non-multiple a bug should validate before calling.
    pub fn rotate(self, degrees: i32) -> Hex {
        // Whole turns are the identity, so only the residual steps matter
        let steps = (degrees / 60) % 6;
        let mut hex = self;
        for _ in 0..steps.unsigned_abs() {
            hex = if steps > 0 {
                Hex::new_qr(-hex.s(), -hex.q)
            } else {
                Hex::new_qr(-hex.r, -hex.s())
            };
        }
        hex
    }

    /// Trace the straight line from this cell to another, returning every
    /// cell the segment passes through. The result always starts at `self`,
    /// ends at `other`, contains exactly `distance + 1` cells, and each
    /// consecutive pair of cells is adjacent. `line_to(self)` is
    /// `[self]`.
    ///
    /// Both endpoints are nudged off exact cell boundaries before
    /// interpolating (see [FractionalHex::nudge]), so the trace is
    /// deterministic and reproducible across platforms.
    pub fn line_to(self, other: Hex) -> Vec<Hex> {
        let distance = self.distance_to(other);
        let a = FractionalHex::from(self).nudge();
        let b = FractionalHex::from(other).nudge();
        let step = 1.0 / f64::from(cmp::max(distance, 1));
        (0..=distance)
            .map(|i| a.lerp(b, step * f64::from(i)).round())
            .collect()
    }
}

/// A non-integer position in the cube coordinate system, with the same
/// zero-sum invariant as [Hex] (up to floating point tolerance). These only
/// exist transiently while interpolating between cells, and are always
/// rounded back to a [Hex] before being used as a cell address.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// The fixed offset applied by [Self::nudge]. The components sum to
    /// zero, so nudged points stay on the `q + r + s = 0` plane.
    const NUDGE: (f64, f64, f64) = (1e-6, 2e-6, -3e-6);

    /// Construct a fractional coordinate. Callers are responsible for
    /// keeping the component sum (approximately) zero; unlike [Hex::new],
    /// fractional coordinates are not strictly validated.
    pub fn new(q: f64, r: f64, s: f64) -> Self {
        debug_assert!(
            (q + r + s).abs() < 1e-3,
            "fractional coordinate ({q}, {r}, {s}) is too far off the q+r+s=0 plane",
        );
        Self { q, r, s }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Linearly interpolate between this coordinate and another, treating
    /// each component independently. `t` is the interpolation parameter,
    /// where 0 is `self` and 1 is `other`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        Self::new(
            self.q + (other.q - self.q) * t,
            self.r + (other.r - self.r) * t,
            self.s + (other.s - self.s) * t,
        )
    }

    /// Bias this coordinate by a tiny fixed zero-sum offset. Interpolated
    /// points between nudged endpoints never land exactly on the boundary
    /// between two cells, which keeps [Hex::line_to] deterministic instead
    /// of leaning on the rounding tie-break.
    pub fn nudge(self) -> FractionalHex {
        Self::new(
            self.q + Self::NUDGE.0,
            self.r + Self::NUDGE.1,
            self.s + Self::NUDGE.2,
        )
    }

    /// Round to the nearest cell while preserving the zero-sum invariant
    /// exactly. Each component is rounded to the nearest integer
    /// independently, then the component with the largest rounding error is
    /// recomputed from the other two, which is what keeps the sum at zero
    /// (naive independent rounding would drift off the plane).
    ///
    /// When two rounding errors are exactly equal, the first coordinate in
    /// the fixed priority order q, then r, then s is the one recomputed.
    pub fn round(self) -> Hex {
        let q = self.q.round();
        let r = self.r.round();
        let s = self.s.round();
        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        // `>=` rather than `>` is what gives ties the q, r, s priority
        if q_diff >= r_diff && q_diff >= s_diff {
            Hex::new_rs(r as i32, s as i32)
        } else if r_diff >= s_diff {
            Hex::new_qs(q as i32, s as i32)
        } else {
            Hex::new_qr(q as i32, r as i32)
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q().into(), hex.r().into(), hex.s().into())
    }
}

/// The six directions in which cells line up side-to-side (the "orthogonal"
/// steps). For any given cell, a direction can represent two useful things:
///
/// - Direction from the cell's center to the midpoint of one of its sides
/// - Direction to an adjacent cell's center
///
/// Variants are declared in table order, starting from east; iteration and
/// [Self::TABLE] follow that order. Consecutive entries are 60° apart, so
/// the table wraps around a full turn.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    /// East
    E,
    /// Northeast
    NE,
    /// Northwest
    NW,
    /// West
    W,
    /// Southwest
    SW,
    /// Southeast
    SE,
}

impl HexDirection {
    /// All six directions in table order. This is the canonical expansion
    /// order for every algorithm that enumerates neighbors.
    pub const TABLE: &'static [Self] =
        &[Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// Get the index of this direction within [Self::TABLE].
    pub fn table_index(self) -> usize {
        Self::TABLE.iter().position(|dir| self == *dir).unwrap()
    }

    /// Get the direction directly opposite this one.
    pub fn opposite(self) -> Self {
        let table = Self::TABLE;
        table[(self.table_index() + table.len() / 2) % table.len()]
    }

    /// Get the unit step that moves a cell one tile in this direction. The
    /// step offsets themselves satisfy the zero-sum invariant, so they
    /// compose with plain addition.
    pub const fn to_vector(self) -> Hex {
        match self {
            Self::E => Hex::new_qr(1, 0),
            Self::NE => Hex::new_qr(1, -1),
            Self::NW => Hex::new_qr(0, -1),
            Self::W => Hex::new_qr(-1, 0),
            Self::SW => Hex::new_qr(-1, 1),
            Self::SE => Hex::new_qr(0, 1),
        }
    }
}

/// The six directions to a cell's diagonal neighbors: the cells that share
/// only a vertex, at distance 2. Each diagonal step is the sum of the two
/// orthogonal steps flanking it, so the variants sit at the midpoints of the
/// [HexDirection] table and are declared in the same wrapping order.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalDirection {
    /// East-northeast
    ENE,
    /// North
    N,
    /// West-northwest
    WNW,
    /// West-southwest
    WSW,
    /// South
    S,
    /// East-southeast
    ESE,
}

impl DiagonalDirection {
    /// All six diagonal directions in table order.
    pub const TABLE: &'static [Self] =
        &[Self::ENE, Self::N, Self::WNW, Self::WSW, Self::S, Self::ESE];

    /// Get the index of this direction within [Self::TABLE].
    pub fn table_index(self) -> usize {
        Self::TABLE.iter().position(|dir| self == *dir).unwrap()
    }

    /// Get the direction directly opposite this one.
    pub fn opposite(self) -> Self {
        let table = Self::TABLE;
        table[(self.table_index() + table.len() / 2) % table.len()]
    }

    /// Get the step that moves a cell to its diagonal neighbor in this
    /// direction. Always a distance-2 offset.
    pub const fn to_vector(self) -> Hex {
        match self {
            Self::ENE => Hex::new_qr(2, -1),
            Self::N => Hex::new_qr(1, -2),
            Self::WNW => Hex::new_qr(-1, -1),
            Self::WSW => Hex::new_qr(-2, 1),
            Self::S => Hex::new_qr(-1, 2),
            Self::ESE => Hex::new_qr(1, 1),
        }
    }
}
