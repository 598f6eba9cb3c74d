use derive_more::{Add, Display, From, Into, Sub};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. `+x` points right and `+y` points down, which
/// matches the addressing of an HTML5 canvas. Integer coordinates fall on the
/// corners **between** pixels, not on pixel centers.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Index of a single hexagon in the axial grid. With the default layout, `+u`
/// walks down one row at a time and `+v` walks right along a row. Because rows
/// are offset by half a hexagon, a step in `+u` also shifts half a hexagon to
/// the right, so `+u` runs along the line `x = y` on screen.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Into,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", "self.u", "self.v")]
pub struct HexCoord {
    pub u: i64,
    pub v: i64,
}

impl HexCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(u: i64, v: i64) -> Self {
        Self { u, v }
    }
}
