//! hexcanvas maps between continuous pixel space (e.g. an HTML5 canvas) and
//! a discrete hexagon grid. Given the indices of a hexagon it tells you where
//! that hexagon's center is in pixel space, and given a point in pixel space it
//! tells you which hexagon the point falls in.
//!
//! ```
//! use hexcanvas::{HexConfig, HexTransform};
//!
//! let config = HexConfig::new(45, 0.5);
//! let transform = HexTransform::new(config).unwrap();
//! let center = transform.hex_to_pixel(2.0, -1.0);
//! let hex = transform.pixel_to_hex(center.x, center.y);
//! assert_eq!((hex.u, hex.v), (2, -1));
//! ```
//!
//! Drawing the hexagons is left to you. See [HexDimensions] for the layout
//! constants needed to outline a hexagon around its center.

mod config;
mod transform;
mod util;

pub use crate::{
    config::{HexConfig, InvalidParameter},
    transform::{HexDimensions, HexTransform},
    util::unit::{HexCoord, Point2},
};
