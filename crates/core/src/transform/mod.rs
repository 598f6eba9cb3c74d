//! Conversion between pixel space and hex space.
//!
//! ## Coordinate Systems
//!
//! ### Pixel Coordinates
//!
//! Continuous 2D coordinates, with `+x` to the right and `+y` down, like an
//! HTML5 canvas. Whole-number coordinates address the corners between pixels.
//! See [Point2].
//!
//! ### Hex Coordinates
//!
//! Axial coordinates `(u, v)` that index one hexagon in an infinite tiling.
//! Hexagons are pointy topped and laid out in horizontal rows. `+u` moves one
//! row down (and half a hexagon right), `+v` moves one hexagon right within a
//! row. See [HexCoord].
//!
//! ```text
//!     (0,0)  (0,1)  (0,2)
//!        (1,0)  (1,1)  (1,2)
//!           (2,0)  (2,1)  (2,2)
//! ```
//!
//! The center of hexagon `(0, 0)` sits at the pixel origin, offset by the
//! twiddle (see [HexDimensions::twiddle]).

mod dimensions;

pub use self::dimensions::HexDimensions;

use crate::{
    config::{out_of_range_error, InvalidParameter},
    util::unit::{HexCoord, Point2},
    HexConfig,
};
use log::{debug, warn};
use validator::Validate;

/// Maps points between pixel space and a hex grid. A transform is created from
/// a [HexConfig], and from there can be used for any number of conversions.
///
/// The config can't be changed after creating a transform, and all layout
/// constants are derived exactly once, at construction. Transforms are cheap
/// to create though, so if you need a different layout, just create a new
/// one. They're also `Copy`, so share them freely between threads.
///
/// ```
/// use hexcanvas::{HexConfig, HexCoord, HexTransform, Point2};
///
/// let transform = HexTransform::new(HexConfig::new(5, 1.0)).unwrap();
/// assert_eq!(transform.hex_to_pixel(0.0, 0.0), Point2::new(0.5, 0.5));
/// assert_eq!(transform.pixel_to_hex(0.0, 0.0), HexCoord::new(0, 0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexTransform {
    config: HexConfig,
    dimensions: HexDimensions,
}

impl HexTransform {
    /// Initialize a new transform with the given layout. Returns an
    /// [InvalidParameter] error if the config would produce degenerate
    /// hexagons: a non-positive edge size, or a vertical scale that isn't a
    /// positive finite number.
    ///
    /// A positive edge size and scale isn't always enough though. The
    /// rounded layout constants are checked too, and these are rejected
    /// (under the `__all__` key):
    /// - A scale so small that the row spacing (`narrow_width`) is 0, or
    ///   only 1px with an odd edge size, e.g. `HexConfig::new(3, 0.1)`.
    ///   Centers would sit on row boundaries and [Self::pixel_to_hex]
    ///   couldn't find them again.
    /// - An `edge_size * v_scale` so large that the constants overflow an
    ///   `i64`.
    pub fn new(config: HexConfig) -> anyhow::Result<Self> {
        config.validate().map_err(InvalidParameter::from)?;

        if config.rotation != 0.0 {
            warn!(
                "Rotation of {} rad was given, but rotation is not applied \
                to hex grid transforms",
                config.rotation
            );
        }

        // Validation already rejects anything that's out of range
        let dimensions = HexDimensions::derive(&config)
            .ok_or_else(|| InvalidParameter::schema(out_of_range_error()))?;
        debug!(
            "Created hex transform with config {:?}, dimensions {:?}",
            config, dimensions
        );

        Ok(Self { config, dimensions })
    }

    /// Get a reference to the config that this transform was built from
    pub fn config(&self) -> &HexConfig {
        &self.config
    }

    /// Get a reference to the layout constants derived from the config
    pub fn dimensions(&self) -> &HexDimensions {
        &self.dimensions
    }

    pub fn edge_size(&self) -> i32 {
        self.config.edge_size
    }

    pub fn v_scale(&self) -> f64 {
        self.config.v_scale
    }

    /// The rotation this transform was configured with. See
    /// [HexConfig::rotation], it has no effect on any mapping.
    pub fn rotation(&self) -> f64 {
        self.config.rotation
    }

    pub fn edge_width(&self) -> u32 {
        self.config.edge_width
    }

    /// Get the pixel coordinates of the center of a hexagon. The components
    /// are normally whole numbers, but fractional values are accepted too
    /// (they're interpolated linearly). The output isn't rounded; for an odd
    /// edge size it will sit on half-pixel coordinates.
    pub fn hex_to_pixel(&self, u: f64, v: f64) -> Point2 {
        let dims = &self.dimensions;
        let y = dims.narrow_width as f64 * u + dims.twiddle;
        // edge_to_edge_width is even, so half of it is still whole
        let x = dims.edge_to_edge_width as f64 * (u * 0.5 + v) + dims.twiddle;
        Point2 { x, y }
    }

    /// Get the hex coordinates of the hexagon that contains a pixel-space
    /// point.
    ///
    /// This picks the nearest row first, then the nearest column within that
    /// row. It's exact at hexagon centers, but it isn't a true point-in-hexagon
    /// test: near the slanted edges, a point that's roughly equidistant from
    /// two centers can land on either neighbor.
    pub fn pixel_to_hex(&self, x: f64, y: f64) -> HexCoord {
        let dims = &self.dimensions;
        let u = (y / dims.narrow_width as f64).round();
        let v = (x / dims.edge_to_edge_width as f64 - u * 0.5).round();
        HexCoord {
            u: u as i64,
            v: v as i64,
        }
    }

    /// Typed version of [Self::hex_to_pixel]
    pub fn hex_center(&self, coord: HexCoord) -> Point2 {
        self.hex_to_pixel(coord.u as f64, coord.v as f64)
    }

    /// Typed version of [Self::pixel_to_hex]
    pub fn hex_at(&self, point: Point2) -> HexCoord {
        self.pixel_to_hex(point.x, point.y)
    }
}
