use crate::HexConfig;
use serde::Serialize;
use std::f64::consts::PI;

/// The layout constants of a hex grid, derived from a [HexConfig]. These are
/// also what you need to draw a hexagon outline around a center point, e.g.
/// the top and bottom points are `half_wide_width` above and below the center.
///
/// The hexagons are "pointy topped": two vertices sit straight above and below
/// the center and the left and right sides are flat.
///
/// ## Rounding
///
/// Everything that gets added to a center coordinate to produce another
/// pixel coordinate is rounded to a whole number, so the twiddle of the center
/// carries through to every vertex. The order matters: `edge_to_edge_width`
/// and `narrow_width` are built from the **rounded** intermediate values.
/// Computing them from the raw trig values instead will break the round trip
/// between the two mapping directions for some sizes.
///
/// All rounding is half away from zero ([f64::round]).
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct HexDimensions {
    /// Sub-pixel offset applied to every center: 0.5 for odd edge sizes,
    /// 0 for even.
    pub twiddle: f64,
    /// Height of the triangular cap above (and below) the hexagon's central
    /// rectangle, unscaled.
    pub h: f64,
    /// Half the width of the hexagon, i.e. the center-to-flat-side distance.
    pub r: f64,
    /// Distance from the center to the top (or bottom) point, scaled.
    pub half_wide_width: i64,
    /// Distance between the top and bottom points, scaled.
    pub wide_width: i64,
    /// Distance between the two flat sides. Always even.
    pub edge_to_edge_width: i64,
    /// Half of one side's length, scaled. The vertical distance from the
    /// center to the four side vertices.
    pub scaled_half_edge_size: i64,
    /// Vertical distance between the centers of hexagons in adjacent rows.
    /// Not a measurement of any single hexagon.
    pub narrow_width: i64,
}

impl HexDimensions {
    /// Derive the full set of layout constants. Doesn't validate anything, so
    /// a bad config will produce junk (e.g. zero or negative sizes). Returns
    /// `None` if any of the whole-pixel constants doesn't fit in an `i64`.
    pub(crate) fn derive(config: &HexConfig) -> Option<Self> {
        let edge_size = f64::from(config.edge_size);
        let v_scale = config.v_scale;

        let twiddle = if config.edge_size % 2 == 0 { 0.0 } else { 0.5 };

        let h = (30.0 * PI / 180.0).sin() * edge_size;
        let r = (30.0 * PI / 180.0).cos() * edge_size;

        let half_wide_width =
            round_to_whole(v_scale * (edge_size / 2.0 + h))?;
        let wide_width = half_wide_width.checked_mul(2)?;

        // Even so that halving it (for the row offset) stays whole
        let edge_to_edge_width = round_to_whole(r)?.checked_mul(2)?;
        let scaled_half_edge_size =
            round_to_whole(v_scale * (edge_size / 2.0))?;

        // Could be edge_size + h, but it has to agree with the rounded values
        let narrow_width = half_wide_width.checked_add(scaled_half_edge_size)?;

        Some(Self {
            twiddle,
            h,
            r,
            half_wide_width,
            wide_width,
            edge_to_edge_width,
            scaled_half_edge_size,
            narrow_width,
        })
    }
}

/// Round half away from zero, or `None` if the result is out of range for an
/// `i64` (a plain `as` cast would saturate)
fn round_to_whole(value: f64) -> Option<i64> {
    let rounded = value.round();
    // i64::MAX as f64 is 2^63, the first value that's out of range
    if rounded.abs() < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}
