use crate::transform::HexDimensions;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Configuration that defines the layout of a hex grid in pixel space. Two
/// transforms built from the same config will always map identically.
///
/// A config is only a bag of parameters. It gets checked when it's handed to
/// [HexTransform::new](crate::HexTransform::new), which refuses anything that
/// would produce degenerate hexagons.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_row_spacing"))]
#[serde(default)]
pub struct HexConfig {
    /// Length of one side of a hexagon, in pixels. If this is odd, hexagon
    /// centers land on half-pixel coordinates (`n + 0.5`), because canvas
    /// coordinates sit between pixels. As a rule of thumb, even line widths
    /// look sharper with even edge sizes and odd line widths look sharper
    /// with odd edge sizes.
    #[validate(range(min = 1))]
    pub edge_size: i32,

    /// Vertical scale factor. Anything other than 1.0 squashes (or stretches)
    /// the grid vertically to give an oblique perspective, e.g. 0.5 makes the
    /// grid look like it's lying on a table in front of the viewer.
    #[validate(custom = "validate_v_scale")]
    pub v_scale: f64,

    /// Clockwise rotation of the hex grid relative to pixel space, in
    /// radians. **This is stored but not applied.** Neither mapping direction
    /// takes it into account.
    pub rotation: f64,

    /// Width of the line used to draw hexagon edges. Never used internally,
    /// it's only carried along for the convenience of whoever draws the grid.
    pub edge_width: u32,
}

impl HexConfig {
    /// Create a config with the given hexagon size and vertical scale. The
    /// other fields take their default values.
    pub fn new(edge_size: i32, v_scale: f64) -> Self {
        Self {
            edge_size,
            v_scale,
            ..Default::default()
        }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    pub fn with_edge_width(self, edge_width: u32) -> Self {
        Self { edge_width, ..self }
    }
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            edge_size: 45,
            v_scale: 1.0,
            rotation: 0.0,
            edge_width: 0,
        }
    }
}

/// Error returned when a [HexConfig] can't produce a usable grid. Holds the
/// full set of validation failures, keyed by field name. Failures that span
/// multiple fields are stored under `__all__`.
#[derive(Clone, Debug, Display)]
#[display(fmt = "invalid hex grid parameter: {}", _0)]
pub struct InvalidParameter(ValidationErrors);

impl InvalidParameter {
    pub fn errors(&self) -> &ValidationErrors {
        &self.0
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.0
    }
}

impl InvalidParameter {
    /// Wrap a single failure that spans multiple fields
    pub(crate) fn schema(error: ValidationError) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add("__all__", error);
        Self(errors)
    }
}

impl From<ValidationErrors> for InvalidParameter {
    fn from(errors: ValidationErrors) -> Self {
        Self(errors)
    }
}

impl std::error::Error for InvalidParameter {}

fn validation_error(
    code: &'static str,
    message: &'static str,
) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_v_scale(v_scale: f64) -> Result<(), ValidationError> {
    if !v_scale.is_finite() {
        Err(validation_error("finite", "v_scale must be a finite number"))
    } else if v_scale <= 0.0 {
        Err(validation_error("range", "v_scale must be greater than 0"))
    } else {
        Ok(())
    }
}

pub(crate) fn out_of_range_error() -> ValidationError {
    validation_error(
        "out_of_range",
        "edge_size * v_scale is too large, layout constants don't fit in i64",
    )
}

/// The rounded row spacing has to leave room for the half-pixel twiddle. With
/// an odd edge size and rows only one pixel apart, every hexagon center lands
/// on the boundary between two rows and [HexTransform::pixel_to_hex] can't
/// find its way back. Zero spacing is broken for any edge size.
///
/// The layout constants also have to fit in an `i64`.
///
/// [HexTransform::pixel_to_hex]: crate::HexTransform::pixel_to_hex
fn validate_row_spacing(config: &HexConfig) -> Result<(), ValidationError> {
    let dimensions =
        HexDimensions::derive(config).ok_or_else(out_of_range_error)?;
    if dimensions.narrow_width as f64 > 2.0 * dimensions.twiddle {
        Ok(())
    } else {
        Err(validation_error(
            "row_spacing",
            "v_scale is too small for edge_size, hex rows would overlap",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_default_is_valid() {
        assert!(HexConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = HexConfig::new(5, 0.5)
            .with_rotation(1.0)
            .with_edge_width(3);
        assert_eq!(config.edge_size, 5);
        assert_eq!(config.v_scale, 0.5);
        assert_eq!(config.rotation, 1.0);
        assert_eq!(config.edge_width, 3);
    }

    #[test]
    fn test_v_scale_validation() {
        assert!(validate_v_scale(0.5).is_ok());
        assert!(validate_v_scale(0.0).is_err());
        assert!(validate_v_scale(-1.0).is_err());
        assert!(validate_v_scale(f64::NAN).is_err());
        assert!(validate_v_scale(f64::INFINITY).is_err());
    }

    #[test]
    fn test_row_spacing_validation() {
        // Odd edge size => rows need at least 2px
        assert!(validate_row_spacing(&HexConfig::new(1, 1.0)).is_ok());
        assert!(validate_row_spacing(&HexConfig::new(1, 0.2)).is_err());
        // 1px rows, centers would sit on the boundary
        assert!(validate_row_spacing(&HexConfig::new(1, 0.6)).is_err());
        // Even edge size => no twiddle, 1px rows are fine
        assert!(validate_row_spacing(&HexConfig::new(2, 0.3)).is_ok());
        assert!(validate_row_spacing(&HexConfig::new(2, 0.1)).is_err());
    }

    #[test]
    fn test_row_spacing_out_of_range() {
        let config = HexConfig::new(i32::MAX, 1e12);
        let error = validate_row_spacing(&config).unwrap_err();
        assert_eq!(error.code, "out_of_range");
        assert!(validate_row_spacing(&HexConfig::new(i32::MAX, 1.0)).is_ok());
    }

    #[test]
    fn test_serde_tokens() {
        assert_tokens(
            &HexConfig::new(5, 0.5).with_edge_width(5),
            &[
                Token::Struct {
                    name: "HexConfig",
                    len: 4,
                },
                Token::Str("edge_size"),
                Token::I32(5),
                Token::Str("v_scale"),
                Token::F64(0.5),
                Token::Str("rotation"),
                Token::F64(0.0),
                Token::Str("edge_width"),
                Token::U32(5),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_partial_deserialize() {
        let config: HexConfig =
            serde_json::from_str(r#"{"edge_size": 5, "v_scale": 0.5}"#)
                .unwrap();
        assert_eq!(config, HexConfig::new(5, 0.5));
    }

    #[test]
    fn test_fractional_edge_size_rejected() {
        let result = serde_json::from_str::<HexConfig>(r#"{"edge_size": 5.5}"#);
        assert!(result.is_err());
    }
}
