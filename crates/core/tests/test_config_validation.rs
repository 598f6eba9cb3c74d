use hexcanvas::{HexConfig, HexTransform, InvalidParameter};

/// Build a transform that's expected to fail, and get the names of all the
/// fields that failed validation
fn error_fields(config: HexConfig) -> Vec<&'static str> {
    let err = HexTransform::new(config).unwrap_err();
    let invalid = err.downcast::<InvalidParameter>().unwrap();
    let mut error_fields = invalid
        .errors()
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_zero_edge_size() {
    let fields = error_fields(HexConfig::new(0, 1.0));
    assert!(fields.contains(&"edge_size"), "got {:?}", fields);
}

#[test]
fn test_negative_edge_size() {
    let fields = error_fields(HexConfig::new(-3, 1.0));
    assert!(fields.contains(&"edge_size"), "got {:?}", fields);
}

#[test]
fn test_zero_v_scale() {
    assert_eq!(error_fields(HexConfig::new(5, 0.0)), vec!["v_scale"]);
}

#[test]
fn test_negative_v_scale() {
    assert_eq!(error_fields(HexConfig::new(5, -0.5)), vec!["v_scale"]);
}

#[test]
fn test_non_finite_v_scale() {
    assert_eq!(error_fields(HexConfig::new(5, f64::NAN)), vec!["v_scale"]);
    assert_eq!(error_fields(HexConfig::new(5, f64::INFINITY)), vec!["v_scale"]);
}

#[test]
fn test_collapsed_rows() {
    // Rows are 0px apart at this scale
    assert_eq!(error_fields(HexConfig::new(3, 0.1)), vec!["__all__"]);
}

#[test]
fn test_odd_edge_size_single_pixel_rows() {
    // Rows are 1px apart, so centers sit right on the row boundaries
    assert_eq!(error_fields(HexConfig::new(1, 0.6)), vec!["__all__"]);
}

#[test]
fn test_layout_overflow() {
    assert_eq!(error_fields(HexConfig::new(i32::MAX, 1e12)), vec!["__all__"]);
    assert_eq!(error_fields(HexConfig::new(5, 1e300)), vec!["__all__"]);
    assert_eq!(error_fields(HexConfig::new(3, f64::MAX)), vec!["__all__"]);
}

#[test]
fn test_multiple_errors() {
    let fields = error_fields(HexConfig::new(-1, 0.0));
    assert!(fields.contains(&"edge_size"), "got {:?}", fields);
    assert!(fields.contains(&"v_scale"), "got {:?}", fields);
}

#[test]
fn test_error_message() {
    let err = HexTransform::new(HexConfig::new(5, 0.0)).unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("invalid hex grid parameter"),
        "unexpected message {:?}",
        message
    );
}

#[test]
fn test_valid_configs() {
    for &(edge_size, v_scale) in
        &[(1, 1.0), (2, 0.3), (5, 0.5), (45, 0.5), (1000, 2.0), (i32::MAX, 1.0)]
    {
        let config = HexConfig::new(edge_size, v_scale);
        assert!(
            HexTransform::new(config).is_ok(),
            "expected {:?} to be valid",
            config
        );
    }
}
