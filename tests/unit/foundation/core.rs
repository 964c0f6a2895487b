use super::*;

#[test]
fn fps_rejects_zero_components() {
    assert!(matches!(
        Fps::new(0, 1),
        Err(AccelPathError::InvalidFrameRate(_))
    ));
    assert!(matches!(
        Fps::new(24, 0),
        Err(AccelPathError::InvalidFrameRate(_))
    ));
    let raw = Fps { num: 30, den: 0 };
    assert!(raw.validate().is_err());
}

#[test]
fn drop_frame_rate_matches_float_formula() {
    let fps = Fps::new(24000, 1001).unwrap();
    assert_eq!(fps.as_f64(), 24.0 * 1000.0 / 1001.0);
}

#[test]
fn display_shows_integer_or_ratio() {
    assert_eq!(Fps::integer(25).unwrap().to_string(), "25");
    assert_eq!(
        Fps::new(30000, 1001).unwrap().to_string(),
        "30000/1001 (~29.970)"
    );
}
