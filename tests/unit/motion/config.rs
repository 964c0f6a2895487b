use super::*;

#[test]
fn defaults_match_fresh_attachment() {
    let c = MotionConfig::default();
    assert_eq!(c.start_time, 1.0);
    assert_eq!(c.start_position, 0.0);
    assert_eq!(c.start_velocity, 0.0);
    assert_eq!(c.kill_velocity, 0.0);
    assert_eq!(c.acceleration, 0.0);
    assert!(c.validate().is_ok());
}

#[test]
fn missing_keys_take_defaults() {
    let c = MotionConfig::from_reader(r#"{ "start_velocity": 12.5 }"#.as_bytes()).unwrap();
    assert_eq!(c.start_velocity, 12.5);
    assert_eq!(c.start_time, 1.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = MotionConfig::from_reader(r#"{ "velocity": 3 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, AccelPathError::Validation(_)));
}

#[test]
fn negative_start_values_are_rejected() {
    let c = MotionConfig {
        start_time: -1.0,
        ..MotionConfig::default()
    };
    assert!(c.validate().is_err());

    let c = MotionConfig {
        start_position: -0.5,
        ..MotionConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    let c = MotionConfig {
        acceleration: f64::NAN,
        ..MotionConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("acceleration"));
}

#[test]
fn negative_velocities_and_acceleration_are_allowed() {
    let c = MotionConfig {
        start_velocity: -4.0,
        kill_velocity: -10.0,
        acceleration: -9.8,
        ..MotionConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn json_round_trip_preserves_fields() {
    let c = MotionConfig {
        start_time: 10.0,
        start_position: 2.0,
        start_velocity: 3.0,
        kill_velocity: 0.5,
        acceleration: -1.0,
    };
    let back = MotionConfig::from_reader(c.to_json().unwrap().as_bytes()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn missing_file_is_validation_error() {
    let err = MotionConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
