use super::*;

#[test]
fn named_units_resolve() {
    assert_eq!(resolve_fps("game").unwrap().as_f64(), 15.0);
    assert_eq!(resolve_fps("film").unwrap().as_f64(), 24.0);
    assert_eq!(resolve_fps("pal").unwrap().as_f64(), 25.0);
    assert_eq!(resolve_fps("ntsc").unwrap().as_f64(), 30.0);
    assert_eq!(resolve_fps("show").unwrap().as_f64(), 48.0);
    assert_eq!(resolve_fps("palf").unwrap().as_f64(), 50.0);
    assert_eq!(resolve_fps("ntscf").unwrap().as_f64(), 60.0);
}

#[test]
fn drop_frame_units_are_exact_rationals() {
    assert_eq!(
        TimeUnit::Fps23_976.fps(),
        Fps {
            num: 24000,
            den: 1001
        }
    );
    assert_eq!(TimeUnit::Fps29_97.fps(), TimeUnit::Fps29_97Df.fps());
    assert_eq!(
        resolve_fps("59.94fps").unwrap().as_f64(),
        60.0 * 1000.0 / 1001.0
    );
}

#[test]
fn sample_rate_units() {
    assert_eq!(resolve_fps("44100fps").unwrap().num, 44100);
    assert_eq!(resolve_fps("48000fps").unwrap().num, 48000);
}

#[test]
fn unknown_identifier_is_invalid_frame_rate() {
    let err = resolve_fps("7fps").unwrap_err();
    assert!(matches!(err, AccelPathError::InvalidFrameRate(_)));
    assert!(err.to_string().contains("7fps"));
}

#[test]
fn identifiers_round_trip_through_table() {
    for &unit in TimeUnit::ALL {
        assert_eq!(unit.identifier().parse::<TimeUnit>().unwrap(), unit);
        assert!(unit.fps().validate().is_ok());
    }
    assert_eq!(TimeUnit::ALL.len(), 45);
}

#[test]
fn serde_uses_identifier_strings() {
    let json = serde_json::to_string(&TimeUnit::Fps29_97Df).unwrap();
    assert_eq!(json, "\"29.97df\"");
    let unit: TimeUnit = serde_json::from_str("\"palf\"").unwrap();
    assert_eq!(unit, TimeUnit::PalField);
    assert!(serde_json::from_str::<TimeUnit>("\"bogus\"").is_err());
}
