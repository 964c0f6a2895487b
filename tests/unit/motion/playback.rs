use super::*;
use crate::motion::config::MotionConfig;
use crate::motion::state::Phase;

#[test]
fn span_validation() {
    assert!(FrameSpan::new(1.0, 0.0, 1.0).is_err());
    assert!(FrameSpan::new(0.0, 10.0, 0.0).is_err());
    assert!(FrameSpan::new(0.0, 10.0, -1.0).is_err());
    assert!(FrameSpan::new(0.0, f64::INFINITY, 1.0).is_err());
}

#[test]
fn span_rejects_unbounded_sample_counts() {
    let err = FrameSpan::new(0.0, 1.0e300, 1.0e-300).unwrap_err();
    assert!(matches!(err, AccelPathError::Validation(_)));
    assert!(FrameSpan::new(0.0, 1.0e12, 1.0).is_err());
    assert!(FrameSpan::new(0.0, MAX_SPAN_SAMPLES as f64, 1.0).is_err());

    let widest = FrameSpan::new(0.0, (MAX_SPAN_SAMPLES - 1) as f64, 1.0).unwrap();
    assert_eq!(widest.len(), MAX_SPAN_SAMPLES);
    assert!(!widest.is_empty());
}

#[test]
fn span_accessors_report_bounds() {
    let span = FrameSpan::new(2.0, 8.0, 0.5).unwrap();
    assert_eq!((span.start(), span.end(), span.step()), (2.0, 8.0, 0.5));
    assert_eq!(span.len(), 13);
}

#[test]
fn span_times_include_end() {
    let span = FrameSpan::new(1.0, 5.0, 1.0).unwrap();
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert_eq!(span.times().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let span = FrameSpan::new(0.0, 1.0, 0.1).unwrap();
    assert_eq!(span.len(), 11);

    let single = FrameSpan::new(3.0, 3.0, 1.0).unwrap();
    assert_eq!(single.times().collect::<Vec<_>>(), vec![3.0]);
}

#[test]
fn sample_span_steps_in_order() {
    let mut f = PathFollower::new(MotionConfig {
        start_velocity: 5.0,
        ..MotionConfig::default()
    })
    .unwrap();
    let span = FrameSpan::new(0.0, 25.0, 1.0).unwrap();
    let rows = sample_span(&mut f, span, 100.0, Fps::integer(24).unwrap()).unwrap();

    assert_eq!(rows.len(), 26);
    assert_eq!(rows[0].evaluation.phase(), Phase::PreStart);
    assert_eq!(rows[1].evaluation.phase(), Phase::PreStart);
    assert_eq!(rows[2].evaluation.phase(), Phase::Moving);
    let last = rows.last().unwrap();
    assert_eq!(last.time, 25.0);
    assert!((last.evaluation.u() - 0.05).abs() < 1e-9);
    for pair in rows.windows(2) {
        assert!(pair[1].evaluation.u() >= pair[0].evaluation.u());
    }
}

#[test]
fn sample_span_stops_on_error() {
    let mut f = PathFollower::new(MotionConfig::default()).unwrap();
    let span = FrameSpan::new(0.0, 3.0, 1.0).unwrap();
    let err = sample_span(&mut f, span, -1.0, Fps::integer(24).unwrap()).unwrap_err();
    assert!(matches!(err, AccelPathError::DivisionDomain { .. }));
    assert!(f.state().is_none());
}
