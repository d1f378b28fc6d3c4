//! 온도 → 추가 압력 구간 보간 테스트.
use zirnox_reactor_toolbox::reactor::{PressureSchedule, ReactorError, TemperatureSegment};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn nothing_added_at_or_below_base_temperature() {
    let s = PressureSchedule::standard();
    assert_eq!(s.added_pressure(20.0), 0.0);
    assert_eq!(s.added_pressure(-40.0), 0.0);
}

#[test]
fn first_segment_full_credit() {
    let s = PressureSchedule::standard();
    assert_eq!(s.added_pressure(50.0), 1.0);
    assert_close(s.added_pressure(35.0), 0.5);
}

#[test]
fn partial_segment_is_linear() {
    let s = PressureSchedule::standard();
    assert_eq!(s.added_pressure(85.0), 2.5);
    // 220~260 구간의 절반
    assert_close(s.added_pressure(240.0), 9.0);
}

#[test]
fn cumulative_values_at_segment_ends() {
    let s = PressureSchedule::standard();
    let expected = [
        (50.0, 1.0),
        (120.0, 4.0),
        (180.0, 6.0),
        (220.0, 8.0),
        (260.0, 10.0),
        (280.0, 11.0),
        (317.0, 12.0),
        (360.0, 14.0),
        (398.0, 15.0),
        (419.0, 16.0),
        (453.0, 18.0),
        (469.0, 19.0),
        (480.0, 19.0),
        (488.0, 20.0),
        (500.0, 21.0),
    ];
    for (t, bar) in expected {
        assert_close(s.added_pressure(t), bar);
    }
}

#[test]
fn flat_segment_adds_nothing() {
    let s = PressureSchedule::standard();
    assert_close(s.added_pressure(474.5), 19.0);
}

#[test]
fn beyond_last_segment_is_clamped() {
    let s = PressureSchedule::standard();
    let at_max = s.evaluate(500.0);
    assert_eq!(at_max.bar, 21.0);
    assert!(!at_max.clamped);

    let hot = s.evaluate(1_200.0);
    assert_eq!(hot.bar, 21.0);
    assert!(hot.clamped);
    assert_eq!(s.upper_bound(), Some(500.0));
    assert_eq!(s.max_added_pressure(), 21.0);
}

#[test]
fn custom_schedule_with_gap() {
    let s = PressureSchedule::new(vec![
        TemperatureSegment::new(20.0, 100.0, 4.0),
        TemperatureSegment::new(200.0, 300.0, 10.0),
    ])
    .expect("valid schedule");
    // 빈틈(100~200)에서는 더해지지 않는다.
    assert_close(s.added_pressure(150.0), 4.0);
    assert_close(s.added_pressure(250.0), 9.0);
    assert!(s.evaluate(301.0).clamped);
}

#[test]
fn zero_width_segment_is_skipped() {
    let s = PressureSchedule::new(vec![
        TemperatureSegment::new(20.0, 60.0, 2.0),
        TemperatureSegment::new(60.0, 60.0, 5.0),
        TemperatureSegment::new(60.0, 100.0, 2.0),
    ])
    .expect("valid schedule");
    assert_close(s.added_pressure(60.0), 2.0);
    assert_close(s.added_pressure(80.0), 3.0);
}

#[test]
fn rejects_overlapping_segments() {
    let err = PressureSchedule::new(vec![
        TemperatureSegment::new(20.0, 280.0, 2.0),
        TemperatureSegment::new(240.0, 300.0, 1.0),
    ])
    .unwrap_err();
    assert!(matches!(err, ReactorError::InvalidSchedule { index: 1, .. }));
}

#[test]
fn rejects_negative_delta_and_inverted_bounds() {
    let neg = PressureSchedule::new(vec![TemperatureSegment::new(20.0, 50.0, -1.0)]).unwrap_err();
    assert!(matches!(neg, ReactorError::InvalidSchedule { index: 0, .. }));

    let inverted =
        PressureSchedule::new(vec![TemperatureSegment::new(50.0, 20.0, 1.0)]).unwrap_err();
    assert!(matches!(inverted, ReactorError::InvalidSchedule { index: 0, .. }));

    let nan = PressureSchedule::new(vec![TemperatureSegment::new(20.0, f64::NAN, 1.0)]).unwrap_err();
    assert!(matches!(nan, ReactorError::InvalidSchedule { .. }));
}

#[test]
fn empty_schedule_never_adds_pressure() {
    let s = PressureSchedule::new(Vec::new()).expect("empty schedule is valid");
    assert_eq!(s.upper_bound(), None);
    let r = s.evaluate(900.0);
    assert_eq!(r.bar, 0.0);
    assert!(!r.clamped);
}
