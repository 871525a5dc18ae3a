//! Median filter driver tests
//!
//! Concrete scenarios, boundaries and error paths for a full pass.

use median_dsp::{
    median_filter, median_filter_timed, BackendType, FilterConfig, FilterError, SortStrategy,
    WindowSize,
};
use median_timing::ManualClock;

#[test]
fn test_window8_ramp_scenario() {
    let input: Vec<i32> = (1..=12).collect();
    let output = median_filter(&input, &FilterConfig::new(WindowSize::Eight)).unwrap();

    // window [1..=8], (4 + 5) * 0.5 = 4.5 truncated
    assert_eq!(output[4], 4);
    assert_eq!(output, vec![1, 2, 3, 4, 4, 5, 6, 7, 9, 10, 11, 12]);
}

#[test]
fn test_window16_ramp() {
    let input: Vec<i32> = (0..20).collect();
    let output = median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap();

    // position 8 sees 0..16, central lanes 7 and 8 → 7.5
    assert_eq!(output[8], 7);
    assert_eq!(&output[..8], &input[..8]);
    assert_eq!(&output[12..], &input[12..]);
    assert_eq!(&output[8..12], &[7, 8, 9, 10]);
}

#[test]
fn test_exactly_one_window_is_all_edges() {
    for window in [WindowSize::Eight, WindowSize::Sixteen] {
        let input: Vec<i32> = (0..window.size() as i32).map(|i| i * 1000 - 3).rev().collect();
        let report = median_filter_timed(&input, &FilterConfig::new(window), ManualClock::new(0)).unwrap();
        assert_eq!(report.output, input);
        assert_eq!(report.computed, 0);
    }
}

#[test]
fn test_one_past_window_computes_one_position() {
    let input = vec![9, 1, 8, 2, 7, 3, 6, 4, 5];
    let report =
        median_filter_timed(&input, &FilterConfig::new(WindowSize::Eight), ManualClock::new(0)).unwrap();

    assert_eq!(report.computed, 1);
    // window 9 1 8 2 7 3 6 4 → sorted 1 2 3 4 6 7 8 9 → (4 + 6) / 2
    assert_eq!(report.output[4], 5);
    let mut expected = input.clone();
    expected[4] = 5;
    assert_eq!(report.output, expected);
}

#[test]
fn test_too_few_samples_rejected() {
    let input = vec![5; 15];
    let err = median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap_err();
    assert!(matches!(
        err,
        FilterError::TooFewSamples {
            required: 16,
            actual: 15
        }
    ));

    let err = median_filter(&[], &FilterConfig::new(WindowSize::Eight)).unwrap_err();
    assert!(matches!(err, FilterError::TooFewSamples { actual: 0, .. }));
}

#[test]
fn test_zero_workers_rejected() {
    let input = vec![0; 32];
    let config = FilterConfig::new(WindowSize::Eight).with_workers(0);
    assert!(matches!(
        median_filter(&input, &config),
        Err(FilterError::InvalidWorkerCount(0))
    ));
}

#[test]
fn test_impulse_is_removed() {
    let mut input = vec![100; 64];
    input[32] = i32::MAX;
    input[40] = i32::MIN;

    for window in [WindowSize::Eight, WindowSize::Sixteen] {
        let output = median_filter(&input, &FilterConfig::new(window)).unwrap();
        assert_eq!(output, vec![100; 64], "window {}", window);
    }
}

#[test]
fn test_timed_report() {
    let input: Vec<i32> = (0..100).collect();
    let clock = ManualClock::with_step(0, 1_234_567_890);
    let config = FilterConfig::new(WindowSize::Sixteen).with_strategy(SortStrategy::Network);
    let report = median_filter_timed(&input, &config, &clock).unwrap();

    assert_eq!(report.backend, BackendType::Network);
    assert_eq!(report.window, WindowSize::Sixteen);
    assert_eq!(report.computed, 84);
    assert_eq!(report.elapsed.as_nanos(), 1_234_567_890);
    assert_eq!(report.output, median_filter(&input, &config).unwrap());
}

#[test]
fn test_timed_parallel_report_brackets_sweep_only() {
    let len = median_dsp::PARALLEL_POSITION_THRESHOLD + 16;
    let input: Vec<i32> = (0..len as i64).map(|i| ((i * 7919) % 2003 - 1000) as i32).collect();
    let config = FilterConfig::new(WindowSize::Sixteen).with_workers(4);

    // Two readings, one step apart: nothing else may consult the clock
    let clock = ManualClock::with_step(0, 7);
    let report = median_filter_timed(&input, &config, &clock).unwrap();

    assert_eq!(report.elapsed.as_nanos(), 7);
    assert_eq!(report.computed, len - 16);
    assert_eq!(
        report.output,
        median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap()
    );
}

#[test]
fn test_timing_does_not_affect_output() {
    let input: Vec<i32> = (0..256).map(|i| (i * 7919) % 1013 - 500).collect();
    let config = FilterConfig::new(WindowSize::Eight);
    let fast = median_filter_timed(&input, &config, ManualClock::with_step(0, 1)).unwrap();
    let slow = median_filter_timed(&input, &config, ManualClock::with_step(0, u64::MAX / 4)).unwrap();
    assert_eq!(fast.output, slow.output);
}

#[test]
fn test_avx512_request_fails_or_matches() {
    let input: Vec<i32> = (0..64).map(|i| (i * 37) % 11).collect();
    let config = FilterConfig::new(WindowSize::Eight).with_strategy(SortStrategy::Avx512);
    match median_filter(&input, &config) {
        Ok(output) => {
            let reference = median_filter(
                &input,
                &config.with_strategy(SortStrategy::Comparison),
            )
            .unwrap();
            assert_eq!(output, reference);
        }
        Err(err) => assert!(matches!(err, FilterError::UnavailableBackend(_))),
    }
}
