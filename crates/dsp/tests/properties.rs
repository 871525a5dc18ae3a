//! Property-based tests for the median filter
//!
//! Output is checked against an independent reference: sort the neighbourhood
//! with the standard library and average the two central values in the window's
//! lane type.

use median_dsp::{
    filter_into, filter_into_parallel, median_filter, FilterConfig, SortStrategy, WindowSize,
};
use median_sortnet::{ComparisonBackend, NetworkBackend, Window16, Window8};
use proptest::prelude::*;

fn reference_median(neighbourhood: &[i32]) -> i32 {
    let r = neighbourhood.len() / 2;
    if neighbourhood.len() == 8 {
        let mut lanes: Vec<f64> = neighbourhood.iter().map(|&s| s as f64).collect();
        lanes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ((lanes[r - 1] + lanes[r]) * 0.5) as i32
    } else {
        let mut lanes: Vec<f32> = neighbourhood.iter().map(|&s| s as f32).collect();
        lanes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ((lanes[r - 1] + lanes[r]) * 0.5) as i32
    }
}

fn reference_filter(input: &[i32], size: usize) -> Vec<i32> {
    let r = size / 2;
    let mut output = input.to_vec();
    for i in r..input.len() - r {
        output[i] = reference_median(&input[i - r..i + r]);
    }
    output
}

fn sample() -> impl Strategy<Value = i32> {
    prop_oneof![
        3 => any::<i32>(),
        3 => -50i32..50,
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
    ]
}

fn window_size() -> impl Strategy<Value = WindowSize> {
    prop_oneof![Just(WindowSize::Eight), Just(WindowSize::Sixteen)]
}

fn strategy() -> impl Strategy<Value = SortStrategy> {
    prop_oneof![
        Just(SortStrategy::Auto),
        Just(SortStrategy::Comparison),
        Just(SortStrategy::Network),
    ]
}

proptest! {
    #[test]
    fn test_matches_reference(
        window in window_size(),
        strategy in strategy(),
        input in prop::collection::vec(sample(), 16..400),
    ) {
        let config = FilterConfig::new(window).with_strategy(strategy);
        let output = median_filter(&input, &config).unwrap();
        prop_assert_eq!(output, reference_filter(&input, window.size()));
    }

    #[test]
    fn test_length_and_edges_preserved(
        window in window_size(),
        input in prop::collection::vec(any::<i32>(), 16..300),
    ) {
        let output = median_filter(&input, &FilterConfig::new(window)).unwrap();
        let r = window.radius();
        prop_assert_eq!(output.len(), input.len());
        prop_assert_eq!(&output[..r], &input[..r]);
        prop_assert_eq!(&output[input.len() - r..], &input[input.len() - r..]);
    }

    #[test]
    fn test_constant_input_is_fixed_point_eight(
        value in any::<i32>(),
        len in 8usize..200,
    ) {
        // every i32 is exact in f64
        let input = vec![value; len];
        let output = median_filter(&input, &FilterConfig::new(WindowSize::Eight)).unwrap();
        prop_assert_eq!(output, input);
    }

    #[test]
    fn test_constant_input_is_fixed_point_sixteen(
        value in -(1i32 << 24)..=(1i32 << 24),
        len in 16usize..200,
    ) {
        // |v| <= 2^24 is exact in f32
        let input = vec![value; len];
        let output = median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap();
        prop_assert_eq!(output, input);
    }

    #[test]
    fn test_large_constant_sixteen_rounds_through_f32(
        value in any::<i32>(),
        len in 17usize..200,
    ) {
        let input = vec![value; len];
        let output = median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap();
        let rounded = (value as f32) as i32;
        prop_assert_eq!(&output[..8], &input[..8]);
        prop_assert_eq!(&output[len - 8..], &input[len - 8..]);
        prop_assert!(output[8..len - 8].iter().all(|&s| s == rounded));
    }

    #[test]
    fn test_backends_produce_identical_output(
        window in window_size(),
        input in prop::collection::vec(sample(), 16..300),
    ) {
        let comparison = median_filter(
            &input,
            &FilterConfig::new(window).with_strategy(SortStrategy::Comparison),
        ).unwrap();
        let network = median_filter(
            &input,
            &FilterConfig::new(window).with_strategy(SortStrategy::Network),
        ).unwrap();
        prop_assert_eq!(comparison, network);
    }

    #[test]
    fn test_parallel_matches_sequential(
        input in prop::collection::vec(sample(), 16..600),
        workers in 1usize..6,
    ) {
        let mut sequential = vec![0; input.len()];
        let mut parallel = vec![0; input.len()];

        let a = filter_into::<Window8, NetworkBackend>(&input, &mut sequential).unwrap();
        let b = filter_into_parallel::<Window8, NetworkBackend>(&input, &mut parallel, workers).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(&sequential, &parallel);

        let a = filter_into::<Window16, ComparisonBackend>(&input, &mut sequential).unwrap();
        let b = filter_into_parallel::<Window16, ComparisonBackend>(&input, &mut parallel, workers).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_sixteen_constant_above_f32_precision() {
    // 25_513_507 is not representable in f32; the nearest value is 25_513_508
    let input = vec![25_513_507; 17];
    let output = median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap();
    assert_eq!(output[8], 25_513_508);
    assert_eq!(output[8], (25_513_507f32) as i32);

    let output = median_filter(&input, &FilterConfig::new(WindowSize::Eight)).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_parallel_threshold_path_matches_sequential() {
    let len = median_dsp::PARALLEL_POSITION_THRESHOLD + 64;
    let input: Vec<i32> = (0..len as i64)
        .map(|i| ((i * 2_654_435_761) % 65_521 - 32_760) as i32)
        .collect();

    let sequential = median_filter(&input, &FilterConfig::new(WindowSize::Sixteen)).unwrap();
    let parallel = median_filter(
        &input,
        &FilterConfig::new(WindowSize::Sixteen).with_workers(4),
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}
