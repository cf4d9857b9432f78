//! Reference values for the adaptive interval estimation
//!
//! The expected intervals were produced by the histogram estimation at the
//! default precision of 1000 bins and one-sigma confidence, covering small
//! experiments, boundary cases, and trial counts up to 10^9.

use uncert_estimator::Estimator;

const EPSILON: f64 = 1e-9;

fn almost_equal(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() <= EPSILON
}

/// (successes, trials, mode, low interval, high interval)
const CASES: &[(u64, u64, f64, f64, f64)] = &[
    (0, 1, 0.0000000000, 0.0000000000, 0.4365000000),
    (0, 1000, 0.0000000000, 0.0000000000, 0.0011480000),
    (12, 34, 0.3529411765, 0.0764537806, 0.0829555041),
    (20, 34, 0.5882352941, 0.0830851394, 0.0803362080),
    (23, 34, 0.6764705882, 0.0812066670, 0.0746004179),
    (24, 34, 0.7058823529, 0.0794571706, 0.0725751108),
    (10, 19, 0.5263157895, 0.1088157895, 0.1081842105),
    (15, 19, 0.7894736842, 0.0990583653, 0.0806567289),
    (18, 19, 0.9473684211, 0.0685609070, 0.0370386604),
    (19, 19, 1.0000000000, 0.0557894737, 0.0000000000),
    (17, 40, 0.4250000000, 0.0746451789, 0.0777716785),
    (29, 40, 0.7250000000, 0.0725982940, 0.0655618229),
    (34, 40, 0.8500000000, 0.0611735403, 0.0499249241),
    (36, 40, 0.9000000000, 0.0535813106, 0.0404893495),
    (200, 340, 0.5882352941, 0.0265572879, 0.0265572879),
    (230, 340, 0.6764705882, 0.0254981074, 0.0249906824),
    (240, 340, 0.7058823529, 0.0248343791, 0.0243401626),
    (100, 190, 0.5263157895, 0.0356801839, 0.0360424192),
    (150, 190, 0.7894736842, 0.0303158039, 0.0285412203),
    (180, 190, 0.9473684211, 0.0177245476, 0.0147475108),
    (190, 190, 1.0000000000, 0.0060000000, 0.0000000000),
    (170, 400, 0.4250000000, 0.0243463927, 0.0248407357),
    (290, 400, 0.7250000000, 0.0224373424, 0.0219908282),
    (340, 400, 0.8500000000, 0.0182999103, 0.0172286961),
    (360, 400, 0.9000000000, 0.0155250000, 0.0143250000),
    (1, 1, 1.0000000000, 0.4365000000, 0.0000000000),
    (1000, 1000, 1.0000000000, 0.0011480000, 0.0000000000),
    (0, 1_000_000_000, 0.0000000000, 0.0000000000, 0.0000000011),
    (1, 1_000_000_000, 0.0000000010, 0.0000000007, 0.0000000015),
    (500_000_000, 1_000_000_000, 0.5000000000, 0.0000157323, 0.0000158904),
    (1_000_000_000, 1_000_000_000, 1.0000000000, 0.0000000011, 0.0000000000),
];

#[test]
fn reference_table() {
    for &(successes, trials, mode, low, high) in CASES {
        let estimator = Estimator::new(successes, trials);
        let (have_low, have_high) = estimator.interval_relative();

        assert!(
            almost_equal(estimator.mode(), mode),
            "{successes}/{trials}: want mode {mode:.10}, have {:.10}",
            estimator.mode()
        );
        assert!(
            almost_equal(have_low, low),
            "{successes}/{trials}: want low interval {low:.10}, have {have_low:.10}"
        );
        assert!(
            almost_equal(have_high, high),
            "{successes}/{trials}: want high interval {high:.10}, have {have_high:.10}"
        );
    }
}

#[test]
fn invalid_input() {
    for &(successes, trials) in &[(11u64, 10u64), (0, 0), (1_000_000_000, 0)] {
        let estimator = Estimator::new(successes, trials);
        let (low, high) = estimator.interval_relative();

        assert!(estimator.mode().is_nan(), "{successes}/{trials}: mode not NaN");
        assert!(low.is_nan(), "{successes}/{trials}: low interval not NaN");
        assert!(high.is_nan(), "{successes}/{trials}: high interval not NaN");
    }
}

#[test]
fn boundary_symmetry() {
    // Success/failure symmetry of the binomial likelihood at the boundaries
    let pairs = [(0u64, 1u64), (0, 1000), (0, 1_000_000_000)];
    for &(successes, trials) in &pairs {
        let zero = Estimator::new(successes, trials);
        let full = Estimator::new(trials - successes, trials);
        let (zero_low, zero_high) = zero.interval_relative();
        let (full_low, full_high) = full.interval_relative();

        assert_eq!(zero_low, 0.);
        assert_eq!(full_high, 0.);
        assert!(
            almost_equal(zero_high, full_low),
            "{successes}/{trials}: want {zero_high:.10}, have {full_low:.10}"
        );
    }
}

/// Reference quantiles for 42 successes out of 167 trials
///
/// Each quantile is queried twice: the first call triggers the histogram
/// construction, the second must reproduce the memoized result.
#[test]
fn reference_quantiles() {
    let cases: &[(f64, f64)] = &[
        (-1000., f64::NAN),
        (-0.000000001, f64::NAN),
        (0.00, 0.),
        (0.01, 0.1814949164),
        (0.05, 0.2013036611),
        (0.10, 0.2123831286),
        (0.25, 0.2315203905),
        (0.30, 0.2362207706),
        (0.50, 0.2536793253),
        (0.75, 0.2765097430),
        (0.90, 0.2979971950),
        (0.95, 0.3110911111),
        (0.99, 0.3362717188),
        (1.00, 1.),
        (1.000000001, f64::NAN),
        (1000., f64::NAN),
    ];

    let estimator = Estimator::new(42, 167);

    for &(confidence, want) in cases {
        let first = estimator.quantile(confidence);
        assert!(
            almost_equal(first, want),
            "quantile({confidence}): want {want:.10}, have {first:.10}"
        );

        let second = estimator.quantile(confidence);
        assert!(
            almost_equal(second, want),
            "quantile({confidence}) on second attempt: want {want:.10}, have {second:.10}"
        );
    }
}

#[test]
fn exhaustive_small_experiments() {
    // Every experiment up to a moderate trial count must produce a finite
    // interval
    for trials in 1u64..150 {
        for successes in 0..=trials {
            let estimator = Estimator::new(successes, trials);
            let (low, high) = estimator.interval_relative();

            assert!(
                !low.is_nan() && !high.is_nan(),
                "unexpected NaN for {successes}/{trials}: {low:.10}, {high:.10}"
            );
        }
    }
}

#[test]
fn coarse_large_experiments() {
    let mut trials = 1u64;
    while trials < 1_000_000 {
        let mut successes = 0u64;
        while successes < trials {
            let estimator = Estimator::new(successes, trials);
            let (low, high) = estimator.interval_relative();

            assert!(
                !low.is_nan() && !high.is_nan(),
                "unexpected NaN for {successes}/{trials}: {low:.10}, {high:.10}"
            );

            successes += 11_111;
        }
        trials += 111_111;
    }
}
