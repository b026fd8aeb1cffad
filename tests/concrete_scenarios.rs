//! The six concrete literal-input scenarios used to pin down engine
//! behavior end to end, plus the dispatcher/oracle cross-check at the
//! small/large threshold.

use approx::abs_diff_eq;
use sliding_median::{oracle::oracle, sliding_median, NanPolicy};

fn assert_all_close(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len());
    for (i, (&g, &e)) in got.iter().zip(expected.iter()).enumerate() {
        let equal = if g.is_nan() && e.is_nan() {
            true
        } else if g.is_infinite() && e.is_infinite() {
            g.signum() == e.signum()
        } else {
            abs_diff_eq!(g, e, epsilon = 1e-9)
        };
        assert!(equal, "mismatch at index {i}: got {g}, expected {e}");
    }
}

#[test]
fn scenario_1_constant_sequence() {
    let x = [7.0; 10];
    let mut y = [0.0; 6];
    for policy in [NanPolicy::Poison, NanPolicy::Exclude] {
        sliding_median(&x, 5, 1, policy, &mut y).unwrap();
        assert_all_close(&y, &[7.0; 6]);
    }
}

#[test]
fn scenario_2_all_nan() {
    let x = [f64::NAN; 10];
    let mut y = [0.0; 6];
    for policy in [NanPolicy::Poison, NanPolicy::Exclude] {
        sliding_median(&x, 5, 1, policy, &mut y).unwrap();
        assert_all_close(&y, &[f64::NAN; 6]);
    }
}

#[test]
fn scenario_3_single_finite_among_nans() {
    let x = [
        f64::NAN,
        f64::NAN,
        f64::NAN,
        f64::NAN,
        f64::NAN,
        42.5,
        f64::NAN,
        f64::NAN,
        f64::NAN,
        f64::NAN,
    ];
    let mut y = [0.0; 6];

    sliding_median(&x, 5, 1, NanPolicy::Exclude, &mut y).unwrap();
    assert_all_close(&y, &[f64::NAN, 42.5, 42.5, 42.5, 42.5, 42.5]);

    sliding_median(&x, 5, 1, NanPolicy::Poison, &mut y).unwrap();
    assert_all_close(&y, &[f64::NAN; 6]);
}

#[test]
fn scenario_4_infinities_participate() {
    let x = [
        f64::NAN,
        f64::NAN,
        f64::NAN,
        f64::INFINITY,
        42.5,
        50.0,
        f64::NEG_INFINITY,
        f64::NAN,
        f64::NAN,
        f64::NAN,
    ];
    let mut y = [0.0; 6];
    sliding_median(&x, 5, 1, NanPolicy::Exclude, &mut y).unwrap();
    assert_all_close(&y[..3], &[f64::INFINITY, 50.0, 46.25]);
}

#[test]
fn scenario_5_large_window_stride() {
    let x = [7.0; 20];
    let mut y = [0.0; 11];
    for policy in [NanPolicy::Poison, NanPolicy::Exclude] {
        sliding_median(&x, 10, 1, policy, &mut y).unwrap();
        assert_all_close(&y, &[7.0; 11]);
    }
}

#[test]
fn scenario_6_dispatcher_bounds_agree_with_oracle() {
    let x: Vec<f64> = (0..16)
        .map(|i| {
            if i % 5 == 0 {
                f64::NAN
            } else {
                ((i * 13) % 11) as f64 - 5.0
            }
        })
        .collect();

    for &w in &[8usize, 9usize] {
        let m = (x.len() - w) / 1 + 1;
        let mut y = vec![0.0; m];
        let mut y_oracle = vec![0.0; m];
        sliding_median(&x, w, 1, NanPolicy::Exclude, &mut y).unwrap();
        oracle(&x, w, 1, NanPolicy::Exclude, &mut y_oracle).unwrap();
        assert_all_close(&y, &y_oracle);
    }
}
