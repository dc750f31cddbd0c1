// File: crates/ratechart-core/tests/preconditions.rs
// Purpose: Validate input preconditions fail fast, before any drawing.

use ratechart_core::{render_line_chart, ChartError, RenderOptions, Series};

#[test]
fn mismatched_lengths_error_and_no_partial_output() {
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/mismatched.png");
    let _ = std::fs::remove_file(&out);

    let err = render_line_chart(&[1.0, 2.0], &[1.0, 2.0, 3.0], "t", "x", "y", &opts, &out)
        .expect_err("mismatched lengths must fail");
    assert!(matches!(err, ChartError::MismatchedLengths { xs: 2, ys: 3 }));

    // Validation happens before the surface is touched
    assert!(!out.exists(), "no output file may appear on precondition failure");
}

#[test]
fn empty_input_is_rejected() {
    let err = Series::from_xy(&[], &[]).expect_err("empty input must fail");
    assert!(matches!(err, ChartError::EmptyData));
}

#[test]
fn equal_lengths_construct() {
    let s = Series::from_xy(&[20.0, 30.0], &[0.22, 0.29]).expect("valid parallel input");
    assert_eq!(s.len(), 2);
    assert_eq!(s.data_xy[1], (30.0, 0.29));
}
