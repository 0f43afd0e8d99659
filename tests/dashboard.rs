use sales_lens::{
    CategoryTotal, ChartError, Dashboard, SalesSeries, build_pie_chart, extrema, sample_inputs,
    smooth,
};

const TOLERANCE: f64 = 1e-9;

#[test]
fn sample_month_peaks_on_day_nine() {
    let inputs = sample_inputs().unwrap();
    let result = extrema(&inputs.series).unwrap();
    assert_eq!(result.max().value, 450.0);
    assert_eq!(result.max().day, 9);
}

#[test]
fn sample_month_lows_are_found_from_data() {
    let inputs = sample_inputs().unwrap();
    let result = extrema(&inputs.series).unwrap();
    assert_eq!(result.min_days(), vec![5, 15, 29]);
    assert!(result.mins().iter().all(|r| r.value == 100.0));
}

#[test]
fn smoothed_curve_spans_the_month_and_hits_every_day() {
    let inputs = sample_inputs().unwrap();
    let curve = smooth(&inputs.series, 300).unwrap();

    assert_eq!(curve.len(), 300);
    assert_eq!(curve.samples[0].x, 1.0);
    assert_eq!(curve.samples[299].x, 30.0);

    let spline = curve.interpolant();
    for r in inputs.series.records() {
        let y = spline.eval(f64::from(r.day));
        assert!(
            (y - r.value).abs() < TOLERANCE * r.value.max(1.0),
            "day {}: expected {}, got {}",
            r.day,
            r.value,
            y
        );
    }
}

#[test]
fn pie_shares_are_totals_over_fourteen_hundred() {
    let inputs = sample_inputs().unwrap();
    let spec = build_pie_chart(&inputs.categories).unwrap();
    let slices: Vec<_> = spec.slices().collect();

    assert_eq!(slices.len(), 4);
    let sum: f64 = slices.iter().map(|s| s.fraction).sum();
    assert!((sum - 1.0).abs() < TOLERANCE);
    for (slice, expected) in slices.iter().zip([500.0, 300.0, 400.0, 200.0]) {
        assert!((slice.fraction - expected / 1400.0).abs() < TOLERANCE);
    }
}

#[test]
fn empty_inputs_fail_instead_of_degrading() {
    assert!(matches!(extrema(&[]), Err(ChartError::InvalidInput(_))));
    assert!(matches!(
        smooth(&[], 300),
        Err(ChartError::InsufficientData { needed: 4, got: 0 })
    ));
    assert!(matches!(build_pie_chart(&[]), Err(ChartError::InvalidInput(_))));
}

#[test]
fn short_series_cannot_be_smoothed() {
    let series = SalesSeries::from_daily_values(&[10.0, 20.0, 15.0]).unwrap();
    let err = smooth(&series, 50).unwrap_err();
    assert_eq!(err, ChartError::InsufficientData { needed: 4, got: 3 });
}

#[test]
fn dashboard_build_surfaces_category_errors() {
    let mut inputs = sample_inputs().unwrap();
    inputs.categories = vec![CategoryTotal::new("Empty", 0.0)];
    assert!(matches!(
        Dashboard::build(&inputs, 100),
        Err(ChartError::InvalidInput(_))
    ));
}

#[test]
fn dashboard_charts_serialize_to_json() {
    let dashboard = Dashboard::build(&sample_inputs().unwrap(), 120).unwrap();
    let json = serde_json::to_value(dashboard.charts()).unwrap();
    assert_eq!(json[0]["layout"]["type"], "cartesian");
    assert_eq!(json[1]["layout"]["type"], "radial");
}
