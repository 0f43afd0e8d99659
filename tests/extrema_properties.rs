use quickcheck_macros::quickcheck;
use sales_lens::{ChartError, SalesRecord, extrema};

fn records_from(values: &[u16]) -> Vec<SalesRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| SalesRecord::new(i as u32 + 1, f64::from(*v)))
        .collect()
}

#[quickcheck]
fn max_value_ignores_order(values: Vec<u16>) -> bool {
    let forward = records_from(&values);
    let mut backward = forward.clone();
    backward.reverse();

    match (extrema(&forward), extrema(&backward)) {
        (Ok(a), Ok(b)) => a.max().value == b.max().value,
        (Err(_), Err(_)) => values.is_empty(),
        _ => false,
    }
}

#[quickcheck]
fn unique_max_record_survives_rotation(values: Vec<u16>, shift: usize) -> bool {
    let records = records_from(&values);
    let Some(top) = values.iter().max() else {
        return true;
    };
    if values.iter().filter(|v| *v == top).count() != 1 {
        return true;
    }
    let mut rotated = records.clone();
    rotated.rotate_left(shift % records.len());

    match (extrema(&records), extrema(&rotated)) {
        (Ok(a), Ok(b)) => a.max() == b.max(),
        _ => false,
    }
}

#[quickcheck]
fn max_is_the_earliest_peak(values: Vec<u16>) -> bool {
    let records = records_from(&values);
    let Ok(result) = extrema(&records) else {
        return values.is_empty();
    };
    records
        .iter()
        .take_while(|r| r.day < result.max().day)
        .all(|r| r.value < result.max().value)
        && records.iter().all(|r| r.value <= result.max().value)
}

#[quickcheck]
fn min_ties_are_all_reported_in_order(values: Vec<u16>) -> bool {
    let records = records_from(&values);
    let Ok(result) = extrema(&records) else {
        return values.is_empty();
    };
    let lowest = values.iter().copied().min().map(f64::from);
    let expected = values.iter().filter(|v| Some(f64::from(**v)) == lowest).count();

    result.mins().len() == expected
        && result.mins().iter().all(|r| Some(r.value) == lowest)
        && result.mins().windows(2).all(|w| w[0].day < w[1].day)
}

#[test]
fn empty_records_are_rejected() {
    assert!(matches!(extrema(&[]), Err(ChartError::InvalidInput(_))));
}

#[test]
fn nan_is_rejected() {
    let records = [SalesRecord::new(1, 10.0), SalesRecord::new(2, f64::NAN)];
    assert!(matches!(extrema(&records), Err(ChartError::InvalidInput(_))));
}
