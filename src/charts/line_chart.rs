use crate::{
    analysis::{ExtremaResult, SmoothedCurve},
    charts::format_sales,
    config::{CHART_TEXT, PLOT_CONFIG},
    domain::{SalesRecord, SalesSeries},
    models::{
        Annotation, ChartElement, ChartLayout, ChartSpec, CurveSeries, Marker, MarkerRole, Rgb,
        ValueLabel,
    },
};

/// Smoothed sales curve with per-day value labels, a highlighted maximum and
/// every tied minimum highlighted and annotated.
pub fn build_line_chart(
    series: &SalesSeries,
    curve: &SmoothedCurve,
    extrema: &ExtremaResult,
) -> ChartSpec {
    let mut spec = ChartSpec::new(
        CHART_TEXT.line_chart_id,
        CHART_TEXT.line_title,
        ChartLayout::Cartesian {
            x_axis: CHART_TEXT.line_x_axis.to_string(),
            y_axis: CHART_TEXT.line_y_axis.to_string(),
        },
    );

    spec.push(ChartElement::Curve(CurveSeries {
        name: CHART_TEXT.line_series_name.to_string(),
        points: curve.as_plot_points(),
        color: PLOT_CONFIG.curve_color,
        width: PLOT_CONFIG.curve_width,
        marker_radius: Some(PLOT_CONFIG.curve_marker_radius),
    }));

    for record in series.iter() {
        spec.push(ChartElement::Label(ValueLabel {
            text: format_sales(record.value),
            position: [
                record.day as f64,
                record.value + PLOT_CONFIG.day_label_offset,
            ],
            color: PLOT_CONFIG.day_label_color,
        }));
    }

    push_extremum(
        &mut spec,
        &extrema.max(),
        MarkerRole::Max,
        Some(CHART_TEXT.max_label),
        PLOT_CONFIG.max_marker_color,
        PLOT_CONFIG.max_annotation_offset,
    );

    // Only the first minimum gets a legend entry; the rest share it
    for (i, record) in extrema.mins().iter().enumerate() {
        push_extremum(
            &mut spec,
            record,
            MarkerRole::Min,
            (i == 0).then_some(CHART_TEXT.min_label),
            PLOT_CONFIG.min_marker_color,
            PLOT_CONFIG.min_annotation_offset,
        );
    }

    spec
}

fn push_extremum(
    spec: &mut ChartSpec,
    record: &SalesRecord,
    role: MarkerRole,
    legend: Option<&str>,
    color: Rgb,
    offset: [f64; 2],
) {
    let target = [record.day as f64, record.value];
    let text = match role {
        MarkerRole::Max => CHART_TEXT.max_label,
        MarkerRole::Min => CHART_TEXT.min_label,
    };

    spec.push(ChartElement::Marker(Marker {
        role,
        position: target,
        color,
        radius: PLOT_CONFIG.extrema_marker_radius,
        legend: legend.map(str::to_string),
    }));
    spec.push(ChartElement::Annotation(Annotation {
        text: format!("{} ({})", text, format_sales(record.value)),
        target,
        text_position: [target[0] + offset[0], target[1] + offset[1]],
        color: PLOT_CONFIG.annotation_color,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{extrema, smooth};

    fn build(values: &[f64]) -> ChartSpec {
        let series = SalesSeries::from_daily_values(values).unwrap();
        let curve = smooth(&series, 40).unwrap();
        let ext = extrema(&series).unwrap();
        build_line_chart(&series, &curve, &ext)
    }

    #[test]
    fn one_curve_one_max_and_a_marker_per_minimum() {
        let spec = build(&[3.0, 1.0, 6.0, 1.0, 2.0, 1.0]);

        assert_eq!(spec.curves().count(), 1);
        assert_eq!(spec.curves().next().unwrap().points.len(), 40);

        let maxes: Vec<_> = spec.markers().filter(|m| m.role == MarkerRole::Max).collect();
        assert_eq!(maxes.len(), 1);
        assert_eq!(maxes[0].position, [3.0, 6.0]);

        let min_days: Vec<f64> = spec
            .markers()
            .filter(|m| m.role == MarkerRole::Min)
            .map(|m| m.position[0])
            .collect();
        assert_eq!(min_days, vec![2.0, 4.0, 6.0]);

        assert_eq!(spec.annotations().count(), 4);
    }

    #[test]
    fn annotations_point_at_their_markers() {
        let spec = build(&[3.0, 1.0, 6.0, 1.0, 2.0]);
        let targets: Vec<[f64; 2]> = spec.annotations().map(|a| a.target).collect();
        let positions: Vec<[f64; 2]> = spec.markers().map(|m| m.position).collect();
        assert_eq!(targets, positions);
    }

    #[test]
    fn legend_has_curve_max_and_a_single_min_entry() {
        let spec = build(&[3.0, 1.0, 6.0, 1.0, 2.0]);
        let names: Vec<String> = spec.legend_entries().into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                CHART_TEXT.line_series_name.to_string(),
                CHART_TEXT.max_label.to_string(),
                CHART_TEXT.min_label.to_string(),
            ]
        );
    }

    #[test]
    fn labels_every_day() {
        let spec = build(&[3.0, 1.0, 6.0, 1.0, 2.0]);
        let texts: Vec<&str> = spec.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["3", "1", "6", "1", "2"]);
    }
}
