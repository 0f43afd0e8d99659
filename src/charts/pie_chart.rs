use {
    crate::{
        charts::format_sales,
        config::{CHART_TEXT, DF, PLOT_CONFIG},
        domain::{CategoryTotal, ChartError},
        models::{ChartElement, ChartLayout, ChartSpec, PieSlice, Rgb},
        utils::{argmax, normalize_sum},
    },
    colorgrad::Gradient,
};

/// One slice per category, sized by its share of the grand total.
/// The largest slice is pulled out of the ring.
pub fn build_pie_chart(categories: &[CategoryTotal]) -> Result<ChartSpec, ChartError> {
    if categories.is_empty() {
        return Err(ChartError::InvalidInput("no categories to chart".into()));
    }
    if let Some(bad) = categories
        .iter()
        .find(|c| !c.total.is_finite() || c.total < 0.0)
    {
        return Err(ChartError::InvalidInput(format!(
            "category '{}' has invalid total {}",
            bad.category, bad.total
        )));
    }

    let totals: Vec<f64> = categories.iter().map(|c| c.total).collect();
    let fractions = normalize_sum(&totals)
        .ok_or_else(|| ChartError::InvalidInput("category totals sum to zero".into()))?;
    let largest = argmax(&totals);
    let colors = slice_colors(categories.len());

    let mut spec = ChartSpec::new(
        CHART_TEXT.pie_chart_id,
        CHART_TEXT.pie_title,
        ChartLayout::Radial {
            hole_ratio: PLOT_CONFIG.pie_hole_ratio,
        },
    );

    for (i, (category, fraction)) in categories.iter().zip(fractions).enumerate() {
        let percent = fraction * 100.0;
        if DF.log_pie_slices {
            log::info!("Pie slice '{}': {:.2}%", category.category, percent);
        }
        spec.push(ChartElement::Slice(PieSlice {
            label: category.category.clone(),
            value: category.total,
            fraction,
            color: colors[i],
            pull: if i == largest { PLOT_CONFIG.pie_pull } else { 0.0 },
            hover: format!(
                "{}: {} ({:.1}%)",
                category.category,
                format_sales(category.total),
                percent
            ),
        }));
    }

    Ok(spec)
}

/// Evenly samples the configured gradient, one colour per slice.
fn slice_colors(count: usize) -> Vec<Rgb> {
    let grad = match colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.pie_gradient_colors)
        .build::<colorgrad::CatmullRomGradient>()
    {
        Ok(grad) => grad,
        Err(e) => {
            log::warn!("Failed to build pie gradient, using default colour: {}", e);
            return vec![PLOT_CONFIG.pie_default_color; count];
        }
    };

    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let rgba8 = grad.at(t).to_rgba8();
            Rgb::new(rgba8[0], rgba8[1], rgba8[2])
        })
        .collect()
}
