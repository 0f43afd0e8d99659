use anyhow::{Context, Result};
use clap::Parser;
use sales_lens::{Dashboard, SAMPLE_COUNT, charts::format_sales, sample_inputs};
use tabled::{Table, Tabled, settings::Style};

/// Print the month's summary, extrema and category shares as tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Smoothing sample count used for the build
    #[arg(long, default_value_t = SAMPLE_COUNT)]
    samples: usize,
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ExtremumRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Day")]
    day: u32,
    #[tabled(rename = "Sales")]
    value: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let inputs = sample_inputs().context("Failed to load sample data")?;
    let dashboard =
        Dashboard::build(&inputs, args.samples).context("Failed to build dashboard")?;
    let summary = &dashboard.summary;

    let metrics = vec![
        MetricRow {
            name: "Days",
            value: summary.days.to_string(),
        },
        MetricRow {
            name: "Total",
            value: format_sales(summary.total),
        },
        MetricRow {
            name: "Mean",
            value: format!("{:.2}", summary.mean),
        },
        MetricRow {
            name: "Median",
            value: format_sales(summary.median),
        },
        MetricRow {
            name: "Std dev",
            value: format!("{:.2}", summary.std_dev),
        },
    ];

    let extrema = dashboard.extrema();
    let mut extremum_rows = vec![ExtremumRow {
        kind: "Peak",
        day: extrema.max().day,
        value: format_sales(extrema.max().value),
    }];
    extremum_rows.extend(extrema.mins().iter().map(|r| ExtremumRow {
        kind: "Lowest",
        day: r.day,
        value: format_sales(r.value),
    }));

    let category_rows: Vec<CategoryRow> = dashboard
        .pie_chart
        .slices()
        .map(|s| CategoryRow {
            category: s.label.clone(),
            total: format_sales(s.value),
            share: format!("{:.1}%", s.fraction * 100.0),
        })
        .collect();

    println!("{}", Table::new(metrics).with(Style::rounded()));
    println!();
    println!("{}", Table::new(extremum_rows).with(Style::rounded()));
    println!();
    println!("{}", Table::new(category_rows).with(Style::rounded()));

    Ok(())
}
