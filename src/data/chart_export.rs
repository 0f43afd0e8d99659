// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use {
    crate::{analysis::SalesSummary, config::PERSISTENCE, engine::Dashboard, models::ChartSpec},
    anyhow::{Context, Result},
    serde::Serialize,
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::Path,
    },
};

/// On-disk JSON document holding both chart descriptions.
#[derive(Serialize)]
pub struct ChartExport<'a> {
    pub version: u32,
    pub charts: [&'a ChartSpec; 2],
    pub summary: &'a SalesSummary,
}

impl<'a> ChartExport<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Self {
        Self {
            version: PERSISTENCE.export.version,
            charts: dashboard.charts(),
            summary: &dashboard.summary,
        }
    }
}

pub fn write_chart_json<W: Write>(dashboard: &Dashboard, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &ChartExport::new(dashboard))
        .context("Failed to serialize chart export")?;
    Ok(())
}

pub fn export_charts(dashboard: &Dashboard, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_chart_json(dashboard, &mut writer)?;
    writer.flush()?;
    log::info!("Exported charts to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_inputs;

    #[test]
    fn export_contains_both_charts() {
        let dashboard = Dashboard::build(&sample_inputs().unwrap(), 50).unwrap();
        let mut buf = Vec::new();
        write_chart_json(&dashboard, &mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["charts"][0]["id"], "daily-sales-chart");
        assert_eq!(json["charts"][1]["id"], "category-sales-chart");
        assert_eq!(json["summary"]["extrema"]["max"]["day"], 9);
    }
}
