use serde::{Deserialize, Serialize};

// ============================================================================
// ChartSpec: declarative, renderer-agnostic chart description
// ============================================================================

/// Plain 8-bit RGB colour. Kept free of any GUI type so specs can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartLayout {
    Cartesian { x_axis: String, y_axis: String },
    Radial { hole_ratio: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub layout: ChartLayout,
    /// Draw order: first element is drawn first.
    pub elements: Vec<ChartElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartElement {
    Curve(CurveSeries),
    Marker(Marker),
    Annotation(Annotation),
    Label(ValueLabel),
    Slice(PieSlice),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub width: f32,
    /// Some(radius) draws a dot on every point (lines+markers)
    pub marker_radius: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Max,
    Min,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub role: MarkerRole,
    pub position: [f64; 2],
    pub color: Rgb,
    pub radius: f32,
    /// Only markers carrying a legend name show up in the legend.
    pub legend: Option<String>,
}

/// Text placed at `text_position` with an arrow pointing back at `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub target: [f64; 2],
    pub text_position: [f64; 2],
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub text: String,
    pub position: [f64; 2],
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// value / sum(values). All fractions of a chart sum to 1.0.
    pub fraction: f64,
    pub color: Rgb,
    /// Radial offset as a fraction of the radius (0.0 = in place)
    pub pull: f64,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Rgb,
}

impl ChartSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, layout: ChartLayout) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            layout,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: ChartElement) {
        self.elements.push(element);
    }

    pub fn curves(&self) -> impl Iterator<Item = &CurveSeries> {
        self.elements.iter().filter_map(|e| match e {
            ChartElement::Curve(c) => Some(c),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.elements.iter().filter_map(|e| match e {
            ChartElement::Marker(m) => Some(m),
            _ => None,
        })
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.elements.iter().filter_map(|e| match e {
            ChartElement::Annotation(a) => Some(a),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &ValueLabel> {
        self.elements.iter().filter_map(|e| match e {
            ChartElement::Label(l) => Some(l),
            _ => None,
        })
    }

    pub fn slices(&self) -> impl Iterator<Item = &PieSlice> {
        self.elements.iter().filter_map(|e| match e {
            ChartElement::Slice(s) => Some(s),
            _ => None,
        })
    }

    /// Legend entries in draw order: curves, named markers, then slices.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                ChartElement::Curve(c) if !c.name.is_empty() => Some(LegendEntry {
                    name: c.name.clone(),
                    color: c.color,
                }),
                ChartElement::Marker(m) => m.legend.as_ref().map(|name| LegendEntry {
                    name: name.clone(),
                    color: m.color,
                }),
                ChartElement::Slice(s) => Some(LegendEntry {
                    name: s.label.clone(),
                    color: s.color,
                }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(65, 105, 225).to_hex(), "#4169e1");
        assert_eq!(Rgb::new(0, 0, 10).to_hex(), "#00000a");
    }

    #[test]
    fn legend_skips_unnamed_markers() {
        let mut spec = ChartSpec::new(
            "t",
            "Test",
            ChartLayout::Cartesian {
                x_axis: "x".into(),
                y_axis: "y".into(),
            },
        );
        let marker = |legend: Option<&str>| Marker {
            role: MarkerRole::Min,
            position: [1.0, 1.0],
            color: Rgb::new(255, 0, 0),
            radius: 6.0,
            legend: legend.map(str::to_string),
        };
        spec.push(ChartElement::Marker(marker(Some("Lowest"))));
        spec.push(ChartElement::Marker(marker(None)));

        let legend = spec.legend_entries();
        assert_eq!(legend.len(), 1);
        assert_eq!(legend[0].name, "Lowest");
        assert_eq!(spec.markers().count(), 2);
    }

    #[test]
    fn serializes_with_element_kind_tags() {
        let mut spec = ChartSpec::new("p", "Pie", ChartLayout::Radial { hole_ratio: 0.3 });
        spec.push(ChartElement::Slice(PieSlice {
            label: "Food".into(),
            value: 400.0,
            fraction: 1.0,
            color: Rgb::new(1, 2, 3),
            pull: 0.0,
            hover: "Food".into(),
        }));

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["layout"]["type"], "radial");
        assert_eq!(json["elements"][0]["kind"], "slice");

        let back: ChartSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, spec);
    }
}
