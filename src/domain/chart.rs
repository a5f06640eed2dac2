use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChartError {
    #[error("unsupported chart type: {0}")]
    UnknownChartType(String),
    #[error("unsupported chart library: {0}")]
    UnknownLibrary(String),
    #[error("{library} cannot draw a {chart_type} chart")]
    Unsupported {
        chart_type: ChartType,
        library: ChartLibrary,
    },
    #[error("no word frequencies to draw")]
    NoData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    WordCloud,
    Bar,
    Line,
    Pie,
    Scatter,
    Radar,
    TreeMap,
}

impl ChartType {
    pub const ALL: [ChartType; 7] = [
        ChartType::WordCloud,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Radar,
        ChartType::TreeMap,
    ];

    /// Form value used by the selector.
    pub fn tag(&self) -> &'static str {
        match self {
            ChartType::WordCloud => "word-cloud",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Radar => "radar",
            ChartType::TreeMap => "tree-map",
        }
    }

    /// Label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::WordCloud => "词云",
            ChartType::Bar => "柱状图",
            ChartType::Line => "折线图",
            ChartType::Pie => "饼图",
            ChartType::Scatter => "散点图",
            ChartType::Radar => "雷达图",
            ChartType::TreeMap => "树状图",
        }
    }

    pub fn title(&self) -> String {
        let name = match self {
            ChartType::WordCloud => "WordCloud",
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Pie => "Pie",
            ChartType::Scatter => "Scatter",
            ChartType::Radar => "Radar",
            ChartType::TreeMap => "Treemap",
        };
        format!("{} 图", name)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartType::ALL
            .into_iter()
            .find(|ct| ct.tag().eq_ignore_ascii_case(s) || ct.label() == s)
            .ok_or_else(|| ChartError::UnknownChartType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLibrary {
    ECharts,
    ChartJs,
    Plotly,
}

impl ChartLibrary {
    pub const ALL: [ChartLibrary; 3] = [
        ChartLibrary::ECharts,
        ChartLibrary::ChartJs,
        ChartLibrary::Plotly,
    ];

    /// The only library that can draw every chart type.
    pub const FALLBACK: ChartLibrary = ChartLibrary::ECharts;

    pub fn tag(&self) -> &'static str {
        match self {
            ChartLibrary::ECharts => "echarts",
            ChartLibrary::ChartJs => "chartjs",
            ChartLibrary::Plotly => "plotly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartLibrary::ECharts => "ECharts",
            ChartLibrary::ChartJs => "Chart.js",
            ChartLibrary::Plotly => "Plotly",
        }
    }

    pub fn supports(&self, chart_type: ChartType) -> bool {
        match (self, chart_type) {
            (ChartLibrary::ECharts, _) => true,
            (_, ChartType::Radar | ChartType::TreeMap) => false,
            _ => true,
        }
    }
}

impl fmt::Display for ChartLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartLibrary {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartLibrary::ALL
            .into_iter()
            .find(|lib| lib.tag().eq_ignore_ascii_case(s) || lib.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownLibrary(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSelection {
    pub chart_type: ChartType,
    pub library: ChartLibrary,
}

impl Default for ChartSelection {
    fn default() -> Self {
        ChartSelection {
            chart_type: ChartType::WordCloud,
            library: ChartLibrary::ECharts,
        }
    }
}

/// A selection that passed the capability check, plus the notice to show
/// when the library had to be switched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    pub selection: ChartSelection,
    pub notice: Option<String>,
}

impl ChartSelection {
    pub fn new(chart_type: ChartType, library: ChartLibrary) -> Self {
        ChartSelection {
            chart_type,
            library,
        }
    }

    /// Builds a selection from form values. Missing values fall back to the
    /// defaults, unknown ones are rejected.
    pub fn from_tags(chart: Option<&str>, library: Option<&str>) -> Result<Self, ChartError> {
        let default = ChartSelection::default();
        let chart_type = match chart.filter(|c| !c.trim().is_empty()) {
            Some(c) => c.parse()?,
            None => default.chart_type,
        };
        let library = match library.filter(|l| !l.trim().is_empty()) {
            Some(l) => l.parse()?,
            None => default.library,
        };

        Ok(ChartSelection::new(chart_type, library))
    }

    pub fn resolve(self) -> ResolvedSelection {
        match self.library.supports(self.chart_type) {
            true => ResolvedSelection {
                selection: self,
                notice: None,
            },
            false => ResolvedSelection {
                selection: ChartSelection::new(self.chart_type, ChartLibrary::FALLBACK),
                notice: Some(format!(
                    "{} 不支持{}，已切换到 {} 绘制。",
                    self.library,
                    self.chart_type.label(),
                    ChartLibrary::FALLBACK
                )),
            },
        }
    }
}
