use serde_json::{json, Value};

use crate::domain::{
    chart::{ChartError, ChartLibrary, ChartSelection, ChartType},
    frequency_table::FrequencyTable,
};

const SERIES_NAME: &str = "频率";
const WORD_SIZE_RANGE: (f64, f64) = (20.0, 100.0);
const PLOTLY_CLOUD_COLUMNS: usize = 5;

/// A chart ready to be mounted in the page: the library's option/config
/// document plus what the page needs to load and show it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub chart_type: ChartType,
    pub library: ChartLibrary,
    pub title: String,
    pub notice: Option<String>,
    pub spec: Value,
}

impl RenderedChart {
    pub fn script_urls(&self) -> Vec<&'static str> {
        match (self.library, self.chart_type) {
            (ChartLibrary::ECharts, ChartType::WordCloud) => vec![
                "https://cdn.jsdelivr.net/npm/echarts@latest/dist/echarts.min.js",
                "https://cdn.jsdelivr.net/npm/echarts-wordcloud@2/dist/echarts-wordcloud.min.js",
            ],
            (ChartLibrary::ECharts, _) => {
                vec!["https://cdn.jsdelivr.net/npm/echarts@latest/dist/echarts.min.js"]
            }
            (ChartLibrary::ChartJs, ChartType::WordCloud) => vec![
                "https://cdn.jsdelivr.net/npm/chart.js@4",
                "https://cdn.jsdelivr.net/npm/chartjs-chart-wordcloud@4",
            ],
            (ChartLibrary::ChartJs, _) => vec!["https://cdn.jsdelivr.net/npm/chart.js@4"],
            (ChartLibrary::Plotly, _) => vec!["https://cdn.plot.ly/plotly-2.35.2.min.js"],
        }
    }

    /// The chart document as JSON, safe to inline in a `<script>` block.
    pub fn spec_json(&self) -> String {
        self.spec
            .to_string()
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026")
    }

    pub fn mount_html(&self) -> String {
        let spec = self.spec_json();
        match self.library {
            ChartLibrary::ECharts => format!(
                r#"<div id="chart" style="width:800px;height:600px;"></div>
<script>echarts.init(document.getElementById("chart")).setOption({});</script>"#,
                spec
            ),
            ChartLibrary::ChartJs => format!(
                r#"<div style="width:800px;height:600px;"><canvas id="chart"></canvas></div>
<script>new Chart(document.getElementById("chart"), {});</script>"#,
                spec
            ),
            ChartLibrary::Plotly => format!(
                r#"<div id="chart" style="width:800px;height:600px;"></div>
<script>const spec = {}; Plotly.newPlot("chart", spec.data, spec.layout);</script>"#,
                spec
            ),
        }
    }
}

pub fn render_chart(
    selection: ChartSelection,
    table: &FrequencyTable,
) -> Result<RenderedChart, ChartError> {
    if table.is_empty() {
        return Err(ChartError::NoData);
    }

    let resolved = selection.resolve();
    if let Some(ref notice) = resolved.notice {
        log::warn!(
            "Falling back from {} for {}: {}",
            selection.library,
            selection.chart_type,
            notice
        );
    }

    let ChartSelection {
        chart_type,
        library,
    } = resolved.selection;
    let title = chart_type.title();

    let spec = match (chart_type, library) {
        (ChartType::WordCloud, ChartLibrary::ECharts) => echarts_word_cloud(&title, table),
        (ChartType::Bar, ChartLibrary::ECharts) => echarts_axis(&title, "bar", table),
        (ChartType::Line, ChartLibrary::ECharts) => echarts_axis(&title, "line", table),
        (ChartType::Scatter, ChartLibrary::ECharts) => echarts_axis(&title, "scatter", table),
        (ChartType::Pie, ChartLibrary::ECharts) => echarts_pie(&title, table),
        (ChartType::Radar, ChartLibrary::ECharts) => echarts_radar(&title, table),
        (ChartType::TreeMap, ChartLibrary::ECharts) => echarts_tree_map(&title, table),

        (ChartType::WordCloud, ChartLibrary::ChartJs) => chartjs_word_cloud(&title, table),
        (ChartType::Bar, ChartLibrary::ChartJs) => chartjs_axis(&title, "bar", table),
        (ChartType::Line, ChartLibrary::ChartJs) => chartjs_axis(&title, "line", table),
        (ChartType::Scatter, ChartLibrary::ChartJs) => chartjs_scatter(&title, table),
        (ChartType::Pie, ChartLibrary::ChartJs) => chartjs_pie(&title, table),

        (ChartType::WordCloud, ChartLibrary::Plotly) => plotly_word_cloud(&title, table),
        (ChartType::Bar, ChartLibrary::Plotly) => plotly_bar(&title, table),
        (ChartType::Line, ChartLibrary::Plotly) => plotly_scatter(&title, "lines+markers", table),
        (ChartType::Scatter, ChartLibrary::Plotly) => plotly_scatter(&title, "markers", table),
        (ChartType::Pie, ChartLibrary::Plotly) => plotly_pie(&title, table),

        (ChartType::Radar | ChartType::TreeMap, ChartLibrary::ChartJs | ChartLibrary::Plotly) => {
            return Err(ChartError::Unsupported {
                chart_type,
                library,
            })
        }
    };

    Ok(RenderedChart {
        chart_type,
        library,
        title,
        notice: resolved.notice,
        spec,
    })
}

fn name_value_pairs(table: &FrequencyTable) -> Vec<Value> {
    table
        .iter()
        .map(|wc| json!({ "name": wc.word, "value": wc.count }))
        .collect()
}

/// Maps counts linearly onto the word cloud font size range.
fn word_sizes(table: &FrequencyTable) -> Vec<f64> {
    let (min_size, max_size) = WORD_SIZE_RANGE;
    let min = table.min_count().unwrap_or(0) as f64;
    let max = table.max_count().unwrap_or(0) as f64;

    table
        .iter()
        .map(|wc| match max > min {
            true => min_size + (wc.count as f64 - min) / (max - min) * (max_size - min_size),
            false => (min_size + max_size) / 2.0,
        })
        .collect()
}

fn echarts_word_cloud(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "title": { "text": title },
        "tooltip": {},
        "series": [{
            "type": "wordCloud",
            "name": "",
            "shape": "diamond",
            "sizeRange": [WORD_SIZE_RANGE.0, WORD_SIZE_RANGE.1],
            "data": name_value_pairs(table),
        }],
    })
}

fn echarts_axis(title: &str, series_type: &str, table: &FrequencyTable) -> Value {
    json!({
        "title": { "text": title },
        "tooltip": {},
        "legend": { "data": [SERIES_NAME] },
        "xAxis": { "type": "category", "data": table.words() },
        "yAxis": { "type": "value" },
        "series": [{
            "name": SERIES_NAME,
            "type": series_type,
            "data": table.counts(),
        }],
    })
}

fn echarts_pie(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "title": { "text": title },
        "tooltip": {},
        "legend": {},
        "series": [{
            "type": "pie",
            "name": "",
            "data": name_value_pairs(table),
        }],
    })
}

fn echarts_radar(title: &str, table: &FrequencyTable) -> Value {
    let max = table.max_count().unwrap_or(0);
    let indicator: Vec<Value> = table
        .iter()
        .map(|wc| json!({ "name": wc.word, "max": max }))
        .collect();

    json!({
        "title": { "text": title },
        "tooltip": {},
        "legend": { "data": [SERIES_NAME] },
        "radar": { "indicator": indicator },
        "series": [{
            "name": SERIES_NAME,
            "type": "radar",
            "data": [{ "name": SERIES_NAME, "value": table.counts() }],
        }],
    })
}

fn echarts_tree_map(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "title": { "text": title },
        "tooltip": {},
        "series": [{
            "name": SERIES_NAME,
            "type": "treemap",
            "label": { "show": true },
            "data": name_value_pairs(table),
        }],
    })
}

fn chartjs_options(title: &str) -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": { "title": { "display": true, "text": title } },
    })
}

fn chartjs_axis(title: &str, chart_type: &str, table: &FrequencyTable) -> Value {
    json!({
        "type": chart_type,
        "data": {
            "labels": table.words(),
            "datasets": [{ "label": SERIES_NAME, "data": table.counts() }],
        },
        "options": chartjs_options(title),
    })
}

fn chartjs_scatter(title: &str, table: &FrequencyTable) -> Value {
    let points: Vec<Value> = table
        .iter()
        .map(|wc| json!({ "x": wc.word, "y": wc.count }))
        .collect();
    let mut options = chartjs_options(title);
    options["scales"] = json!({ "x": { "type": "category", "labels": table.words() } });

    json!({
        "type": "scatter",
        "data": { "datasets": [{ "label": SERIES_NAME, "data": points }] },
        "options": options,
    })
}

fn chartjs_pie(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "type": "pie",
        "data": {
            "labels": table.words(),
            "datasets": [{ "label": SERIES_NAME, "data": table.counts() }],
        },
        "options": chartjs_options(title),
    })
}

fn chartjs_word_cloud(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "type": "wordCloud",
        "data": {
            "labels": table.words(),
            "datasets": [{ "label": SERIES_NAME, "data": word_sizes(table) }],
        },
        "options": chartjs_options(title),
    })
}

fn plotly_layout(title: &str) -> Value {
    json!({ "title": { "text": title } })
}

fn plotly_bar(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "data": [{
            "type": "bar",
            "name": SERIES_NAME,
            "x": table.words(),
            "y": table.counts(),
        }],
        "layout": plotly_layout(title),
    })
}

fn plotly_scatter(title: &str, mode: &str, table: &FrequencyTable) -> Value {
    json!({
        "data": [{
            "type": "scatter",
            "mode": mode,
            "name": SERIES_NAME,
            "x": table.words(),
            "y": table.counts(),
        }],
        "layout": plotly_layout(title),
    })
}

fn plotly_pie(title: &str, table: &FrequencyTable) -> Value {
    json!({
        "data": [{
            "type": "pie",
            "labels": table.words(),
            "values": table.counts(),
        }],
        "layout": plotly_layout(title),
    })
}

/// Plotly has no word cloud trace, so words are laid out on a grid as a text
/// scatter with font sizes following the counts.
fn plotly_word_cloud(title: &str, table: &FrequencyTable) -> Value {
    let xs: Vec<usize> = (0..table.len()).map(|i| i % PLOTLY_CLOUD_COLUMNS).collect();
    let ys: Vec<i64> = (0..table.len())
        .map(|i| -((i / PLOTLY_CLOUD_COLUMNS) as i64))
        .collect();
    let hidden_axis = json!({ "visible": false });

    let mut layout = plotly_layout(title);
    layout["xaxis"] = hidden_axis.clone();
    layout["yaxis"] = hidden_axis;

    json!({
        "data": [{
            "type": "scatter",
            "mode": "text",
            "x": xs,
            "y": ys,
            "text": table.words(),
            "textfont": { "size": word_sizes(table) },
            "hovertext": table.counts(),
        }],
        "layout": layout,
    })
}
