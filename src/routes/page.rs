use actix_web::{http::header::ContentType, HttpResponse};
use askama::Template;

use crate::{
    domain::{
        chart::{ChartLibrary, ChartSelection, ChartType},
        frequency_table::{FrequencyTable, WordCount},
    },
    error::AppError,
    services::{render_chart, Analysis, RenderedChart},
};

pub const NO_DATA_PROMPT: &str = "请提供一个有效的URL并点击提交以开始分析。";

struct SelectOption {
    tag: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    url: String,
    chart_types: Vec<SelectOption>,
    libraries: Vec<SelectOption>,
    words: Vec<WordCount>,
    chart: Option<RenderedChart>,
    message: Option<String>,
}

/// Renders the single app page for the session's current analysis.
pub fn render_page(
    analysis: Option<Analysis>,
    selection: ChartSelection,
) -> Result<HttpResponse, AppError> {
    let (url, table) = match analysis {
        Some(analysis) => (analysis.url, analysis.table),
        None => (String::new(), FrequencyTable::default()),
    };

    let (chart, message) = match (table.is_empty(), url.is_empty()) {
        (false, _) => (Some(render_chart(selection, &table)?), None),
        (true, true) => (None, Some(NO_DATA_PROMPT.to_string())),
        (true, false) => (
            None,
            Some(format!("没有从 {} 获取到数据。{}", url, NO_DATA_PROMPT)),
        ),
    };

    let chart_types = ChartType::ALL
        .into_iter()
        .map(|ct| SelectOption {
            tag: ct.tag(),
            label: ct.label(),
            selected: ct == selection.chart_type,
        })
        .collect();
    let libraries = ChartLibrary::ALL
        .into_iter()
        .map(|lib| SelectOption {
            tag: lib.tag(),
            label: lib.label(),
            selected: lib == selection.library,
        })
        .collect();

    let page = IndexTemplate {
        url,
        chart_types,
        libraries,
        words: table.iter().cloned().collect(),
        chart,
        message,
    }
    .render()?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
