use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::chart::ChartSelection,
    error::AppError,
    services::{AnalysisSession, Pipeline},
};

use super::page::render_page;

#[derive(Deserialize)]
struct AnalyzeForm {
    url: String,
    chart: Option<String>,
    library: Option<String>,
}

#[post("/analyze")]
async fn analyze(
    pipeline: web::Data<Pipeline>,
    session: web::Data<AnalysisSession>,
    form: web::Form<AnalyzeForm>,
) -> Result<HttpResponse, AppError> {
    let selection = ChartSelection::from_tags(form.chart.as_deref(), form.library.as_deref())?;
    let url = form.url.trim();

    // Re-submitting the shown URL only changes the chart
    if !url.is_empty() && !session.is_current_url(url).await {
        log::info!("Analyzing {}", url);
        let table = pipeline.analyze(url).await?;
        session.replace(url, table).await;
    }

    render_page(session.current().await, selection)
}

#[derive(Deserialize)]
struct ChartQuery {
    chart: Option<String>,
    library: Option<String>,
}

#[get("/chart")]
async fn chart(
    session: web::Data<AnalysisSession>,
    query: web::Query<ChartQuery>,
) -> Result<HttpResponse, AppError> {
    let selection = ChartSelection::from_tags(query.chart.as_deref(), query.library.as_deref())?;

    render_page(session.current().await, selection)
}
