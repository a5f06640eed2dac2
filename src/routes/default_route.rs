use actix_web::{get, web, HttpResponse};

use crate::{domain::chart::ChartSelection, error::AppError, services::AnalysisSession};

use super::page::render_page;

#[get("/")]
async fn index(session: web::Data<AnalysisSession>) -> Result<HttpResponse, AppError> {
    render_page(session.current().await, ChartSelection::default())
}
