use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use url::Url;

use crate::{error::AppError, services::Pipeline};

#[derive(Deserialize)]
struct FrequenciesQuery {
    url: String,
}

#[get("/frequencies")]
async fn frequencies(
    pipeline: web::Data<Pipeline>,
    query: web::Query<FrequenciesQuery>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = Url::parse(&query.url) {
        return Err(AppError::BadRequest(format!("invalid url {}: {}", query.url, e)));
    }

    let table = pipeline.analyze(&query.url).await?;

    Ok(HttpResponse::Ok().json(table))
}
