use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{analyze_route, api_route, default_route, health_route},
    services::{AnalysisSession, Pipeline},
};

pub fn run(listener: TcpListener, pipeline: Pipeline) -> Result<Server, std::io::Error> {
    let pipeline = web::Data::new(pipeline);
    let session = web::Data::new(AnalysisSession::new());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes)
            .app_data(pipeline.clone())
            .app_data(session.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/static", "./templates/static").prefer_utf8(true))
        .service(default_route::index)
        .service(health_route::health)
        .service(analyze_route::analyze)
        .service(analyze_route::chart)
        .service(web::scope("/api").service(api_route::frequencies));
}
