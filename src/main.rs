use std::net::TcpListener;

use cipin::{
    configuration::get_configuration,
    services::{FrequencyAnalyzer, PageFetcher, Pipeline},
    startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let fetcher =
        PageFetcher::new(&configuration.fetcher).expect("Failed to build the http client.");
    let analyzer = FrequencyAnalyzer::new(configuration.analyzer.top_n);
    log::info!("Loaded segmentation dictionary");
    let pipeline = Pipeline::new(fetcher, analyzer);

    log::info!("Listening on {}", listener.local_addr()?);
    run(listener, pipeline)?.await
}
