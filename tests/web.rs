use std::net::TcpListener;

use actix_web::{http::header, web, App, HttpRequest, HttpResponse, HttpServer};
use cipin::{
    configuration::FetcherSettings,
    domain::frequency_table::WordCount,
    routes::page::NO_DATA_PROMPT,
    services::{FrequencyAnalyzer, PageFetcher, Pipeline},
    startup::run,
};

const ARTICLE: &str = "<html><head><title>新闻标题</title></head><body>\
    <h1>首都风光</h1>\
    <p>我爱北京天安门，天安门上太阳升。</p>\
    <p>我爱北京天安门！</p>\
    </body></html>";
const FRAMESET: &str =
    "<html><head></head><frameset><frame src=\"left.html\"><frame src=\"right.html\"></frameset></html>";

async fn article(req: HttpRequest) -> HttpResponse {
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    // Behaves like a site that turns away obvious bots
    match user_agent.contains("Chrome/80") {
        true => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(ARTICLE),
        false => HttpResponse::Forbidden().finish(),
    }
}

fn spawn_fixture_site() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(|| {
        App::new()
            .route("/article", web::get().to(article))
            .route(
                "/frameset",
                web::get().to(|| async { HttpResponse::Ok().body(FRAMESET) }),
            )
            .route(
                "/gone",
                web::get().to(|| async { HttpResponse::NotFound().body("<body>页面不存在</body>") }),
            )
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let settings = FetcherSettings {
        timeout_secs: 5,
        ..FetcherSettings::default()
    };
    let pipeline = Pipeline::new(
        PageFetcher::new(&settings).unwrap(),
        FrequencyAnalyzer::default(),
    );

    let server = run(listener, pipeline).expect("Failed to start the app");
    tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app();

    let res = reqwest::get(format!("{}/health", app)).await.unwrap();

    assert!(res.status().is_success());
    assert_eq!(res.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn index_prompts_for_a_url_before_any_submission() {
    let app = spawn_app();

    let body = reqwest::get(format!("{}/", app))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains(NO_DATA_PROMPT));
    assert!(!body.contains("id=\"chart\""));
}

#[tokio::test]
async fn api_counts_words_in_the_page_body() {
    let site = spawn_fixture_site();
    let app = spawn_app();

    let res = reqwest::Client::new()
        .get(format!("{}/api/frequencies", app))
        .query(&[("url", format!("{}/article", site))])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let table: Vec<WordCount> = res.json().await.unwrap();
    assert!(!table.is_empty());
    assert!(table.len() <= 20);
    assert!(table.iter().all(|wc| wc.word.chars().count() > 1));
    assert!(table.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(table.iter().any(|wc| wc.word == "天安门" && wc.count >= 2));
    assert!(table.iter().all(|wc| wc.word != "新闻"));
}

#[tokio::test]
async fn http_error_status_degrades_to_empty_table() {
    let site = spawn_fixture_site();
    let app = spawn_app();

    let table: Vec<WordCount> = reqwest::Client::new()
        .get(format!("{}/api/frequencies", app))
        .query(&[("url", format!("{}/gone", site))])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(table.is_empty());
}

#[tokio::test]
async fn page_without_body_is_an_error() {
    let site = spawn_fixture_site();
    let app = spawn_app();

    let res = reqwest::Client::new()
        .get(format!("{}/api/frequencies", app))
        .query(&[("url", format!("{}/frameset", site))])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 422);
}

#[tokio::test]
async fn api_rejects_malformed_url() {
    let app = spawn_app();

    let res = reqwest::Client::new()
        .get(format!("{}/api/frequencies", app))
        .query(&[("url", "not a url")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
}

#[tokio::test]
async fn submitting_a_url_renders_the_chosen_chart() {
    let site = spawn_fixture_site();
    let app = spawn_app();

    let res = reqwest::Client::new()
        .post(format!("{}/analyze", app))
        .form(&[
            ("url", format!("{}/article", site)),
            ("chart", "bar".to_string()),
            ("library", "plotly".to_string()),
        ])
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    assert!(body.contains("Plotly.newPlot"));
    assert!(body.contains("天安门"));
    assert!(!body.contains(NO_DATA_PROMPT));
}

#[tokio::test]
async fn tree_map_outside_echarts_falls_back_with_a_notice() {
    let site = spawn_fixture_site();
    let app = spawn_app();

    let body = reqwest::Client::new()
        .post(format!("{}/analyze", app))
        .form(&[
            ("url", format!("{}/article", site)),
            ("chart", "tree-map".to_string()),
            ("library", "chartjs".to_string()),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("class=\"notice\""));
    assert!(body.contains("echarts.init"));
    assert!(body.contains("\"type\":\"treemap\""));
}

#[tokio::test]
async fn chart_can_be_switched_without_resubmitting() {
    let site = spawn_fixture_site();
    let app = spawn_app();
    let client = reqwest::Client::new();

    client
        .post(format!("{}/analyze", app))
        .form(&[("url", format!("{}/article", site))])
        .send()
        .await
        .unwrap();

    let body = client
        .get(format!("{}/chart", app))
        .query(&[("chart", "pie"), ("library", "echarts")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("\"type\":\"pie\""));
    assert!(body.contains("天安门"));
}

#[tokio::test]
async fn unreachable_url_shows_the_prompt_instead_of_a_chart() {
    let app = spawn_app();

    let body = reqwest::Client::new()
        .post(format!("{}/analyze", app))
        .form(&[("url", "http://127.0.0.1:9/article")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains(NO_DATA_PROMPT));
    assert!(!body.contains("id=\"chart\""));
}

#[tokio::test]
async fn unknown_chart_type_is_a_bad_request() {
    let app = spawn_app();

    let res = reqwest::Client::new()
        .get(format!("{}/chart", app))
        .query(&[("chart", "sankey")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(res.text().await.unwrap(), "unsupported chart type: sankey");
}
