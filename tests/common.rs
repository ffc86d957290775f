#![allow(dead_code)]

use axum::{Router, http::StatusCode, response::Html, routing::get};
use kurs_scraper_rs::server::{AppState, Config, app_router};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}

/// Serve static HTML bodies, one per path. Returns the base URL.
pub async fn spawn_pages(pages: Vec<(&'static str, String)>) -> String {
    let mut router = Router::new();
    for (path, body) in pages {
        router = router.route(
            path,
            get(move || {
                let body = body.clone();
                async move { Html(body) }
            }),
        );
    }
    router = router.route(
        "/broken",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
    );
    router = router.route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Html("<table></table>".to_string())
        }),
    );
    serve(router).await
}

/// A page that answers 503 on its first hit and `body` afterwards.
pub async fn spawn_flaky_page(body: String) -> String {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/flaky",
        get(move || {
            let hits = hits.clone();
            let body = body.clone();
            async move {
                if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(StatusCode::SERVICE_UNAVAILABLE)
                } else {
                    Ok(Html(body))
                }
            }
        }),
    );
    format!("{}/flaky", serve(router).await)
}

/// URL on a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/kurs", addr)
}

pub async fn spawn_app(config: Config) -> String {
    let state = AppState::from_config(&config).expect("build app state");
    serve(app_router(state)).await
}

pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("test client")
}

// Fixture pages shaped like each bank's kurs table

pub fn bca_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(currency, buy, sell)| {
            format!(
                "<tr><td><span><p>{}</p></span></td><td><p>{}</p></td><td><p>{}</p></td><td><p>0,00</p></td></tr>",
                currency, buy, sell
            )
        })
        .collect();
    format!(
        "<html><body><table class=\"m-table-kurs\"><thead><tr><th>Mata Uang</th><th>Beli</th><th>Jual</th></tr></thead><tbody>{}</tbody></table></body></html>",
        body
    )
}

/// BI rows are (currency, value, sell, buy) in column order.
pub fn bi_page(rows: &[(&str, &str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(currency, value, sell, buy)| {
            format!(
                "<tr><td> {} </td><td>{}</td><td>{}</td><td>{}</td><td></td></tr>",
                currency, value, sell, buy
            )
        })
        .collect();
    format!(
        "<html><body><table class=\"table table-lg\"><thead><tr><th>Mata Uang</th><th>Nilai</th><th>Kurs Jual</th><th>Kurs Beli</th></tr></thead><tbody>{}</tbody></table></body></html>",
        body
    )
}

pub fn bni_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(currency, buy, sell)| {
            format!(
                "<tr>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n</tr>",
                currency, buy, sell
            )
        })
        .collect();
    format!(
        "<html><body>\
         <div id=\"dnn_ctr3510_BNIValasInfoView_divSpecialRates\"><table><tbody><tr><td>XXX</td><td>1,00</td><td>2,00</td></tr></tbody></table></div>\
         <div id=\"dnn_ctr3510_BNIValasInfoView_divBankNotes\"><table><tbody>{}</tbody></table></div>\
         </body></html>",
        body
    )
}

pub fn mega_page(tables: &[&[(&str, &str, &str)]]) -> String {
    let body: String = tables
        .iter()
        .map(|rows| {
            let rows: String = rows
                .iter()
                .map(|(currency, buy, sell)| {
                    format!("<tr><td>{}</td><td>{}</td><td>{}</td></tr>", currency, buy, sell)
                })
                .collect();
            format!("<table><tbody>{}</tbody></table>", rows)
        })
        .collect();
    format!("<html><body>{}</body></html>", body)
}

pub fn assert_rate(actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("expected rate {}, got None", expected));
    assert!(
        (value - expected).abs() < 1e-9,
        "expected rate {}, got {}",
        expected,
        value
    );
}
