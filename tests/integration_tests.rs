//! Integration tests for the Petra site server
//!
//! These tests boot the real router on an ephemeral port and exercise the
//! language routing end to end over HTTP.

use std::sync::Arc;

use petra_site::{
    config::Config,
    i18n::{resolve_path, switch_language, t, Key, Language},
    server::{create_router, AppState},
};
use reqwest::{redirect::Policy, StatusCode};

// ==================== Test Helpers ====================

fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        strict_translations: false,
    }
}

/// Start the server on a random port and return its base URL.
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let app = create_router(Arc::new(AppState::new(create_test_config())));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

async fn get(base: &str, path: &str) -> reqwest::Response {
    client()
        .get(format!("{}{}", base, path))
        .send()
        .await
        .expect("Request failed")
}

// ==================== Root & Redirect Tests ====================

#[tokio::test]
async fn test_root_redirects_to_default_language_home() {
    let base = spawn_server().await;
    let response = get(&base, "/").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/ar");
}

#[tokio::test]
async fn test_language_home_renders() {
    let base = spawn_server().await;
    let response = get(&base, "/en").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-language"], "en");
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(body.contains(r#"data-key="faq.q1""#));
}

// ==================== Language Resolution Tests ====================

#[tokio::test]
async fn test_arabic_page_is_rtl() {
    let base = spawn_server().await;
    let response = get(&base, "/ar/about").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-language"], "ar");
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(body.contains("اكتشف بترا"));
}

#[tokio::test]
async fn test_unsupported_language_renders_default() {
    let base = spawn_server().await;
    let response = get(&base, "/xx/about").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-language"], "ar");
    let body = response.text().await.unwrap();
    assert!(!body.is_empty());
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(body.contains(r#"data-key="about.section.paragraph1""#));
    assert!(body.contains(r#"class="language-toggle" href="/en/about""#));
}

#[tokio::test]
async fn test_language_segment_is_case_sensitive() {
    let base = spawn_server().await;
    let response = get(&base, "/EN/services").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-language"], "ar");
}

#[tokio::test]
async fn test_encoded_segment_resolves_once_for_page_and_toggle() {
    let base = spawn_server().await;
    let response = get(&base, "/%65n/about").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-language"], "ar");
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(body.contains(r#"class="language-toggle" href="/en/about""#));
    assert!(!body.contains(r#"hreflang="ar" lang="ar""#));
}

// ==================== Page Routing Tests ====================

#[tokio::test]
async fn test_trailing_slash_renders_language_home() {
    let base = spawn_server().await;
    let response = get(&base, "/en/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-language"], "en");
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(body.contains(r#"data-key="faq.q1""#));
    assert!(body.contains(r#"class="language-toggle" href="/ar""#));
}

#[tokio::test]
async fn test_empty_segment_toggle_is_normalized() {
    let base = spawn_server().await;
    let response = get(&base, "/en//about").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"class="language-toggle" href="/ar/about""#));
}

#[tokio::test]
async fn test_every_page_renders_in_both_languages() {
    let base = spawn_server().await;

    for page in petra_site::pages::PAGES {
        for language in [Language::English, Language::Arabic] {
            let path = petra_site::i18n::lang_link(language, &page.route());
            let response = get(&base, &path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);

            let body = response.text().await.unwrap();
            let title = petra_site::render::escape_html(page.title.text(language));
            assert!(body.contains(&title), "{} missing its title", path);
        }
    }
}

#[tokio::test]
async fn test_unknown_route_is_localized_not_found() {
    let base = spawn_server().await;
    let response = get(&base, "/en/careers").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains("Page Not Found"));
    assert!(body.contains(r#"<a href="/en">Return to Home</a>"#));
}

#[tokio::test]
async fn test_language_toggle_keeps_query() {
    let base = spawn_server().await;
    let body = get(&base, "/en/services?tab=storage")
        .await
        .text()
        .await
        .unwrap();

    assert!(body.contains(r#"href="/ar/services?tab=storage""#));
    assert!(body.contains(r#"data-history="replace""#));
}

// ==================== Health & Metrics Tests ====================

#[tokio::test]
async fn test_health() {
    let base = spawn_server().await;
    let response = get(&base, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_metrics_count_views_and_fallbacks() {
    let base = spawn_server().await;
    get(&base, "/en/about").await;
    get(&base, "/ar/about").await;
    get(&base, "/xx/about").await;
    get(&base, "/en/nowhere").await;

    let json: serde_json::Value = get(&base, "/metrics").await.json().await.unwrap();
    assert_eq!(json["page_views"]["en"], 1);
    assert_eq!(json["page_views"]["ar"], 2);
    assert_eq!(json["total_page_views"], 3);
    assert_eq!(json["language_fallbacks"], 1);
    assert_eq!(json["not_found"], 1);
}

// ==================== Library Scenario Tests ====================

#[test]
fn test_panel_title_follows_active_language() {
    let arabic = resolve_path("/ar/about");
    let english = resolve_path("/en/about");

    assert_eq!(arabic.t("panel.title"), "اكتشف بترا");
    assert_eq!(english.t("panel.title"), "Discover Petra");
}

#[test]
fn test_switch_then_resolve() {
    let nav = switch_language("/en/contact", Language::Arabic).expect("Should navigate");
    assert_eq!(nav.to, "/ar/contact");
    assert_eq!(resolve_path(&nav.to).language, Language::Arabic);
}

#[test]
fn test_every_key_translates_in_every_language() {
    for key in Key::ALL {
        for language in [Language::English, Language::Arabic] {
            assert_eq!(t(language, key.as_str()), key.text(language));
        }
    }
}
