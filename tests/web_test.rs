//! Router tests for the conversion form

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use tempconv::config::{PageConfig, Settings};
use tempconv::infrastructure::di::ServiceContainer;
use tempconv::infrastructure::web::create_router;
use tempconv::util::testing;

fn test_router() -> Router {
    testing::init_test_setup();
    create_router(Arc::new(ServiceContainer::new(Settings::default())))
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn submit(app: Router, form: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    (status, body_text(resp).await)
}

#[tokio::test]
async fn given_get_when_requesting_form_then_renders_empty_form() {
    let resp = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(resp).await;
    assert!(html.contains("<h2>Temperature Conversion</h2>"));
    assert!(html.contains("Celsius to Fahrenheit"));
    assert!(html.contains("value=\"Convert!\""));
    assert!(!html.contains("<h1"));
}

#[tokio::test]
async fn given_celsius_submission_when_posting_then_shows_fahrenheit() {
    let (status, html) = submit(test_router(), "temp=3&type=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("3°C ⇔ 37.4°F"));
    assert!(html.contains("name=\"temp\" size=\"34\" value=\"3\""));
    assert!(html.contains("value=\"1\" checked"));
}

#[tokio::test]
async fn given_fahrenheit_submission_when_posting_then_shows_celsius() {
    let (status, html) = submit(test_router(), "temp=212&type=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("212°F ⇔ 100°C"));
    assert!(html.contains("value=\"2\" checked"));
}

#[tokio::test]
async fn given_non_numeric_temperature_when_posting_then_marks_invalid() {
    let (status, html) = submit(test_router(), "temp=LOL&type=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("LOL°F ⇔ invalid input"));
    assert!(html.contains("class=\"result invalid\""));
}

#[tokio::test]
async fn given_missing_direction_when_posting_then_asks_for_choice() {
    let (status, html) = submit(test_router(), "temp=10").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please choose a conversion."));
    assert!(html.contains("value=\"10\""));
    assert!(!html.contains("checked"));
}

#[tokio::test]
async fn given_markup_in_temperature_when_posting_then_escaped() {
    let (_, html) = submit(test_router(), "temp=%3Cscript%3Ealert(1)%3C%2Fscript%3E&type=1").await;

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;°C ⇔ invalid input"));
}

#[tokio::test]
async fn given_custom_title_when_rendering_then_uses_settings() {
    let settings = Settings {
        page: PageConfig {
            title: "Office Thermometer".into(),
        },
        ..Settings::default()
    };
    let app = create_router(Arc::new(ServiceContainer::new(settings)));

    let (_, html) = submit(app, "temp=0&type=1").await;

    assert!(html.contains("<title>Office Thermometer</title>"));
    assert!(html.contains("0°C ⇔ 32°F"));
}

#[tokio::test]
async fn given_unsupported_method_when_requesting_then_405() {
    let resp = test_router()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
