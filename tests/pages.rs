use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use url::Url;

use login_theme::context::mock;
use login_theme::sanitize::AllowList;
use login_theme::state::AppState;

fn app() -> Router {
    let base = Url::parse("http://localhost:8080/realms/demo/").unwrap();
    let state = AppState::new(Arc::new(AllowList::default()), mock::login(&base));
    login_theme::app(state)
}

async fn body(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn render_request(json: &str) -> Request<Body> {
    Request::post("/render")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

#[tokio::test]
async fn should_report_health() {
    let resp = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_render_login_page_from_context() {
    let resp = app()
        .oneshot(render_request(
            r#"{
                "pageId": "login.ftl",
                "realm": { "displayName": "Acme", "password": true, "loginWithEmailAllowed": true },
                "url": { "loginAction": "https://idp.example.com/login-actions/authenticate?code=abc" },
                "messagesPerField": { "password": "Invalid username or password." }
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    let html = body(resp).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Sign in to Acme</title>"));
    assert!(html.contains(
        r#"action="https://idp.example.com/login-actions/authenticate?code=abc" method="post""#
    ));
    assert!(html.contains("Username or email"));
    assert!(html.contains("Invalid username or password."));
    assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 2);
}

#[tokio::test]
async fn should_render_nothing_for_missing_sections() {
    let resp = app()
        .oneshot(render_request(r#"{ "pageId": "login.ftl" }"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains(r#"id="kc-form""#));
    assert!(!html.contains("kc-form-login"));
    assert!(!html.contains("kc-social-providers"));
    assert!(!html.contains("kc-alert"));
    assert!(!html.contains("kc-locale"));
}

#[tokio::test]
async fn should_suppress_warning_in_app_initiated_action() {
    let context = |app_initiated: bool| {
        format!(
            r#"{{
                "pageId": "login.ftl",
                "isAppInitiatedAction": {app_initiated},
                "message": {{ "type": "warning", "summary": "Update your password" }}
            }}"#
        )
    };

    let html = body(app().oneshot(render_request(&context(true))).await.unwrap()).await;
    assert!(!html.contains("kc-alert"));

    let html = body(app().oneshot(render_request(&context(false))).await.unwrap()).await;
    assert!(html.contains("kc-alert"));
    assert!(html.contains("Update your password"));
}

#[tokio::test]
async fn should_reject_unsupported_page() {
    let resp = app()
        .oneshot(render_request(r#"{ "pageId": "register.ftl" }"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body(resp).await,
        "page is not supported by this theme: register.ftl"
    );
}

#[tokio::test]
async fn should_reject_malformed_context() {
    let resp = app().oneshot(render_request("{")).await.unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn should_preview_login_page_with_mock_context() {
    let resp = app()
        .oneshot(
            Request::get("/preview/login.ftl")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains("<title>Sign in to Crypto Insights</title>"));
    assert!(html.contains(r#"id="social-github""#));
    assert!(html.contains(r#"id="language-2""#));
    assert!(html.contains(r#"name="rememberMe""#));
    assert!(html.contains("kc-registration"));
}

#[tokio::test]
async fn should_not_preview_unknown_page() {
    let resp = app()
        .oneshot(Request::get("/preview/info.ftl").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_render_demo_card() {
    let resp = app()
        .oneshot(Request::get("/demo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains("<title>Welcome back</title>"));
    assert!(html.contains(r#"action="/demo" method="post""#));
}

#[tokio::test]
async fn should_echo_demo_submission_without_password() {
    let resp = app()
        .oneshot(
            Request::post("/demo")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=jdoe&password=hunter2&remember=on"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains(r#"name="username" value="jdoe""#));
    assert!(html.contains(r#"name="remember" checked>"#));
    assert!(!html.contains("hunter2"));
}
