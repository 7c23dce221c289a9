//! Integration tests for the page routes, stylesheet, images and fallback.

mod common;

use axum::http::StatusCode;
use common::{body_text, build_bare_app, build_test_app, content_type, get};
use portfolio_core::assets::cover_image_path;
use portfolio_core::content::site;

// ---------------------------------------------------------------------------
// Test: GET / renders the home page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_renders_html() {
    let response = get(build_bare_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<title>Terence Dumas — Music</title>"));
    assert!(html.contains("Myself First - EP roadmap"));
    assert!(html.contains(r#"href="/covers""#));
}

// ---------------------------------------------------------------------------
// Test: Track 2 renders muted with no action links
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upcoming_track_two_has_no_action_icons() {
    let html = body_text(get(build_bare_app(), "/").await).await;

    let start = html.find("<h3>Track 2</h3>").expect("Track 2 rendered");
    let item_start = html[..start].rfind("<li").expect("inside a list item");
    let item_end = start + html[start..].find("</li>").expect("list item closes");
    let item = &html[item_start..item_end];

    assert!(item.contains("track-upcoming"));
    assert!(!item.contains("track-released"));
    assert!(!item.contains("data-icon"));
    assert!(!item.contains("href="));
}

// ---------------------------------------------------------------------------
// Test: GET /covers renders the index newest first with the live count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn covers_page_lists_every_cover_newest_first() {
    let response = get(build_bare_app(), "/covers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let content = site();

    assert!(html.contains(&format!("{} total", content.cover_index.len())));

    let newest = html
        .find(&cover_image_path(content.cover_index[content.cover_index.len() - 1].title))
        .expect("newest cover rendered");
    let oldest = html
        .find(&cover_image_path(content.cover_index[0].title))
        .expect("oldest cover rendered");
    assert!(newest < oldest);
}

// ---------------------------------------------------------------------------
// Test: stylesheet is served as CSS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let response = get(build_bare_app(), "/assets/site.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/css; charset=utf-8");
    assert!(body_text(response).await.contains(".track-upcoming"));
}

// ---------------------------------------------------------------------------
// Test: cover thumbnails are served from the static dir
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cover_images_are_served_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    let covers = dir.path().join("images/covers");
    std::fs::create_dir_all(&covers).unwrap();
    std::fs::write(covers.join("ponyo-web-500x307.webp"), b"RIFFfakewebp").unwrap();

    let app = build_test_app(dir.path());
    let response = get(app, &cover_image_path("Ponyo")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "RIFFfakewebp");
}

#[tokio::test]
async fn missing_image_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app(dir.path()), "/images/covers/nope-web-500x307.webp").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns an HTML 404 page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_html_404() {
    let response = get(build_bare_app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(content_type(&response).starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"href="/""#));
}
