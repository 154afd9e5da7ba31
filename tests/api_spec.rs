use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use folio::api::middleware::RateLimiter;
use folio::api::{create_router, AppState, ContactResponse, ErrorBody, ThemeResponse};
use folio::contact::{ContactRelay, EmailMessage, MailError, Mailer};
use folio::content::ContentStore;
use folio::models::*;
use folio::sitemap::SitemapEntry;
use folio::theme::{ColorScheme, MemoryStore, Theme, ThemeService};
use serde_json::json;

/// Records every message and answers with a fixed id, or fails on demand.
#[derive(Default)]
struct StubMailer {
    sent: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<Option<String>, MailError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(MailError::Rejected {
                status: 500,
                body: "provider exploded: secret-internal-detail".to_string(),
            })
        } else {
            Ok(Some("msg_123".to_string()))
        }
    }
}

fn state_with(mailer: Arc<StubMailer>) -> AppState {
    let content = Arc::new(ContentStore::portfolio());
    let themes = ThemeService::new(Arc::new(MemoryStore::new()), ColorScheme::NoPreference);
    let relay = ContactRelay::new(mailer, "site@example.dev", "me@example.dev");
    AppState::new(content, themes, relay, "https://example.dev")
}

fn setup() -> TestServer {
    setup_with(Arc::new(StubMailer::default()))
}

fn setup_with(mailer: Arc<StubMailer>) -> TestServer {
    TestServer::new(create_router(state_with(mailer))).expect("Failed to create test server")
}

mod contact {
    use super::*;

    #[tokio::test]
    async fn valid_submission_returns_message_id() {
        let mailer = Arc::new(StubMailer::default());
        let server = setup_with(mailer.clone());

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": "Jane", "email": "jane@example.com", "message": "Hello" }))
            .await;

        response.assert_status_ok();
        let body: ContactResponse = response.json();
        assert!(body.success);
        assert_eq!(body.message_id.as_deref(), Some("msg_123"));
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_name_is_missing_fields() {
        let mailer = Arc::new(StubMailer::default());
        let server = setup_with(mailer.clone());

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": "", "email": "jane@example.com", "message": "Hello" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Missing required fields");
        assert_eq!(body.reason.as_deref(), Some("missing_fields"));
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn whitespace_only_fields_are_missing() {
        let server = setup();

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": "Jane", "email": "jane@example.com", "message": "   " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorBody>().error, "Missing required fields");
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let server = setup();

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": "Jane", "email": "not-an-email", "message": "Hello" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Invalid email address");
        assert_eq!(body.reason.as_deref(), Some("invalid_email"));
    }

    #[tokio::test]
    async fn provider_failure_is_generic_server_error() {
        let server = setup_with(Arc::new(StubMailer {
            fail: true,
            ..Default::default()
        }));

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": "Jane", "email": "jane@example.com", "message": "Hello" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Failed to send message. Please try again later.");
        assert!(!response.text().contains("secret-internal-detail"));
    }

    #[tokio::test]
    async fn null_field_is_missing_fields() {
        let mailer = Arc::new(StubMailer::default());
        let server = setup_with(mailer.clone());

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": null, "email": "jane@example.com", "message": "Hello" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Missing required fields");
        assert_eq!(body.reason.as_deref(), Some("missing_fields"));
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_json_is_client_error() {
        let server = setup();

        let response = server
            .post("/api/contact")
            .content_type("application/json")
            .bytes(Bytes::from_static(b"{not json"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submissions_over_the_limit_are_throttled() {
        let state = state_with(Arc::new(StubMailer::default()))
            .with_rate_limiter(RateLimiter::per_minute(2));
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");
        let body = json!({ "name": "Jane", "email": "jane@example.com", "message": "Hello" });

        server.post("/api/contact").json(&body).await.assert_status_ok();
        server.post("/api/contact").json(&body).await.assert_status_ok();

        let response = server.post("/api/contact").json(&body).await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.json::<ErrorBody>().error, "Too many requests");
    }

    #[tokio::test]
    async fn form_submission_renders_confirmation() {
        let server = setup();

        let response = server
            .post("/contact")
            .form(&[("name", "Jane"), ("email", "jane@example.com"), ("message", "Hello")])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("Your message has been sent"));
    }

    #[tokio::test]
    async fn invalid_form_submission_shows_reason() {
        let server = setup();

        let response = server
            .post("/contact")
            .form(&[("name", "Jane"), ("email", "nope"), ("message", "Hello")])
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Invalid email address"));
    }
}

mod content {
    use super::*;

    #[tokio::test]
    async fn lists_all_projects_without_filters() {
        let server = setup();

        let response = server.get("/api/projects").await;

        response.assert_status_ok();
        let projects: Vec<Project> = response.json();
        assert_eq!(projects.len(), 9);
    }

    #[tokio::test]
    async fn ai_tag_returns_tagged_subset_in_order() {
        let server = setup();
        let all = ContentStore::portfolio().projects;

        let response = server.get("/api/projects").add_query_param("tags", "AI").await;

        response.assert_status_ok();
        let slugs: Vec<String> = response
            .json::<Vec<Project>>()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        let expected: Vec<String> = all
            .into_iter()
            .filter(|p| p.tags.iter().any(|t| t == "AI"))
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, expected);
        assert_eq!(
            slugs,
            vec!["neural-search", "cardio-watch", "lecture-notes-llm", "retina-grader"]
        );
    }

    #[tokio::test]
    async fn search_and_tags_combine() {
        let server = setup();

        let response = server
            .get("/api/projects")
            .add_query_param("q", "RETINA")
            .add_query_param("tags", "AI,Health")
            .await;

        let projects: Vec<Project> = response.json();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].slug, "retina-grader");
    }

    #[tokio::test]
    async fn get_project_returns_404_for_unknown_slug() {
        let server = setup();

        let response = server.get("/api/projects/does-not-exist").await;

        response.assert_status_not_found();
        assert_eq!(response.json::<ErrorBody>().error, "Project not found");
    }

    #[tokio::test]
    async fn posts_are_newest_first() {
        let server = setup();

        let posts: Vec<BlogPostMeta> = server.get("/api/posts").await.json();

        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].published >= w[1].published));
    }

    #[tokio::test]
    async fn project_tags_are_sorted_and_unique() {
        let server = setup();

        let tags: Vec<String> = server.get("/api/tags/projects").await.json();

        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert!(tags.contains(&"AI".to_string()));
    }

    #[tokio::test]
    async fn sitemap_lists_every_project_and_post() {
        let server = setup();

        let entries: Vec<SitemapEntry> = server.get("/api/sitemap").await.json();

        assert_eq!(entries.len(), 6 + 9 + 3);
        assert_eq!(entries[0].url, "https://example.dev");
        assert!(entries
            .iter()
            .any(|e| e.url == "https://example.dev/projects/neural-search"));
    }

    #[tokio::test]
    async fn sitemap_xml_is_served_as_xml() {
        let server = setup();

        let response = server.get("/sitemap.xml").await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().starts_with("application/xml"));
        assert!(response.text().contains("<loc>https://example.dev/blog</loc>"));
    }

    #[tokio::test]
    async fn health_check() {
        let server = setup();

        let response = server.get("/api/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod theme {
    use super::*;

    #[tokio::test]
    async fn starts_light_without_preference() {
        let server = setup();

        let body: ThemeResponse = server.get("/api/theme").await.json();

        assert_eq!(body.theme, Theme::Light);
        assert_eq!(body.changed, None);
    }

    #[tokio::test]
    async fn setting_same_theme_reports_no_change() {
        let server = setup();

        let first: ThemeResponse = server
            .put("/api/theme")
            .json(&json!({ "theme": "dark" }))
            .await
            .json();
        let second: ThemeResponse = server
            .put("/api/theme")
            .json(&json!({ "theme": "dark" }))
            .await
            .json();

        assert_eq!(first.changed, Some(true));
        assert_eq!(second.changed, Some(false));
        assert_eq!(second.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn unknown_theme_is_rejected() {
        let server = setup();

        let response = server
            .put("/api/theme")
            .json(&json!({ "theme": "sepia" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorBody>().reason.as_deref(), Some("invalid_theme"));
    }

    #[tokio::test]
    async fn wrong_field_name_is_invalid_body() {
        let server = setup();

        let response = server
            .put("/api/theme")
            .json(&json!({ "mode": "dark" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Invalid request body");
        assert_eq!(body.reason.as_deref(), Some("invalid_body"));

        let current: ThemeResponse = server.get("/api/theme").await.json();
        assert_eq!(current.theme, Theme::Light);
    }

    #[tokio::test]
    async fn toggle_cycles_through_themes() {
        let server = setup();

        let mut seen = Vec::new();
        for _ in 0..3 {
            let body: ThemeResponse = server.post("/api/theme/toggle").await.json();
            seen.push(body.theme);
        }
        assert_eq!(seen, vec![Theme::Dark, Theme::Contrast, Theme::Light]);
    }

    #[tokio::test]
    async fn form_toggle_redirects_back() {
        let server = setup();

        let response = server
            .post("/theme/toggle")
            .form(&[("back", "/projects")])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/projects");

        let page = server.get("/projects").await.text();
        assert!(page.contains("data-theme=\"dark\""));
    }

    #[tokio::test]
    async fn form_toggle_keeps_active_filter() {
        let server = setup();

        let page = server
            .get("/projects")
            .add_query_param("q", "ai")
            .add_query_param("tags", "AI")
            .await
            .text();
        assert!(page.contains("name=\"back\" value=\"/projects?q=ai&amp;tags=AI\""));

        let response = server
            .post("/theme/toggle")
            .form(&[("back", "/projects?q=ai&tags=AI")])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/projects?q=ai&tags=AI");
    }

    #[tokio::test]
    async fn form_toggle_ignores_external_targets() {
        let server = setup();

        let response = server
            .post("/theme/toggle")
            .form(&[("back", "https://evil.example/")])
            .await;

        assert_eq!(response.header("location"), "/");
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn home_page_renders_profile() {
        let server = setup();
        let profile = ContentStore::portfolio().profile;

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&profile.name));
    }

    #[tokio::test]
    async fn projects_page_applies_filter() {
        let server = setup();

        let html = server
            .get("/projects")
            .add_query_param("tags", "Tools")
            .await
            .text();

        assert!(html.contains("/projects/ledger-cli"));
        assert!(!html.contains("/projects/neural-search\""));
    }

    #[tokio::test]
    async fn unknown_project_page_is_404_with_layout() {
        let server = setup();

        let response = server.get("/projects/nope").await;

        response.assert_status_not_found();
        assert!(response.text().contains("Page not found"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let server = setup();

        server.get("/definitely/not/here").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn unknown_api_route_is_json_404() {
        let server = setup();

        let response = server.get("/api/nothing").await;

        response.assert_status_not_found();
        assert_eq!(response.json::<ErrorBody>().error, "Not found");
    }

    #[tokio::test]
    async fn every_nav_page_renders() {
        let server = setup();

        for path in ["/", "/projects", "/experience", "/blog", "/scholarships", "/contact"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert!(response.text().contains("aria-current=\"page\""), "{}", path);
        }
    }

    #[tokio::test]
    async fn background_is_svg() {
        let server = setup();

        let response = server
            .get("/background.svg")
            .add_query_param("width", "800")
            .add_query_param("height", "600")
            .add_query_param("theme", "contrast")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "image/svg+xml");
        assert!(response.text().starts_with("<svg"));
    }

    #[tokio::test]
    async fn background_is_deterministic_per_seed() {
        let server = setup();

        let first = server.get("/background.svg").add_query_param("seed", "7").await.text();
        let second = server.get("/background.svg").add_query_param("seed", "7").await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn largest_animated_background_renders() {
        let server = setup();

        let started = std::time::Instant::now();
        let response = server
            .get("/background.svg")
            .add_query_param("width", "100000")
            .add_query_param("height", "100000")
            .add_query_param("frames", "100000")
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("viewBox=\"0 0 3840 2160\""));
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
