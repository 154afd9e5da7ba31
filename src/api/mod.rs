mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::contact::{ContactRelay, Mailer};
use crate::content::ContentStore;
use crate::theme::{FileStore, MemoryStore, PreferenceStore, ThemeService};

pub use handlers::{ContactResponse, ErrorBody, ThemeResponse};
use middleware::{rate_limit_middleware, RateLimiter};

/// Shared state of every request handler.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub themes: ThemeService,
    pub relay: ContactRelay,
    /// Public base URL for absolute links.
    pub site_url: String,
    pub rate_limiter: Option<RateLimiter>,
}

impl AppState {
    pub fn new(
        content: Arc<ContentStore>,
        themes: ThemeService,
        relay: ContactRelay,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            content,
            themes,
            relay,
            site_url: site_url.into(),
            rate_limiter: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Wire up the portfolio content, theme persistence and contact relay.
    pub fn from_config(config: &SiteConfig, mailer: Arc<dyn Mailer>) -> Self {
        let content = Arc::new(ContentStore::portfolio());

        let store: Arc<dyn PreferenceStore> = match &config.preferences_path {
            Some(path) => Arc::new(FileStore::new(path)),
            None => match FileStore::open_default() {
                Some(store) => Arc::new(store),
                None => {
                    tracing::warn!("No config directory; theme preference will not persist");
                    Arc::new(MemoryStore::new())
                }
            },
        };
        let themes = ThemeService::new(store, config.color_scheme);

        let to = config
            .contact_to
            .clone()
            .unwrap_or_else(|| content.profile.email.clone());
        let relay = ContactRelay::new(mailer, config.contact_from.clone(), to);

        let state = Self::new(content, themes, relay, config.site_url.clone());
        match config.contact_rate_limit {
            0 => state,
            limit => state.with_rate_limiter(RateLimiter::per_minute(limit)),
        }
    }
}

/// Apply the contact rate limit, if configured, to a method router.
fn rate_limited(
    route: MethodRouter<AppState>,
    limiter: &Option<RateLimiter>,
) -> MethodRouter<AppState> {
    match limiter {
        Some(limiter) => route.layer(from_fn_with_state(limiter.clone(), rate_limit_middleware)),
        None => route,
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Content
        .route("/profile", get(handlers::get_profile))
        .route("/projects", get(handlers::list_projects))
        .route("/projects/{slug}", get(handlers::get_project))
        .route("/tags/projects", get(handlers::list_project_tags))
        .route("/experience", get(handlers::list_experience))
        .route("/skills", get(handlers::list_skills))
        .route("/posts", get(handlers::list_posts))
        .route("/posts/{slug}", get(handlers::get_post))
        .route("/certifications", get(handlers::list_certifications))
        .route("/scholarships", get(handlers::list_scholarships))
        .route("/sitemap", get(handlers::sitemap_json))
        // Theme
        .route("/theme", get(handlers::get_theme).put(handlers::set_theme))
        .route("/theme/toggle", post(handlers::toggle_theme))
        // Health
        .route("/health", get(handlers::health))
        // Contact
        .route(
            "/contact",
            rate_limited(post(handlers::submit_contact), &state.rate_limiter),
        );

    let pages = Router::new()
        .route("/", get(handlers::home_page))
        .route("/projects", get(handlers::projects_page))
        .route("/projects/{slug}", get(handlers::project_page))
        .route("/experience", get(handlers::experience_page))
        .route("/blog", get(handlers::blog_page))
        .route("/blog/{slug}", get(handlers::post_page))
        .route("/scholarships", get(handlers::scholarships_page))
        .route(
            "/contact",
            get(handlers::contact_page).merge(rate_limited(
                post(handlers::submit_contact_form),
                &state.rate_limiter,
            )),
        )
        .route("/theme/toggle", post(handlers::toggle_theme_form))
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/background.svg", get(handlers::background_svg));

    Router::new()
        .nest("/api", api)
        .merge(pages)
        .fallback(handlers::not_found_page)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
