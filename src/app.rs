use axum::{
    extract::{Path, Query as AxumQuery, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::catalog::{self, Poem, Story};
use crate::config::AppConfig;
use crate::dictionary::{first_definition, random_funny_message, DictionaryClient, DictionaryError, RecentSearches};
use crate::downloader::{csv_filename, to_csv};
use crate::feedback::{FeedbackRow, FeedbackStore, FeedbackSubmission};
use crate::login::{
    self, Authenticator, CredentialAuthenticator, Credentials, Role,
};
use crate::prefs::{FilePreferences, PreferenceStore, SHOW_VERSION_NOTICE};
use crate::query::{apply, Query, SortDirection};

const SESSION_COOKIE: &str = "session";

pub struct AppState {
    store: FeedbackStore,
    feedback: RwLock<Vec<FeedbackRow>>,
    fetch_generation: AtomicU64,
    dictionary: DictionaryClient,
    recent: Mutex<RecentSearches<Arc<FilePreferences>>>,
    prefs: Arc<FilePreferences>,
    auth: CredentialAuthenticator,
}

/// List-view query parameters shared by every collection endpoint
#[derive(Deserialize)]
struct ListParams {
    search: Option<String>,
    category: Option<String>,
    sort: Option<String>,
    dir: Option<String>,
}

impl ListParams {
    fn into_query(self, default_sort: &str, default_dir: SortDirection) -> Query {
        Query {
            search_term: self.search.unwrap_or_default(),
            category_filter: self
                .category
                .unwrap_or_else(|| "all".to_string()),
            sort_field: self.sort.unwrap_or_else(|| default_sort.to_string()),
            sort_direction: self
                .dir
                .map(|d| SortDirection::parse(&d))
                .unwrap_or(default_dir),
        }
    }
}

#[derive(Serialize)]
struct ApiResponse {
    status: String,
    message: Option<String>,
}

impl ApiResponse {
    fn ok() -> ApiResponse {
        ApiResponse {
            status: "ok".to_string(),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> ApiResponse {
        ApiResponse {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = Arc::new(
        FilePreferences::open(&config.database_dir).map_err(std::io::Error::other)?,
    );
    let auth =
        CredentialAuthenticator::open(&config.database_dir).map_err(std::io::Error::other)?;

    let app_state = Arc::new(AppState {
        store: FeedbackStore::new(&config),
        feedback: RwLock::new(Vec::new()),
        fetch_generation: AtomicU64::new(0),
        dictionary: DictionaryClient::new(&config),
        recent: Mutex::new(RecentSearches::load(prefs.clone())),
        prefs,
        auth,
    });

    let app = Router::new()
        .route("/", get(serve_landing))
        .route("/api/stories", get(list_stories))
        .route("/api/poems", get(list_poems))
        .route("/api/login", post(handle_login))
        .route("/api/logout", post(handle_logout))
        .route("/api/feedback", get(list_feedback).post(submit_feedback))
        .route("/api/feedback/export", get(export_feedback))
        .route("/api/feedback/:timestamp", delete(delete_feedback))
        .route("/api/dictionary/recent", get(recent_searches))
        .route("/api/dictionary/:term", get(lookup_word))
        .route(
            "/api/version-notice",
            get(get_version_notice).post(set_version_notice),
        )
        .nest_service("/static", ServeDir::new("static"))
        .with_state(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    log::info!(
        "{} v{} listening on http://{}",
        crate::config::APP_NAME,
        crate::config::APP_VERSION,
        config.bind_addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_landing() -> Html<&'static str> {
    Html(include_str!("./static/landing.html"))
}

// ---- content listings ----

#[derive(Serialize)]
struct ListingResponse<R> {
    total: usize,
    items: Vec<R>,
    categories: Vec<CategoryInfo>,
}

#[derive(Serialize)]
struct CategoryInfo {
    id: &'static str,
    name: &'static str,
}

async fn list_stories(AxumQuery(params): AxumQuery<ListParams>) -> Json<ListingResponse<Story>> {
    let all = catalog::stories();
    let query = params.into_query("", SortDirection::Ascending);
    let items = apply(&all, &query);

    Json(ListingResponse {
        total: all.len(),
        items,
        categories: catalog::story_categories()
            .into_iter()
            .map(|(id, name)| CategoryInfo { id, name })
            .collect(),
    })
}

async fn list_poems(AxumQuery(params): AxumQuery<ListParams>) -> Json<ListingResponse<Poem>> {
    let all = catalog::poems();
    let query = params.into_query("", SortDirection::Ascending);
    let items = apply(&all, &query);

    Json(ListingResponse {
        total: all.len(),
        items,
        categories: catalog::poem_categories()
            .into_iter()
            .map(|(id, name)| CategoryInfo { id, name })
            .collect(),
    })
}

// ---- authentication ----

async fn handle_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Response {
    match state.auth.authenticate(&credentials) {
        Ok(profile) => {
            let session_id = login::create_session(&profile.username, profile.role);
            let jar = jar.add(Cookie::new(SESSION_COOKIE, session_id));
            (jar, Json(serde_json::json!({ "status": "ok", "user": profile })))
                .into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        )
            .into_response(),
    }
}

async fn handle_logout(jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        login::destroy_session(cookie.value());
    }

    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    (jar, Json(ApiResponse::ok())).into_response()
}

/// Resolve the session cookie and require the admin role
///
/// The feedback log and its export are restricted to administrators; a
/// missing or expired session answers 401, a non-admin session 403.
fn require_admin(jar: &CookieJar) -> Result<login::Session, Response> {
    let cookie = jar.get(SESSION_COOKIE).ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Please log in first")),
        )
            .into_response()
    })?;

    let session = login::validate_session(cookie.value()).ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Session expired. Please log in again.")),
        )
            .into_response()
    })?;

    if session.role != Role::Admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "You don't have permission to view this page. This area is restricted to administrators only.",
            )),
        )
            .into_response());
    }

    Ok(session)
}

// ---- feedback log ----

/// Re-fetch the feedback rows, last-write-wins
///
/// Each call claims a fetch generation; a result that arrives after a newer
/// fetch has started is discarded, so a slow response can never overwrite a
/// fresher one. On failure the previously loaded rows stay in place and a
/// retryable message is returned.
async fn refresh_feedback(state: &AppState) -> Option<String> {
    let generation = state.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;

    match state.store.fetch_all().await {
        Ok(rows) => {
            if state.fetch_generation.load(Ordering::SeqCst) == generation {
                *state.feedback.write().unwrap() = rows;
            } else {
                log::debug!("discarding superseded feedback fetch (generation {})", generation);
            }
            None
        }
        Err(e) => {
            log::error!("Failed to fetch feedback data: {}", e);
            Some("Failed to load feedback data. Please try again later.".to_string())
        }
    }
}

#[derive(Serialize)]
struct FeedbackListResponse {
    total: usize,
    entries: Vec<FeedbackRow>,
    error: Option<String>,
}

async fn list_feedback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    AxumQuery(params): AxumQuery<ListParams>,
) -> Response {
    if let Err(denied) = require_admin(&jar) {
        return denied;
    }

    let error = refresh_feedback(&state).await;
    let rows = state.feedback.read().unwrap().clone();
    let query = params.into_query("timestamp", SortDirection::Descending);
    let entries = apply(&rows, &query);

    Json(FeedbackListResponse {
        total: rows.len(),
        entries,
        error,
    })
    .into_response()
}

async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<FeedbackSubmission>,
) -> Response {
    let row = match submission.into_row() {
        Ok(row) => row,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(e.to_string())),
            )
                .into_response();
        }
    };

    match state.store.submit(&row).await {
        Ok(()) => Json(ApiResponse::ok()).into_response(),
        Err(e) => {
            log::error!("Error submitting feedback: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::error(
                    "Failed to submit feedback. Please try again later.",
                )),
            )
                .into_response()
        }
    }
}

async fn delete_feedback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(timestamp): Path<String>,
) -> Response {
    if let Err(denied) = require_admin(&jar) {
        return denied;
    }

    match state.store.delete_by_timestamp(&timestamp).await {
        Ok(()) => {
            // Mirror the mock store locally so development mode observes
            // the deletion too.
            if !state.store.is_configured() {
                state
                    .feedback
                    .write()
                    .unwrap()
                    .retain(|row| row.timestamp != timestamp);
            } else {
                refresh_feedback(&state).await;
            }
            Json(ApiResponse::ok()).into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::error(format!(
                "Failed to delete entry: {}. Please try again later.",
                e
            ))),
        )
            .into_response(),
    }
}

async fn export_feedback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    AxumQuery(params): AxumQuery<ListParams>,
) -> Response {
    if let Err(denied) = require_admin(&jar) {
        return denied;
    }

    let rows = state.feedback.read().unwrap().clone();
    let query = params.into_query("timestamp", SortDirection::Descending);
    let filtered = apply(&rows, &query);

    match to_csv(&filtered) {
        Some(csv) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/csv;charset=utf-8")
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", csv_filename()),
            )
            .body(axum::body::Body::from(csv))
            .unwrap(),
        // A zero-row export is a no-op, not an error
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

// ---- dictionary ----

async fn lookup_word(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Response {
    match state.dictionary.lookup(&term).await {
        Ok(entries) => {
            if let Some(definition) = first_definition(&entries) {
                let mut recent = state.recent.lock().unwrap();
                if let Err(e) = recent.record(term.trim(), &definition) {
                    log::warn!("failed to persist recent searches: {}", e);
                }
            }
            Json(serde_json::json!({ "status": "ok", "entries": entries })).into_response()
        }
        Err(e @ DictionaryError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "status": "error",
                "message": e.to_string(),
                "funny": random_funny_message(),
            })),
        )
            .into_response(),
        Err(e) => {
            log::error!("dictionary lookup failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::error("Failed to fetch definition")),
            )
                .into_response()
        }
    }
}

async fn recent_searches(State(state): State<Arc<AppState>>) -> Response {
    let recent = state.recent.lock().unwrap();
    Json(serde_json::json!({ "searches": recent.list() })).into_response()
}

// ---- preferences ----

#[derive(Deserialize)]
struct VersionNoticeUpdate {
    show: bool,
}

async fn get_version_notice(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let show = state
        .prefs
        .get(SHOW_VERSION_NOTICE)
        .map(|v| v != "false")
        .unwrap_or(true);

    Json(serde_json::json!({ "show": show }))
}

async fn set_version_notice(
    State(state): State<Arc<AppState>>,
    Json(update): Json<VersionNoticeUpdate>,
) -> Response {
    let value = if update.show { "true" } else { "false" };

    match state.prefs.set(SHOW_VERSION_NOTICE, value) {
        Ok(()) => Json(ApiResponse::ok()).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e)),
        )
            .into_response(),
    }
}
