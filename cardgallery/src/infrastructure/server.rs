// src/infrastructure/server.rs
use crate::application::{CardRepository, DetailPage, Navigator, Route};
use crate::infrastructure::JsonCardRepository;
use crate::ports::HtmlPresenter;
use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::{Query, Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared, read-only state of every request.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<JsonCardRepository>,
    presenter: Arc<HtmlPresenter>,
    assets: Option<ServeDir>,
}

impl AppState {
    pub fn new(repository: JsonCardRepository, presenter: HtmlPresenter) -> Self {
        Self {
            repository: Arc::new(repository),
            presenter: Arc::new(presenter),
            assets: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    #[serde(default)]
    q: String,
}

/// Every request goes through [`Route::parse`]; paths that are no route are
/// looked up in `assets_dir`.
pub fn build_router(mut state: AppState, assets_dir: Option<PathBuf>) -> Router {
    if let Some(dir) = assets_dir {
        debug!(dir = %dir.display(), "Serving assets");
        state.assets = Some(ServeDir::new(dir));
    }

    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, router: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Card gallery listening on http://{addr}/");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match Route::parse(request.uri().path()) {
        Some(Route::Root) => match Query::<GalleryParams>::try_from_uri(request.uri()) {
            Ok(Query(params)) => render_gallery(&state, params.q),
            Err(rejection) => rejection.into_response(),
        },
        Some(route) => render_route(&state, route),
        None => serve_asset(&state, request).await,
    }
}

async fn serve_asset(state: &AppState, request: Request) -> Response {
    let Some(assets) = state.assets.clone() else {
        return not_found(state);
    };

    let path = request.uri().path().to_string();
    let response = match assets.oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    };
    if response.status() == StatusCode::NOT_FOUND {
        debug!(%path, "No route or asset");
        return not_found(state);
    }
    response
}

fn render_gallery(state: &AppState, query: String) -> Response {
    let repository: &JsonCardRepository = &state.repository;
    let mut navigator = Navigator::new(repository);
    navigator.set_query(query);
    Html(state.presenter.render_screen(&navigator.render())).into_response()
}

fn not_found(state: &AppState) -> Response {
    let page = DetailPage::not_found("");
    (
        StatusCode::NOT_FOUND,
        Html(state.presenter.render_detail(&page)),
    )
        .into_response()
}

fn render_route(state: &AppState, route: Route) -> Response {
    let repository: &JsonCardRepository = &state.repository;
    let mut navigator = Navigator::new(repository);
    navigator.navigate(route);

    let screen = navigator.render();
    let status = if screen.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    debug!(route = %navigator.route(), %status, cards = repository.all_cards().len(), "Rendered route");

    (status, Html(state.presenter.render_screen(&screen))).into_response()
}
