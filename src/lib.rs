use axum::{Router, http::StatusCode, middleware, routing::get};

use crate::state::AppState;

pub mod config;
pub mod context;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod login;
pub mod markup;
pub mod page;
pub mod sanitize;
pub mod state;
pub mod template;
pub mod ui;

pub type Result<T> = std::result::Result<T, error::Error>;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(page::pages(state.clone()))
        .merge(demo::pages(state))
        .route("/health", get(|| async { StatusCode::OK }))
        .layer(middleware::map_response(markup::wrap_in_base))
}

pub trait Raw {
    fn raw(&self) -> &str;
}

pub trait Redact: Raw {
    fn redact(&self) -> String {
        if self.raw().is_empty() {
            return String::new();
        }

        "********".to_string()
    }
}

pub trait AsStr {
    fn as_str(&self) -> &str;
}
