use std::fmt;

use axum::Router;
use axum::routing::get;
use serde::Deserialize;

use crate::state::AppState;
use crate::{Raw, Redact};

mod handler;
pub mod markup;

pub use markup::StandaloneLoginForm;

pub fn pages<S>(s: AppState) -> Router<S> {
    Router::new()
        .route(
            "/demo",
            get(handler::pages::form).post(handler::pages::submit),
        )
        .with_state(s)
}

#[derive(Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Redact for Password {}

impl Raw for Password {
    fn raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({})", self.redact())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_redact_password_in_debug_output() {
        let password = Password::new("correct horse battery staple");

        assert_eq!(format!("{password:?}"), "Password(********)");
    }
}
