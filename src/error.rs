use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, error};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("page is not supported by this theme: {0}")]
    UnsupportedPage(String),

    #[error(transparent)]
    _Io(#[from] std::io::Error),
    #[error(transparent)]
    _ParseJson(#[from] serde_json::Error),
}

impl From<&Error> for StatusCode {
    fn from(e: &Error) -> Self {
        match e {
            Error::UnsupportedPage(_) => Self::NOT_FOUND,
            Error::_Io(_) | Error::_ParseJson(_) => Self::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);

        let message = match self {
            Error::UnsupportedPage(_) => {
                debug!("{self}");
                self.to_string()
            }
            Error::_Io(_) | Error::_ParseJson(_) => {
                error!("Failed to render page: {self}");
                "Something went wrong".to_owned()
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_map_unsupported_page_to_not_found() {
        let e = Error::UnsupportedPage("register.ftl".into());

        assert_eq!(StatusCode::from(&e), StatusCode::NOT_FOUND);
        assert_eq!(
            e.to_string(),
            "page is not supported by this theme: register.ftl"
        );
    }

    #[test]
    fn should_map_json_error_to_internal_server_error() {
        let e: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert_eq!(StatusCode::from(&e), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_hide_internal_details_from_response() {
        let e: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "/etc/ctx.json").into();

        let resp = e.into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
