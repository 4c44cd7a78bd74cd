use std::convert::Infallible;

use axum::{
    body::Body,
    http::{
        HeaderValue,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

pub const EMPTY: PreEscaped<&'static str> = PreEscaped("");

const DEFAULT_TITLE: &str = "Sign in";

struct Head<'a>(&'a str);

impl Render for Head<'_> {
    fn render(&self) -> Markup {
        html! {
            head {
                meta charset="utf-8" {}
                meta name="viewport" content="width=device-width, initial-scale=1" {}
                title { (self.0) }
                script src="https://unpkg.com/hyperscript.org@0.9.13" {}

                script src="https://unpkg.com/@tailwindcss/browser@4" {}

                link rel="stylesheet" href="/static/styles.css" {}
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.6.0/css/all.min.css" {}
            }
        }
    }
}

fn base(w: &Wrappable) -> Markup {
    html! {
        (DOCTYPE)
        html {
            (Head(&w.title))

            body ."min-h-screen bg-black" {
                (w.content)
            }
        }
    }
}

#[derive(Clone)]
pub struct Wrappable {
    title: String,
    content: Markup,
}

impl Wrappable {
    pub fn new(content: impl Render) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: content.render(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl IntoResponseParts for Wrappable {
    type Error = Infallible;

    fn into_response_parts(
        self,
        mut res: ResponseParts,
    ) -> core::result::Result<ResponseParts, Self::Error> {
        res.extensions_mut().insert(self);
        Ok(res)
    }
}

impl IntoResponse for Wrappable {
    fn into_response(self) -> axum::response::Response {
        (self, ()).into_response()
    }
}

pub async fn wrap_in_base(mut resp: Response) -> impl IntoResponse {
    if let Some(w) = resp.extensions_mut().remove::<Wrappable>() {
        resp.headers_mut().remove(CONTENT_LENGTH);
        resp.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        *resp.body_mut() = Body::new(base(&w).into_string());
        return resp;
    }

    resp
}

pub enum Icon {
    Eye,
    EyeSlash,
    CircleCheck,
    CircleExclamation,
    CircleInfo,
    Globe,
    Github,
    Twitter,
}

impl Render for Icon {
    fn render(&self) -> Markup {
        let class = match self {
            Icon::Eye => "fa-regular fa-eye",
            Icon::EyeSlash => "fa-regular fa-eye-slash",
            Icon::CircleCheck => "fa-solid fa-circle-check",
            Icon::CircleExclamation => "fa-solid fa-circle-exclamation",
            Icon::CircleInfo => "fa-solid fa-circle-info",
            Icon::Globe => "fa-solid fa-globe",
            Icon::Github => "fa-brands fa-github",
            Icon::Twitter => "fa-brands fa-twitter",
        };

        html! {
            i .(class) aria-hidden="true" {}
        }
    }
}

/// Button flipping the `type` of the password input it controls between
/// `password` and `text`. Both eye icons are rendered; the one matching the
/// current visibility is hidden and the click handler swaps them.
pub struct PasswordToggle<'a> {
    target: &'a str,
    shown: bool,
}

impl<'a> PasswordToggle<'a> {
    pub const fn new(target: &'a str, shown: bool) -> Self {
        Self { target, shown }
    }
}

impl Render for PasswordToggle<'_> {
    fn render(&self) -> Markup {
        let target = self.target;
        let toggle_handler = format!(
            r"on click
                if @type of #{target} is 'password'
                    set @type of #{target} to 'text'
                else
                    set @type of #{target} to 'password'
                end
                toggle .hidden on <span/> in me"
        );

        html! {
            button ."absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-100"
                type="button"
                aria-controls=(target)
                aria-pressed=(self.shown)
                _=(toggle_handler)
            {
                span .password-reveal .hidden[self.shown] { (Icon::Eye) }
                span .password-mask .hidden[!self.shown] { (Icon::EyeSlash) }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_render_head() {
        let expected = concat!(
            "<head>",
            r#"<meta charset="utf-8"></meta>"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1"></meta>"#,
            "<title>Sign in to Acme</title>",
            r#"<script src="https://unpkg.com/hyperscript.org@0.9.13"></script>"#,
            r#"<script src="https://unpkg.com/@tailwindcss/browser@4"></script>"#,
            r#"<link rel="stylesheet" href="/static/styles.css"></link>"#,
            r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.6.0/css/all.min.css"></link>"#,
            "</head>"
        );

        let actual = Head("Sign in to Acme").render().into_string();

        assert_eq!(actual, expected);
    }

    #[test]
    fn should_render_base_with_title() {
        let expected = concat!(
            "<!DOCTYPE html>",
            "<html>",
            "<head>",
            r#"<meta charset="utf-8"></meta>"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1"></meta>"#,
            "<title>Sign in to Acme</title>",
            r#"<script src="https://unpkg.com/hyperscript.org@0.9.13"></script>"#,
            r#"<script src="https://unpkg.com/@tailwindcss/browser@4"></script>"#,
            r#"<link rel="stylesheet" href="/static/styles.css"></link>"#,
            r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.6.0/css/all.min.css"></link>"#,
            "</head>",
            r#"<body class="min-h-screen bg-black">"#,
            "<p>Hello</p>",
            "</body>",
            "</html>"
        );

        let actual = base(&Wrappable::new(html! { p { "Hello" } }).with_title("Sign in to Acme"))
            .into_string();

        assert_eq!(actual, expected);
    }

    #[test]
    fn should_default_title() {
        let w = Wrappable::new(EMPTY);

        assert_eq!(w.title(), "Sign in");
    }

    #[test]
    fn should_render_icon() {
        let expected = r#"<i class="fa-regular fa-eye-slash" aria-hidden="true"></i>"#;

        let actual = Icon::EyeSlash.render().into_string();

        assert_eq!(actual, expected);
    }

    #[test]
    fn should_render_masked_password_toggle() {
        let actual = PasswordToggle::new("password", false).render().into_string();

        assert!(actual.contains(r#"aria-controls="password""#));
        assert!(actual.contains(r#"aria-pressed="false""#));
        assert!(actual.contains(
            r#"<span class="password-reveal"><i class="fa-regular fa-eye" aria-hidden="true"></i></span>"#
        ));
        assert!(actual.contains(
            r#"<span class="password-mask hidden"><i class="fa-regular fa-eye-slash" aria-hidden="true"></i></span>"#
        ));
    }

    #[test]
    fn should_render_revealed_password_toggle() {
        let actual = PasswordToggle::new("password", true).render().into_string();

        assert!(actual.contains(r#"aria-pressed="true""#));
        assert!(actual.contains(
            r#"<span class="password-reveal hidden"><i class="fa-regular fa-eye" aria-hidden="true"></i></span>"#
        ));
        assert!(actual.contains(
            r#"<span class="password-mask"><i class="fa-regular fa-eye-slash" aria-hidden="true"></i></span>"#
        ));
    }

    #[tokio::test]
    async fn should_wrap_wrappable_response_in_base() {
        let resp = Wrappable::new(html! { p { "Hello" } })
            .with_title("Sign in to Acme")
            .into_response();

        let resp = wrap_in_base(resp).await.into_response();

        assert_eq!(
            resp.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("<!DOCTYPE html><html><head>"));
        assert!(body.contains("<title>Sign in to Acme</title>"));
        assert!(body.contains("<p>Hello</p>"));
    }

    #[tokio::test]
    async fn should_leave_plain_response_untouched() {
        let resp = "plain".into_response();

        let resp = wrap_in_base(resp).await.into_response();

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"plain");
    }
}
