use axum::Router;
use axum::routing::{get, post};
use log::debug;
use maud::Render;

use crate::context::RenderContext;
use crate::error::Error;
use crate::login::{self, LoginPage};
use crate::markup::Wrappable;
use crate::sanitize::Sanitizer;
use crate::state::AppState;

mod handler;

pub fn pages<S>(s: AppState) -> Router<S> {
    Router::new()
        .route("/render", post(handler::pages::render))
        .route("/preview/{page_id}", get(handler::pages::preview))
        .with_state(s)
}

/// Picks the page component for the context's page id.
pub fn render(ctx: &RenderContext, sanitizer: &dyn Sanitizer) -> crate::Result<Wrappable> {
    debug!("Rendering page {}", ctx.page_id);

    match ctx.page_id.as_str() {
        login::PAGE_ID => {
            let page = LoginPage::new(ctx, sanitizer);
            Ok(Wrappable::new(page.render()).with_title(page.title()))
        }
        other => Err(Error::UnsupportedPage(other.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sanitize::AllowList;

    #[test]
    fn should_render_login_page() {
        let mut ctx = RenderContext::default();
        ctx.page_id = "login.ftl".to_string();
        ctx.realm.display_name = "Acme".to_string();

        let page = render(&ctx, &AllowList::default()).unwrap();

        assert_eq!(page.title(), "Sign in to Acme");
    }

    #[test]
    fn should_reject_unknown_page() {
        let mut ctx = RenderContext::default();
        ctx.page_id = "register.ftl".to_string();

        let result = render(&ctx, &AllowList::default());

        assert!(matches!(result, Err(Error::UnsupportedPage(id)) if id == "register.ftl"));
    }
}
