pub(super) mod pages {
    use axum::Form;
    use log::info;
    use serde::Deserialize;

    use crate::demo::{Password, markup};
    use crate::markup::Wrappable;
    use crate::ui::UiState;

    pub async fn form() -> Wrappable {
        Wrappable::new(markup::StandaloneLoginForm::default()).with_title(markup::TITLE)
    }

    #[derive(Deserialize)]
    pub struct Params {
        username: String,
        password: Password,
        remember: Option<String>,
    }

    /// Stand-in for a real sign-in: records what was entered and shows the
    /// card again.
    pub async fn submit(Form(params): Form<Params>) -> Wrappable {
        let remember = params.remember.is_some();
        info!(
            "Demo login submitted: username={}, password={:?}, remember={remember}",
            params.username, params.password
        );

        let ui = UiState::default().with_remember(remember);
        Wrappable::new(markup::StandaloneLoginForm::new(params.username, ui))
            .with_title(markup::TITLE)
    }
}
