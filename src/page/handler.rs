pub(super) mod pages {
    use axum::Json;
    use axum::extract::{Path, State};

    use crate::context::RenderContext;
    use crate::markup::Wrappable;
    use crate::page;
    use crate::state::AppState;

    pub async fn render(
        State(state): State<AppState>,
        Json(ctx): Json<RenderContext>,
    ) -> crate::Result<Wrappable> {
        page::render(&ctx, state.sanitizer.as_ref())
    }

    pub async fn preview(
        State(state): State<AppState>,
        Path(page_id): Path<String>,
    ) -> crate::Result<Wrappable> {
        let ctx = RenderContext {
            page_id,
            ..state.preview.as_ref().clone()
        };

        page::render(&ctx, state.sanitizer.as_ref())
    }
}
