mod extract;
mod videos;

use axum::Router;

use crate::AppState;

pub use extract::ValidatedJson;

pub fn routes() -> Router<AppState> {
    Router::new().merge(videos::routes())
}
