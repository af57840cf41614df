use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::guest::{register_guest, show_guest, show_guest_list};

pub fn build_guest_routers() -> Router<AppRegistry> {
    let guest_routers = Router::new()
        .route("/", post(register_guest))
        .route("/", get(show_guest_list))
        .route("/:guest_id", get(show_guest));

    Router::new().nest("/guests", guest_routers)
}
