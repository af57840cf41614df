use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::room::{register_room, show_room_list};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", post(register_room))
        .route("/", get(show_room_list));

    Router::new().nest("/rooms", room_routers)
}
