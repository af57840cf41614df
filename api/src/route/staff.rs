use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::staff::{register_staff, show_staff_list};

pub fn build_staff_routers() -> Router<AppRegistry> {
    let staff_routers = Router::new()
        .route("/", post(register_staff))
        .route("/", get(show_staff_list));

    Router::new().nest("/staff", staff_routers)
}
