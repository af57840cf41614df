use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    register_reservation, show_guest_reservations, show_reservation_list,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/guest/:guest_id", get(show_guest_reservations));

    Router::new().nest("/reservations", reservation_routers)
}
