pub mod guest;
pub mod health;
pub mod reservation;
pub mod room;
pub mod staff;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(guest::build_guest_routers())
        .merge(room::build_room_routers())
        .merge(staff::build_staff_routers())
        .merge(reservation::build_reservation_routers())
}
