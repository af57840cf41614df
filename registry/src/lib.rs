use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    guest::GuestRepositoryImpl, health::HealthCheckRepositoryImpl,
    reservation::ReservationRepositoryImpl, room::RoomRepositoryImpl, staff::StaffRepositoryImpl,
};
use kernel::repository::{
    guest::GuestRepository, health::HealthCheckRepository, reservation::ReservationRepository,
    room::RoomRepository, staff::StaffRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    guest_repository: Arc<dyn GuestRepository>,
    room_repository: Arc<dyn RoomRepository>,
    staff_repository: Arc<dyn StaffRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let guest_repository = Arc::new(GuestRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let staff_repository = Arc::new(StaffRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            guest_repository,
            room_repository,
            staff_repository,
            reservation_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn guest_repository(&self) -> Arc<dyn GuestRepository> {
        self.guest_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn staff_repository(&self) -> Arc<dyn StaffRepository> {
        self.staff_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }
}
