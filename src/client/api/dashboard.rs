use fleetdesk_model::user::UserDto;

use crate::client::{
    api::{ApiClient, UserService, VehicleService},
    error::Error,
    view::dashboard::DashboardStats,
};

/// Loads the counters shown on the dashboard.
pub struct DashboardService<'a> {
    api: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch vehicles and, when `include_users` is set, personnel concurrently.
    ///
    /// Both requests must succeed before any counter is computed; the first failure is
    /// returned as is. Users are only requested for administrators, everyone else gets a
    /// personnel count of zero.
    pub async fn stats(&self, include_users: bool) -> Result<DashboardStats, Error> {
        let vehicle_service = VehicleService::new(self.api);
        let user_service = UserService::new(self.api);

        let users = async {
            if include_users {
                user_service.list().await
            } else {
                Ok(Vec::<UserDto>::new())
            }
        };

        let (vehicles, users) = futures::try_join!(vehicle_service.list(), users)?;

        Ok(DashboardStats::from_records(&vehicles, &users))
    }
}
