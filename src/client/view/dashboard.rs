use fleetdesk_model::{
    user::UserDto,
    vehicle::{AssignStatus, VehicleDto},
};

use crate::client::view::vehicle::is_assigned;

/// Fleet counters shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_vehicles: usize,
    pub assigned_vehicles: usize,
    pub available_vehicles: usize,
    pub total_users: usize,
}

impl DashboardStats {
    /// Count assigned and available vehicles with the same precedence as the vehicle labels.
    ///
    /// A vehicle in maintenance or with an unknown code is neither assigned nor available.
    pub fn from_records(vehicles: &[VehicleDto], users: &[UserDto]) -> Self {
        let assigned_vehicles = vehicles.iter().filter(|v| is_assigned(v)).count();
        let available_vehicles = vehicles
            .iter()
            .filter(|v| {
                !is_assigned(v)
                    && AssignStatus::from_code(v.assign_status) == Some(AssignStatus::Available)
            })
            .count();

        Self {
            total_vehicles: vehicles.len(),
            assigned_vehicles,
            available_vehicles,
            total_users: users.len(),
        }
    }
}
