//! Factories for API records with sensible defaults.

use fleetdesk_model::{
    auth::LoginResponse,
    user::{NewUserDto, UserDto},
    vehicle::{AssignStatus, ChargingStatus, VehicleDto, VehicleFormDto},
};

use crate::constant::{TEST_EMAIL, TEST_TOKEN, TEST_USER_ID};

/// Login response for the test user with the given role tag
pub fn login_response(role: &str) -> LoginResponse {
    LoginResponse {
        token: TEST_TOKEN.to_string(),
        user_id: TEST_USER_ID,
        role: role.to_string(),
        email: TEST_EMAIL.to_string(),
        first_name: "Dana".to_string(),
        last_name: "Okafor".to_string(),
    }
}

pub fn user(user_id: i32, role: &str) -> UserDto {
    UserDto {
        user_id,
        first_name: format!("Driver{}", user_id),
        last_name: "Test".to_string(),
        phone_number: format!("+1555000{:04}", user_id),
        address: format!("{} Depot Road", user_id),
        email: format!("driver{}@fleet.test", user_id),
        role: role.to_string(),
    }
}

pub fn new_user(role: &str) -> NewUserDto {
    NewUserDto {
        first_name: "Robin".to_string(),
        last_name: "Mensah".to_string(),
        email: "robin@fleet.test".to_string(),
        phone_number: "+15550001234".to_string(),
        address: "7 Depot Road".to_string(),
        password: "Welcome1!".to_string(),
        role: role.to_string(),
    }
}

/// Available, not charging vehicle with no assignee
pub fn vehicle(vehicle_id: i32) -> VehicleDto {
    VehicleDto {
        id: vehicle_id,
        vehicle_number: format!("EV-{:03}", vehicle_id),
        brand: "Volta".to_string(),
        model: "Cargo 4".to_string(),
        current_charge_percentage: 72.5,
        max_payload_kg: 1200.0,
        charging_status: ChargingStatus::NotCharging.code(),
        assign_status: AssignStatus::Available.code(),
        assigned_to_user_id: None,
        assigned_to_user_name: None,
    }
}

/// Vehicle assigned to `user_id`
pub fn assigned_vehicle(vehicle_id: i32, user_id: i32) -> VehicleDto {
    VehicleDto {
        assign_status: AssignStatus::Assigned.code(),
        assigned_to_user_id: Some(user_id),
        assigned_to_user_name: Some(format!("Driver{} Test", user_id)),
        ..vehicle(vehicle_id)
    }
}

pub fn vehicle_form() -> VehicleFormDto {
    VehicleFormDto {
        vehicle_number: "EV-100".to_string(),
        brand: "Volta".to_string(),
        model: "Cargo 4".to_string(),
        current_charge_percentage: 90.0,
        max_payload_kg: 1200.0,
        charging_status: ChargingStatus::Charging.code(),
    }
}
