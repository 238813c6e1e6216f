//! Wire types exchanged with the fleet management API.
//!
//! Shared by the `fleetdesk` client and `fleetdesk-test-utils` so mock endpoints and the
//! client agree on the JSON shapes without a dependency cycle between the two.

pub mod api;
pub mod auth;
pub mod user;
pub mod vehicle;

pub mod prelude {
    pub use crate::{
        api::ErrorDto,
        auth::{Identity, LoginRequest, LoginResponse},
        user::{NewUserDto, UserDto, UserUpdateDto, ADMIN_ROLE, USER_ROLE},
        vehicle::{AssignStatus, AssignVehicleDto, ChargingStatus, VehicleDto, VehicleFormDto},
    };
}
