use serde::{Deserialize, Serialize};

/// Whether a vehicle is allocated to a user, as stored by the API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignStatus {
    Available,
    Assigned,
    Maintenance,
}

impl AssignStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Available),
            1 => Some(Self::Assigned),
            2 => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Available => 0,
            Self::Assigned => 1,
            Self::Maintenance => 2,
        }
    }
}

/// Power charging state of a vehicle, as stored by the API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChargingStatus {
    Charging,
    FullyCharged,
    NotCharging,
    Faulty,
}

impl ChargingStatus {
    pub const ALL: [ChargingStatus; 4] = [
        Self::Charging,
        Self::FullyCharged,
        Self::NotCharging,
        Self::Faulty,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Charging),
            1 => Some(Self::FullyCharged),
            2 => Some(Self::NotCharging),
            3 => Some(Self::Faulty),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Charging => 0,
            Self::FullyCharged => 1,
            Self::NotCharging => 2,
            Self::Faulty => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i32,
    pub vehicle_number: String,
    pub brand: String,
    pub model: String,
    pub current_charge_percentage: f64,
    pub max_payload_kg: f64,
    pub charging_status: i32,
    pub assign_status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_user_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_user_name: Option<String>,
}

/// Payload of `POST /vehicles` and `PUT /vehicles/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFormDto {
    pub vehicle_number: String,
    pub brand: String,
    pub model: String,
    pub current_charge_percentage: f64,
    pub max_payload_kg: f64,
    pub charging_status: i32,
}

impl Default for VehicleFormDto {
    fn default() -> Self {
        Self {
            vehicle_number: String::new(),
            brand: String::new(),
            model: String::new(),
            current_charge_percentage: 0.0,
            max_payload_kg: 0.0,
            charging_status: ChargingStatus::NotCharging.code(),
        }
    }
}

impl From<&VehicleDto> for VehicleFormDto {
    fn from(vehicle: &VehicleDto) -> Self {
        Self {
            vehicle_number: vehicle.vehicle_number.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            current_charge_percentage: vehicle.current_charge_percentage,
            max_payload_kg: vehicle.max_payload_kg,
            charging_status: vehicle.charging_status,
        }
    }
}

/// Payload of `POST /vehicles/{id}/assign`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignVehicleDto {
    pub user_id: i32,
}
