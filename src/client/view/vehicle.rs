use fleetdesk_model::vehicle::{AssignStatus, ChargingStatus, VehicleDto};

use crate::client::view::Severity;

pub const UNKNOWN_LABEL: &str = "Unknown";
pub const NOT_ASSIGNED_LABEL: &str = "Not Assigned";

const ASSIGNED_LABEL: &str = "Assigned";
const FULLY_CHARGED_LABEL: &str = "Fully Charged";
const CHARGING_LABEL: &str = "Charging";
const FAULTY_LABEL: &str = "Faulty";

fn assign_status_label(status: AssignStatus) -> &'static str {
    match status {
        AssignStatus::Available => "Available",
        AssignStatus::Assigned => ASSIGNED_LABEL,
        AssignStatus::Maintenance => "Maintenance",
    }
}

/// Whether the vehicle is allocated to someone.
///
/// A present assignee wins over the stored status code, so a vehicle reported as
/// `Available` with an assignee still counts as assigned.
pub fn is_assigned(vehicle: &VehicleDto) -> bool {
    vehicle.assigned_to_user_id.is_some()
        || AssignStatus::from_code(vehicle.assign_status) == Some(AssignStatus::Assigned)
}

/// Assignment label shown for a vehicle.
///
/// "Assigned" whenever an assignee is present, otherwise the label of the stored code,
/// "Unknown" for codes outside the table.
pub fn assignment_label(vehicle: &VehicleDto) -> &'static str {
    if vehicle.assigned_to_user_id.is_some() {
        return ASSIGNED_LABEL;
    }

    AssignStatus::from_code(vehicle.assign_status)
        .map(assign_status_label)
        .unwrap_or(UNKNOWN_LABEL)
}

pub fn assignment_severity(vehicle: &VehicleDto) -> Severity {
    if is_assigned(vehicle) {
        return Severity::Primary;
    }

    match AssignStatus::from_code(vehicle.assign_status) {
        Some(AssignStatus::Available) => Severity::Success,
        Some(AssignStatus::Maintenance) => Severity::Warning,
        Some(AssignStatus::Assigned) => Severity::Primary,
        None => Severity::Default,
    }
}

pub fn charging_label(code: i32) -> &'static str {
    match ChargingStatus::from_code(code) {
        Some(ChargingStatus::Charging) => CHARGING_LABEL,
        Some(ChargingStatus::FullyCharged) => FULLY_CHARGED_LABEL,
        Some(ChargingStatus::NotCharging) => "Not Charging",
        Some(ChargingStatus::Faulty) => FAULTY_LABEL,
        None => UNKNOWN_LABEL,
    }
}

/// Severity of a charging label as produced by [`charging_label`].
pub fn charging_severity(label: &str) -> Severity {
    match label {
        FULLY_CHARGED_LABEL => Severity::Success,
        CHARGING_LABEL => Severity::Warning,
        FAULTY_LABEL => Severity::Error,
        _ => Severity::Default,
    }
}

/// Battery level band used to colour the charge percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChargeLevel {
    /// Above 50%
    High,
    /// Above 20%, up to 50%
    Medium,
    /// 20% or less
    Low,
}

impl ChargeLevel {
    pub fn severity(self) -> Severity {
        match self {
            Self::High => Severity::Success,
            Self::Medium => Severity::Warning,
            Self::Low => Severity::Error,
        }
    }
}

pub fn charge_level(percentage: f64) -> ChargeLevel {
    if percentage > 50.0 {
        ChargeLevel::High
    } else if percentage > 20.0 {
        ChargeLevel::Medium
    } else {
        ChargeLevel::Low
    }
}

/// Name of the user the vehicle is assigned to, "Not Assigned" when there is none.
pub fn assignee_name(vehicle: &VehicleDto) -> &str {
    vehicle
        .assigned_to_user_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(NOT_ASSIGNED_LABEL)
}
