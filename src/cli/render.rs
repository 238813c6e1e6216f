use fleetdesk::{
    client::view::{
        assignee_name, assignment_label, assignment_severity, charge_level, charging_label,
        charging_severity, user::role_severity, DashboardStats, Severity,
    },
    model::{auth::Identity, user::UserDto, vehicle::VehicleDto},
};

/// Label followed by its badge class, e.g. `Available [success]`
fn badge(label: &str, severity: Severity) -> String {
    format!("{} [{}]", label, severity)
}

fn charge(vehicle: &VehicleDto) -> String {
    let level = charge_level(vehicle.current_charge_percentage);

    format!(
        "{:.0}% [{}]",
        vehicle.current_charge_percentage,
        level.severity()
    )
}

pub fn identity(identity: &Identity) {
    println!("{} <{}>", identity.display_name(), identity.email);
    println!("User ID: {}", identity.user_id);
    println!("Role:    {}", badge(&identity.role, role_severity(&identity.role)));
}

pub fn dashboard(stats: &DashboardStats, is_admin: bool) {
    println!("Total Vehicles:      {}", stats.total_vehicles);
    println!("Assigned Vehicles:   {}", stats.assigned_vehicles);
    println!("Available Vehicles:  {}", stats.available_vehicles);
    if is_admin {
        println!("Total Personnel:     {}", stats.total_users);
    }
}

pub fn vehicles(vehicles: &[VehicleDto]) {
    if vehicles.is_empty() {
        println!("No vehicles found");
        return;
    }

    println!(
        "{:<6} {:<12} {:<24} {:<16} {:<26} {:<24} {}",
        "ID", "NUMBER", "VEHICLE", "CHARGE", "CHARGING", "STATUS", "ASSIGNED TO"
    );
    for vehicle in vehicles {
        let charging = charging_label(vehicle.charging_status);

        println!(
            "{:<6} {:<12} {:<24} {:<16} {:<26} {:<24} {}",
            vehicle.id,
            vehicle.vehicle_number,
            format!("{} {}", vehicle.brand, vehicle.model),
            charge(vehicle),
            badge(charging, charging_severity(charging)),
            badge(assignment_label(vehicle), assignment_severity(vehicle)),
            assignee_name(vehicle),
        );
    }
}

pub fn vehicle(vehicle: &VehicleDto) {
    let charging = charging_label(vehicle.charging_status);

    println!("Vehicle #{}", vehicle.id);
    println!("Number:      {}", vehicle.vehicle_number);
    println!("Brand:       {}", vehicle.brand);
    println!("Model:       {}", vehicle.model);
    println!("Charge:      {}", charge(vehicle));
    println!("Max payload: {} kg", vehicle.max_payload_kg);
    println!("Charging:    {}", badge(charging, charging_severity(charging)));
    println!(
        "Status:      {}",
        badge(assignment_label(vehicle), assignment_severity(vehicle))
    );
    println!("Assigned to: {}", assignee_name(vehicle));
}

pub fn users(users: &[UserDto]) {
    if users.is_empty() {
        println!("No users found");
        return;
    }

    println!(
        "{:<6} {:<28} {:<32} {:<16} {}",
        "ID", "NAME", "EMAIL", "PHONE", "ROLE"
    );
    for user in users {
        println!(
            "{:<6} {:<28} {:<32} {:<16} {}",
            user.user_id,
            user.full_name(),
            user.email,
            user.phone_number,
            badge(&user.role, role_severity(&user.role)),
        );
    }
}

pub fn user(user: &UserDto) {
    println!("{} <{}>", user.full_name(), user.email);
    println!("User ID: {}", user.user_id);
    println!("Phone:   {}", user.phone_number);
    println!("Address: {}", user.address);
    println!("Role:    {}", badge(&user.role, role_severity(&user.role)));
}
