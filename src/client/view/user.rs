use fleetdesk_model::user::ADMIN_ROLE;

use crate::client::view::Severity;

pub fn role_severity(role: &str) -> Severity {
    if role == ADMIN_ROLE {
        Severity::Primary
    } else {
        Severity::Default
    }
}
