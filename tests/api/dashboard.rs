use fleetdesk::{
    client::{
        api::DashboardService,
        error::{api::ApiError, Error},
        view::DashboardStats,
    },
    model::{
        api::ErrorDto,
        vehicle::{AssignStatus, VehicleDto},
    },
};
use fleetdesk_test_utils::prelude::*;

use crate::TestSetupExt;

fn fleet() -> Vec<VehicleDto> {
    let mut maintenance = factory::vehicle(4);
    maintenance.assign_status = AssignStatus::Maintenance.code();

    vec![
        factory::vehicle(1),
        factory::assigned_vehicle(2, 7),
        factory::assigned_vehicle(3, 8),
        maintenance,
    ]
}

#[tokio::test]
/// Expect administrators to see vehicle and personnel counts
async fn admin_stats_include_personnel() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_vehicles_endpoint(fleet(), 1)
        .with_users_endpoint(vec![factory::user(7, "user"), factory::user(8, "user")], 1)
        .build()
        .await?;
    let console = test.console_as("admin");

    let stats = DashboardService::new(&console.api).stats(true).await.unwrap();

    assert_eq!(
        stats,
        DashboardStats {
            total_vehicles: 4,
            assigned_vehicles: 2,
            available_vehicles: 1,
            total_users: 2,
        }
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect personnel not to be requested for regular users
async fn member_stats_skip_personnel() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_vehicles_endpoint(fleet(), 1)
        .with_users_endpoint(vec![factory::user(7, "user")], 0)
        .build()
        .await?;
    let console = test.console_as("user");

    let stats = DashboardService::new(&console.api).stats(false).await.unwrap();

    assert_eq!(stats.total_vehicles, 4);
    assert_eq!(stats.total_users, 0);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect no counters when one of the requests fails
async fn fails_when_personnel_request_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_vehicles_endpoint(fleet(), 1)
        .build()
        .await?;
    let error = ErrorDto {
        message: Some("Personnel service unavailable".to_string()),
        ..Default::default()
    };
    let users = test.api().create_error_endpoint("GET", "/users", 503, &error, 1)?;
    let console = test.console_as("admin");

    let result = DashboardService::new(&console.api).stats(true).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::Status { .. }))
    ));
    users.assert();

    Ok(())
}
