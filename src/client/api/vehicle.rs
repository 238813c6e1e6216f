use dioxus_logger::tracing;
use fleetdesk_model::vehicle::{AssignVehicleDto, VehicleDto, VehicleFormDto};

use crate::client::{api::ApiClient, error::Error};

/// Service for vehicle records.
///
/// Every call goes to the API; nothing is cached between calls.
pub struct VehicleService<'a> {
    api: &'a ApiClient,
}

impl<'a> VehicleService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// All vehicles of the fleet (`GET /vehicles`)
    pub async fn list(&self) -> Result<Vec<VehicleDto>, Error> {
        Ok(self.api.get("/vehicles").await?)
    }

    /// A single vehicle (`GET /vehicles/{id}`)
    pub async fn get(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        Ok(self.api.get(&format!("/vehicles/{}", vehicle_id)).await?)
    }

    /// Create a vehicle (`POST /vehicles`)
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The vehicle as stored by the API
    /// - `Err(Error::ApiError(ApiError::Validation))` - The API rejected the form
    pub async fn create(&self, form: &VehicleFormDto) -> Result<VehicleDto, Error> {
        let vehicle: VehicleDto = self.api.post("/vehicles", form).await?;

        tracing::info!(vehicle_id = %vehicle.id, "Created vehicle {}", vehicle.vehicle_number);

        Ok(vehicle)
    }

    /// Replace a vehicle's editable fields (`PUT /vehicles/{id}`)
    pub async fn update(&self, vehicle_id: i32, form: &VehicleFormDto) -> Result<(), Error> {
        self.api
            .put(&format!("/vehicles/{}", vehicle_id), form)
            .await?;

        tracing::info!(vehicle_id = %vehicle_id, "Updated vehicle");

        Ok(())
    }

    /// Delete a vehicle (`DELETE /vehicles/{id}`)
    pub async fn delete(&self, vehicle_id: i32) -> Result<(), Error> {
        self.api.delete(&format!("/vehicles/{}", vehicle_id)).await?;

        tracing::info!(vehicle_id = %vehicle_id, "Deleted vehicle");

        Ok(())
    }

    /// Assign a vehicle to a user (`POST /vehicles/{id}/assign`)
    pub async fn assign(&self, vehicle_id: i32, user_id: i32) -> Result<(), Error> {
        self.api
            .post_action(
                &format!("/vehicles/{}/assign", vehicle_id),
                Some(&AssignVehicleDto { user_id }),
            )
            .await?;

        tracing::info!(vehicle_id = %vehicle_id, user_id = %user_id, "Assigned vehicle");

        Ok(())
    }

    /// Release a vehicle from its user (`POST /vehicles/{id}/unassign`)
    pub async fn unassign(&self, vehicle_id: i32) -> Result<(), Error> {
        self.api
            .post_action::<()>(&format!("/vehicles/{}/unassign", vehicle_id), None)
            .await?;

        tracing::info!(vehicle_id = %vehicle_id, "Unassigned vehicle");

        Ok(())
    }

    /// Vehicles assigned to the logged in user (`GET /my/vehicles`)
    pub async fn mine(&self) -> Result<Vec<VehicleDto>, Error> {
        Ok(self.api.get("/my/vehicles").await?)
    }

    /// Vehicles assigned to a given user (`GET /users/{id}/vehicles`)
    pub async fn for_user(&self, user_id: i32) -> Result<Vec<VehicleDto>, Error> {
        Ok(self.api.get(&format!("/users/{}/vehicles", user_id)).await?)
    }
}
