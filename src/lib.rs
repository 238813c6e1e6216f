pub mod client;

pub use fleetdesk_model as model;
