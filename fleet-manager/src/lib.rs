pub mod types;

pub use types::fleet_error::FleetError;
pub use types::fleet_manager::FleetManager;
