/// Maximum number of flights kept in memory and on disk.
pub const MAX_FLIGHTS: usize = 100;

/// Number of months tracked by the profit ledger.
pub const MONTHS: usize = 12;

pub mod fleet_error;

pub mod flight;

pub mod flight_table;

pub mod plane_type;

pub mod plane;

pub mod hangar;

pub mod ledger;

pub mod storage;

pub mod config;

pub mod fleet_manager;

pub mod sample_data;
