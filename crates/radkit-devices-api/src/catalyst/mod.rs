// Catalyst Center (formerly DNA Center) surface: token auth + network device inventory.

pub mod client;
pub mod models;

pub use client::{CatalystClient, DEFAULT_CATALYST_URL};
pub use models::{CatalystDevice, CatalystResponse};
