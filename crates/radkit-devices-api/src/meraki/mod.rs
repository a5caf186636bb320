// Meraki Dashboard surface: organizations, networks, devices, switch ports.

pub mod client;
pub mod models;

pub use client::{DEFAULT_MERAKI_URL, MerakiClient};
pub use models::{MerakiDevice, MerakiSwitchPort, MerakiSwitchPorts, Network, NetworkRef, Organization};
