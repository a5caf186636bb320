// radkit-devices-api: async clients for the services the RADkit devices tool talks to.
//
// - Meraki Dashboard (cloud inventory + switch ports)
// - Catalyst Center (on-prem inventory)
// - RADkit Service control API (bulk device creation)

pub mod catalyst;
pub mod control;
pub mod error;
pub mod meraki;
pub mod transport;

pub use catalyst::{CatalystClient, CatalystDevice};
pub use control::ControlApiClient;
pub use error::Error;
pub use meraki::{MerakiClient, MerakiDevice, MerakiSwitchPort, MerakiSwitchPorts};
pub use transport::{TlsMode, TransportConfig};
