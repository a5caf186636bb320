// RADkit Service control API surface: admin session + bulk device creation.

pub mod client;

pub use client::{ControlApiClient, DEFAULT_CONTROL_API_URL};
