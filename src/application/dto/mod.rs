//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling serde into the domain entities.

pub mod campaign;
pub mod generate;
pub mod options;
pub mod scenario;

pub use campaign::*;
pub use generate::*;
pub use options::*;
pub use scenario::*;
