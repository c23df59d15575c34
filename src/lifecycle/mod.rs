//! Runtime orchestration: starting the relation actors, wiring their clients and
//! bringing everything down again, plus logging setup.

pub mod site_system;
pub mod telemetry;

pub use site_system::*;
pub use telemetry::*;
