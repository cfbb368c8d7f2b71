//! Named registry of rovers.
//!
//! [`Fleet`] creates rovers, looks them up by name, and runs command
//! strings on them with one lock per rover. It knows nothing about
//! transports; front ends hold a `Fleet` and call into it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fleet;

pub use error::FleetError;
pub use fleet::{CommandReport, Fleet, RoverHandle};
