//! Error types for the Pup SDK
//!
//! Every failure that can come out of a backend call is normalized into one
//! of the `PupError` classes below, at a single boundary in the client. The
//! gateway layer matches on nothing finer than "some `PupError` happened",
//! which is what makes its degrade-to-demo policy a single decision table.

mod conversions;
mod types;

pub use types::{PupError, PupResult};
