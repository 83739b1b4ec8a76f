//! Domain rules shared by the Sitebook database and API layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the id
//! and timestamp aliases, input validators, and the dashboard arithmetic.

pub mod dashboard;
pub mod error;
pub mod types;
pub mod validation;
