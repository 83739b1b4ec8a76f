//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts

pub mod activity;
pub mod company;
pub mod dashboard;
pub mod document;
pub mod meeting;
pub mod member;
pub mod payment;
pub mod project;
pub mod status;
pub mod user;
