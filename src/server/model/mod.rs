//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping SeaORM types out of the
//! service layer and serde types out of the data layer.

pub mod group;
pub mod student;
