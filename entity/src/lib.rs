//! SeaORM entities for the roster database.
//!
//! Mirrors the schema created by the `migration` crate. Students reference groups
//! through a nullable `group_id`; groups hold no back-reference.

pub mod prelude;

pub mod group;
pub mod student;
