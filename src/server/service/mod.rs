//! Business logic layer.
//!
//! Services implement the group and student store operations on top of the
//! repositories: existence checks, field validation in a fixed order, and the
//! transaction around the group-delete cascade. They return domain models and
//! `AppError`, leaving DTO conversion to the controllers.

pub mod group;
pub mod student;
