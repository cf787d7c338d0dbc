//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod group;
pub mod patch;
pub mod student;
