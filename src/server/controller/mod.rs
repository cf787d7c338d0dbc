//! HTTP request handlers.
//!
//! Controllers extract path parameters and JSON bodies, convert DTOs into service
//! parameters, call the service layer and convert the resulting domain models back
//! into DTOs. Every handler carries a `utoipa::path` annotation consumed by the router
//! to build the OpenAPI document.

pub mod group;
pub mod index;
pub mod student;

#[cfg(test)]
mod test;
