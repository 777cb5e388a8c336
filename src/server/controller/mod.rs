//! HTTP request handlers.
//!
//! Controllers resolve the caller's identity through `AuthGuard`, convert DTOs to
//! params, call the service layer and convert the result back to DTOs.

pub mod comment;
pub mod discord;
pub mod health;
