//! Request guards and cross-cutting HTTP layers.

pub mod auth;
pub mod cors;
