//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) and bot layers and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Question status rules, permissions and mirroring decisions
//! - **Orchestration**: Coordinating repositories with Discord and object storage
//! - **Domain Models**: Working with param models rather than DTOs or entity models
//! - **Transaction Management**: Grouping writes that must land together

pub mod comment;
pub mod discord;
pub mod notification;
