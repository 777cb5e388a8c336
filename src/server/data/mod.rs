//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! parameter models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! connection pool or inside a `DatabaseTransaction`.

pub mod comment;
pub mod community;
pub mod discord;
pub mod post;
pub mod post_tag;
pub mod user;
pub mod watched_post;

#[cfg(test)]
mod test;
