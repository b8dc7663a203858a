//! Repos: domain models over the SeaORM adapters, generic over
//! `ConnectionTrait` so they run equally inside or outside a transaction.

pub mod leagues;
pub mod memberships;
pub mod players;
pub mod scores;
pub mod sessions;
