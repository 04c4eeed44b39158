//! Persistence adapter for wishlists and items.
//!
//! Every function takes any [`sea_orm::ConnectionTrait`], so callers decide
//! whether it runs on the pool or inside a transaction.

pub mod items;
pub mod wishlists;
