//! Computer-controlled players.
//!
//! Policies are trait-based so the front-end can seat any mix of humans and
//! bots. Only a trivial random bidder ships.

pub mod policy;

pub use policy::{Policy, RandomBidder, TableView};
