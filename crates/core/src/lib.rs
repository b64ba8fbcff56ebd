//! Deck and mission logic for the card scavenger hunt. Keep this crate
//! free of IO and platform concerns.

pub mod cards;
pub mod catalog;
pub mod deck;
pub mod game;
pub mod rng;
pub mod rules;
pub mod task;

pub use cards::*;
pub use catalog::*;
pub use deck::*;
pub use game::*;
pub use rng::*;
pub use rules::*;
pub use task::*;
