//! Shared MTG types used across the D2D tools.
//!
//! Holds the pieces every tool needs to agree on: how a card is identified
//! across differently shaped exports, and the condition labels marketplaces use.

pub mod card_key;
pub mod condition;
pub mod error;

pub use card_key::CardKey;
pub use condition::{condition_for_foil_flag, is_foil_flag, NEAR_MINT, NEAR_MINT_FOIL};
pub use error::KeyError;
