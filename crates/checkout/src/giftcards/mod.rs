//! Gift cards: model, validity rules and activation-code generation.

pub mod card;
pub mod code;

pub use card::{GiftCard, active_gift_cards};
pub use code::generate_gift_card_code;
