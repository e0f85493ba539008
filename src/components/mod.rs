pub mod message_card;
pub mod ui;

pub use message_card::MessageCard;
