pub mod alternatives;
pub mod field;
pub mod score_card;
pub mod status_badge;
pub mod toast;
