pub mod import_button;
pub mod modal;
pub mod select;
pub mod stat_card;
