pub mod modal;
pub mod quantity_selector;
pub mod ui;
