pub mod list;
pub mod order_dialog;
