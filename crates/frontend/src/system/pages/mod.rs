pub mod carrier;
pub mod factory;
pub mod login;
pub mod sale_point;
