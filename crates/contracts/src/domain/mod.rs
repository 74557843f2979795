pub mod availability;
pub mod category;
pub mod factory;
pub mod order;
pub mod product;
pub mod sale_point;
pub mod warehouse;
