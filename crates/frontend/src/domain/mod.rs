pub mod a001_category;
pub mod a002_product;
pub mod a003_factory;
pub mod a004_sale_point;
pub mod a005_warehouse;
pub mod a006_order;
pub mod a007_availability;
