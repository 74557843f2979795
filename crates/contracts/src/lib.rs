pub mod api;
pub mod domain;
pub mod ordering;
pub mod system;
