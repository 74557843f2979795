mod header;

pub use header::AccountHeader;
