pub mod projection;
pub mod store;
pub mod tour_ops;

pub use store::Store;
