pub mod order;
pub mod signature;
