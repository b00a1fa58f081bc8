pub mod limits;
pub mod record;
pub mod resolver;
