pub mod condition;
pub mod error;
pub mod model;
pub mod plan;
pub mod repo;
