pub mod entity;
pub mod fields;
pub mod sea_orm_repo;
