pub mod member;
pub mod team;
