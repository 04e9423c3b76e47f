pub mod child;
pub mod classroom;
pub mod common;
pub mod identity;
pub mod teacher;
