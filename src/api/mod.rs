//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
