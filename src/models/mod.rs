//! Domain models

pub mod book;
