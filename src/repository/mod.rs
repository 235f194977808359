//! Repository layer for catalog storage

pub mod books;

pub use books::BooksRepository;
