//! Books repository: the in-memory catalog store.
//!
//! The catalog is an ordered `Vec<Book>` behind a shared read/write lock,
//! cloned into every request handler through the application state. Reads
//! clone a snapshot out of the lock; writes hold it for the append only.
//! Insertion order is stable and duplicate identifiers are not rejected.

use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{error::AppResult, models::book::Book};

#[derive(Clone)]
pub struct BooksRepository {
    data: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    /// Create an empty catalog store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a catalog store preloaded with the fixed sample records
    pub fn with_seed_data() -> Self {
        Self {
            data: Arc::new(RwLock::new(seed_books())),
        }
    }

    /// Append a book to the catalog and return the stored record.
    ///
    /// No uniqueness check is performed on the identifier; a duplicate id is
    /// appended as-is and later lookups return the earlier entry. The error
    /// channel exists because the HTTP contract reserves a rejection status,
    /// but the append itself cannot currently fail.
    pub async fn add(&self, book: Book) -> AppResult<Book> {
        let mut data = self.data.write().await;
        data.push(book.clone());
        Ok(book)
    }

    /// Return a snapshot of the full catalog in insertion order
    pub async fn find_all(&self) -> Vec<Book> {
        self.data.read().await.clone()
    }

    /// Find the first book whose identifier matches, in insertion order.
    ///
    /// A miss is a valid empty result, not an error.
    pub async fn find_by_id(&self, id: i64) -> Option<Book> {
        self.data.read().await.iter().find(|b| b.id == id).cloned()
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed sample catalog loaded at startup
fn seed_books() -> Vec<Book> {
    let price = Decimal::from(10);
    vec![
        Book {
            id: 1,
            title: "Learning DevOps".to_string(),
            author: "Mikael Krief".to_string(),
            description: "Some description Lorem ipsum Lorem ipsum".to_string(),
            price,
            image_url: "https://static.packt-cdn.com/products/9781838642730/cover/smaller"
                .to_string(),
        },
        Book {
            id: 2,
            title: "Docker in action, 2nd Edition".to_string(),
            author: "Jeff Nickoloff and Stephen Kuenzli".to_string(),
            description: "Some description Lorem ipsum Lorem ipsum".to_string(),
            price,
            image_url: "https://drek4537l1klr.cloudfront.net/nickoloff2/Figures/cover.jpg"
                .to_string(),
        },
        Book {
            id: 3,
            title: "Kubernetes: Up and Running, 2nd Edition".to_string(),
            author: "Brendan Burns, Joe Beda, Kelsey Hightower".to_string(),
            description: "Some description Lorem ipsum Lorem ipsum".to_string(),
            price,
            image_url: "https://covers.oreilly.com/images/0636920223788/cat.gif".to_string(),
        },
        Book {
            id: 4,
            title: "Continuous Delivery with Docker and Jenkins".to_string(),
            author: "Rafal Leszko".to_string(),
            description: "Some description Lorem ipsum Lorem ipsum".to_string(),
            price,
            image_url:
                "https://images-na.ssl-images-amazon.com/images/I/41lPh+vZh2L._SX404_BO1,204,203,200_.jpg"
                    .to_string(),
        },
    ]
}
