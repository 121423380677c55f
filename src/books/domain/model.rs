use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity abstracts one catalog entry; the catalog may hold several entries
// with the same title or isbn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub publication_date: NaiveDate,
    pub genre: String,
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, publication_date: NaiveDate, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_date,
            genre: genre.to_string(),
            book_status: BookStatus::Available,
        }
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn genre(&self) -> &str {
        self.genre.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}
