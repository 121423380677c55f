use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::BookStatus;
use crate::utils::date::{format_date, serializer};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub publication_date: NaiveDate,
    pub genre: String,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, publication_date: NaiveDate, genre: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_date,
            genre: genre.to_string(),
            book_status: BookStatus::Available,
        }
    }
}

impl Book for BookDto {
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

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {}, Published: {}, Genre: {})",
               self.title, self.author, self.isbn, format_date(&self.publication_date), self.genre)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::dto::BookDto;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let date = NaiveDate::from_ymd_opt(1965, 8, 1).expect("valid date");
        let book = BookDto::new("Dune", "Frank Herbert", "9780441013593", date, "Sci-Fi");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!(BookStatus::Available, book.book_status);
    }

    #[test]
    fn test_should_display_book() {
        let date = NaiveDate::from_ymd_opt(1965, 8, 1).expect("valid date");
        let book = BookDto::new("Dune", "Frank Herbert", "9780441013593", date, "Sci-Fi");
        assert_eq!("Dune by Frank Herbert (ISBN: 9780441013593, Published: 1965-08-01, Genre: Sci-Fi)",
                   book.to_string());
    }

    #[test]
    fn test_should_serialize_date_as_text() {
        let date = NaiveDate::from_ymd_opt(1965, 8, 1).expect("valid date");
        let book = BookDto::new("Dune", "Frank Herbert", "9780441013593", date, "Sci-Fi");
        let json = serde_json::to_string(&book).expect("should serialize");
        assert!(json.contains("\"publication_date\":\"1965-08-01\""));
        let parsed: BookDto = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(book, parsed);
    }
}
