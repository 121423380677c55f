pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, LoadOutcome};

pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn search_books(&self, keyword: &str, genre: Option<&str>) -> LibraryResult<Vec<BookDto>>;
    fn checkout_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn load_books(&mut self) -> LibraryResult<LoadOutcome>;
    fn save_books(&self) -> LibraryResult<usize>;
    fn books(&self) -> Vec<BookDto>;
    fn location(&self) -> String;
}
