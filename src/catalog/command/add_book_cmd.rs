use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::utils::date::parse_date;

#[derive(Debug, Default)]
pub struct AddBookCommand {}

impl AddBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_date: String,
    pub genre: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, publication_date: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_date: publication_date.to_string(),
            genre: genre.to_string(),
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookDto> {
        let publication_date = parse_date(self.publication_date.as_str())?;
        Ok(BookDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(),
                        publication_date, self.genre.as_str()))
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, catalog: &mut dyn CatalogService, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        catalog.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
