use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

#[derive(Debug, Default)]
pub struct SearchBookCommand {}

impl SearchBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBookCommandRequest {
    pub keyword: String,
    pub genre: Option<String>,
}

impl SearchBookCommandRequest {
    // an empty genre means no filter
    pub fn new(keyword: &str, genre: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            genre: if genre.is_empty() { None } else { Some(genre.to_string()) },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBookCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBookCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand {
    fn execute(&self, catalog: &mut dyn CatalogService, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        catalog.search_books(req.keyword.as_str(), req.genre.as_deref())
            .map_err(CommandError::from).map(SearchBookCommandResponse::new)
    }
}
