use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

#[derive(Debug, Default)]
pub struct ReturnBookCommand {}

impl ReturnBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, catalog: &mut dyn CatalogService, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        catalog.return_book(req.title.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
