use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

#[derive(Debug, Default)]
pub struct CheckoutBookCommand {}

impl CheckoutBookCommand {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    pub title: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub book: BookDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, catalog: &mut dyn CatalogService, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        catalog.checkout_book(req.title.as_str())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
