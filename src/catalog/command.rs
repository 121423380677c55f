pub mod add_book_cmd;
pub mod checkout_book_cmd;
pub mod return_book_cmd;
pub mod search_book_cmd;
