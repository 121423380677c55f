use std::cell::RefCell;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, LoadOutcome};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RefCell<Option<Vec<BookEntity>>>,
}

impl MemoryBookRepository {
    // an empty repository behaves like a missing file until first saved
    pub fn new() -> Self {
        Self {
            books: RefCell::new(None),
        }
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: RefCell::new(Some(books)),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn load_all(&self, sink: &mut Vec<BookEntity>) -> LibraryResult<LoadOutcome> {
        match self.books.borrow().as_ref() {
            Some(books) => {
                sink.clear();
                sink.extend(books.iter().cloned());
                Ok(LoadOutcome::Loaded(books.len()))
            }
            None => Ok(LoadOutcome::Missing),
        }
    }

    fn save_all(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        *self.books.borrow_mut() = Some(entities.to_vec());
        Ok(entities.len())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
