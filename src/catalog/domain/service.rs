use std::collections::HashMap;
use tracing::{debug, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, LoadOutcome};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

// CatalogServiceImpl keeps books in insertion order; lookups are linear scans
// and always act on the first matching entry.
pub struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            books: vec![],
            book_repository,
            events_publisher,
        }
    }

    fn find_first(&self, title: &str) -> LibraryResult<usize> {
        self.books.iter().position(|b| b.has_title(title)).ok_or_else(|| {
            LibraryError::not_found(format!("Book '{}' not found in the library.", title).as_str())
        })
    }

    // The event is published before the status changes, so a failed publish
    // leaves the catalog untouched.
    fn transition(&mut self, title: &str, from: BookStatus, to: BookStatus,
                  conflict: &str) -> LibraryResult<BookDto> {
        let ndx = self.find_first(title)?;
        let current = self.books[ndx].book_status;
        if current != from {
            debug!(title, status = %current, "rejected catalog transition");
            return Err(LibraryError::conflict(format!("Book '{}' {}", title, conflict).as_str()));
        }
        let mut dto = BookDto::from(&self.books[ndx]);
        dto.book_status = to;
        self.events_publisher.publish(&DomainEvent::updated(
            "book_status", "catalog", dto.title.as_str(), &metadata(&dto), &dto)?)?;
        self.books[ndx].book_status = to;
        Ok(dto)
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let mut entity = BookEntity::from(book);
        entity.book_status = BookStatus::Available;
        let added = BookDto::from(&entity);
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", "catalog", added.title.as_str(), &metadata(&added), &added)?)?;
        self.books.push(entity);
        Ok(added)
    }

    fn search_books(&self, keyword: &str, genre: Option<&str>) -> LibraryResult<Vec<BookDto>> {
        let found: Vec<BookDto> = self.books.iter()
            .filter(|b| b.matches(keyword, genre))
            .map(BookDto::from)
            .collect();
        if found.is_empty() {
            return Err(LibraryError::not_found("No books found matching the search criteria."));
        }
        Ok(found)
    }

    fn checkout_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        self.transition(title, BookStatus::Available, BookStatus::CheckedOut, "is already checked out.")
    }

    fn return_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        self.transition(title, BookStatus::CheckedOut, BookStatus::Available, "is not checked out.")
    }

    // Books read before a failing line stay in the catalog.
    fn load_books(&mut self) -> LibraryResult<LoadOutcome> {
        let res = self.book_repository.load_all(&mut self.books);
        if let Err(ref err) = res {
            warn!(loaded = self.books.len(), "catalog load aborted: {}", err);
        }
        res
    }

    fn save_books(&self) -> LibraryResult<usize> {
        self.book_repository.save_all(&self.books)
    }

    fn books(&self) -> Vec<BookDto> {
        self.books.iter().map(BookDto::from).collect()
    }

    fn location(&self) -> String {
        self.book_repository.location()
    }
}

fn metadata(book: &BookDto) -> HashMap<String, String> {
    HashMap::from([
        ("isbn".to_string(), book.isbn.to_string()),
        ("status".to_string(), book.book_status.to_string()),
    ])
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            publication_date: other.publication_date,
            genre: other.genre.to_string(),
            book_status: other.book_status,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            publication_date: other.publication_date,
            genre: other.genre.to_string(),
            book_status: other.book_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::{BookStatus, LibraryError, LoadOutcome};
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    struct FailingPublisher {}

    impl EventPublisher for FailingPublisher {
        fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
            Err(LibraryError::runtime("publisher unavailable", None))
        }
    }

    fn new_service(repo: MemoryBookRepository) -> (CatalogServiceImpl, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let svc = CatalogServiceImpl::new(&Configuration::in_memory(), Box::new(repo), Box::new(publisher.clone()));
        (svc, publisher)
    }

    fn book(title: &str, author: &str, genre: &str) -> BookDto {
        let date = NaiveDate::from_ymd_opt(1965, 8, 1).expect("valid date");
        BookDto::new(title, author, "9780441013593", date, genre)
    }

    fn dune() -> BookDto {
        book("Dune", "Frank Herbert", "Sci-Fi")
    }

    fn statuses(svc: &CatalogServiceImpl) -> Vec<BookStatus> {
        svc.books().iter().map(|b| b.status()).collect()
    }

    #[test]
    fn test_should_add_books_without_dedup() {
        let (mut svc, publisher) = new_service(MemoryBookRepository::new());
        for _ in 0..5 {
            svc.add_book(&dune()).expect("should add book");
        }
        assert_eq!(5, svc.books().len());
        assert_eq!(5, publisher.events().len());
        assert_eq!(DomainEventType::Added, publisher.events()[0].kind);
    }

    #[test]
    fn test_should_add_books_as_available() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        let mut checked_out = dune();
        checked_out.book_status = BookStatus::CheckedOut;
        let added = svc.add_book(&checked_out).expect("should add book");
        assert!(!added.is_checked_out());
    }

    #[test]
    fn test_should_search_by_title_or_author() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        svc.add_book(&book("The Hobbit", "J.R.R. Tolkien", "Fantasy")).expect("should add book");
        svc.add_book(&dune()).expect("should add book");
        svc.add_book(&book("Tolkien: A Biography", "Humphrey Carpenter", "Biography")).expect("should add book");

        let res = svc.search_books("Hobbit", None).expect("should find book");
        assert_eq!(1, res.len());
        assert_eq!("The Hobbit", res[0].title.as_str());

        let res = svc.search_books("Tolkien", None).expect("should find books");
        assert_eq!(vec!["The Hobbit", "Tolkien: A Biography"],
                   res.iter().map(|b| b.title.as_str()).collect::<Vec<_>>());

        let res = svc.search_books("Tolkien", Some("fantasy")).expect("should find book");
        assert_eq!(1, res.len());
        assert_eq!("The Hobbit", res[0].title.as_str());
    }

    #[test]
    fn test_should_search_case_sensitive_keyword() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        svc.add_book(&book("The Hobbit", "J.R.R. Tolkien", "Fantasy")).expect("should add book");
        let res = svc.search_books("hobbit", None);
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_report_no_results_for_genre_filter() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        svc.add_book(&book("The Hobbit", "J.R.R. Tolkien", "Fantasy")).expect("should add book");
        let err = svc.search_books("Hobbit", Some("Sci-Fi")).expect_err("should not find book");
        assert_eq!("No books found matching the search criteria.", err.to_string());
    }

    #[test]
    fn test_should_checkout_and_return() {
        let (mut svc, publisher) = new_service(MemoryBookRepository::new());
        svc.add_book(&dune()).expect("should add book");

        let res = svc.return_book("Dune").expect_err("should not return available book");
        assert!(matches!(res, LibraryError::Conflict { .. }));
        assert_eq!("Book 'Dune' is not checked out.", res.to_string());

        let checked_out = svc.checkout_book("dune").expect("should checkout");
        assert_eq!(BookStatus::CheckedOut, checked_out.book_status);

        let res = svc.checkout_book("Dune").expect_err("should not checkout twice");
        assert_eq!("Book 'Dune' is already checked out.", res.to_string());

        let returned = svc.return_book("DUNE").expect("should return");
        assert_eq!(BookStatus::Available, returned.book_status);
        assert_eq!(vec![BookStatus::Available], statuses(&svc));

        let updates = publisher.events().iter().filter(|e| e.kind == DomainEventType::Updated).count();
        assert_eq!(2, updates);
    }

    #[test]
    fn test_should_report_not_found_without_change() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        svc.add_book(&dune()).expect("should add book");
        svc.checkout_book("Dune").expect("should checkout");
        let before = svc.books();

        let err = svc.checkout_book("Missing").expect_err("should not find book");
        assert!(matches!(err, LibraryError::NotFound { .. }));
        assert_eq!("Book 'Missing' not found in the library.", err.to_string());
        let err = svc.return_book("Missing").expect_err("should not find book");
        assert!(matches!(err, LibraryError::NotFound { .. }));
        assert_eq!(before, svc.books());
    }

    #[test]
    fn test_should_act_on_first_duplicate_title() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        svc.add_book(&book("Dune", "Frank Herbert", "Sci-Fi")).expect("should add book");
        svc.add_book(&book("DUNE", "Someone Else", "Parody")).expect("should add book");

        svc.checkout_book("dune").expect("should checkout first");
        assert_eq!(vec![BookStatus::CheckedOut, BookStatus::Available], statuses(&svc));

        // the second copy is never considered
        let err = svc.checkout_book("dune").expect_err("first copy is already out");
        assert!(matches!(err, LibraryError::Conflict { .. }));
        assert_eq!(vec![BookStatus::CheckedOut, BookStatus::Available], statuses(&svc));
    }

    #[test]
    fn test_should_save_and_load_books() {
        let date = NaiveDate::from_ymd_opt(1937, 9, 21).expect("valid date");
        let stored = vec![BookEntity::new("The Hobbit", "J.R.R. Tolkien", "9780547928227", date, "Fantasy")];
        let (mut svc, _) = new_service(MemoryBookRepository::with_books(stored));

        svc.add_book(&dune()).expect("should add book");
        assert_eq!(LoadOutcome::Loaded(1), svc.load_books().expect("should load"));
        assert_eq!(vec!["The Hobbit"], svc.books().iter().map(|b| b.title.clone()).collect::<Vec<_>>());

        svc.checkout_book("The Hobbit").expect("should checkout");
        assert_eq!(1, svc.save_books().expect("should save"));
        assert_eq!(LoadOutcome::Loaded(1), svc.load_books().expect("should reload"));
        assert!(svc.books()[0].is_checked_out());
    }

    #[test]
    fn test_should_leave_catalog_unchanged_when_publish_fails() {
        let date = NaiveDate::from_ymd_opt(1965, 8, 1).expect("valid date");
        let stored = vec![BookEntity::new("Dune", "Frank Herbert", "9780441013593", date, "Sci-Fi")];
        let mut svc = CatalogServiceImpl::new(&Configuration::in_memory(),
                                              Box::new(MemoryBookRepository::with_books(stored)),
                                              Box::new(FailingPublisher {}));
        svc.load_books().expect("should load");

        let err = svc.checkout_book("Dune").expect_err("publish should fail");
        assert!(matches!(err, LibraryError::Runtime { .. }));
        assert_eq!(vec![BookStatus::Available], statuses(&svc));

        let err = svc.add_book(&book("Emma", "Jane Austen", "Romance")).expect_err("publish should fail");
        assert!(matches!(err, LibraryError::Runtime { .. }));
        assert_eq!(1, svc.books().len());
    }

    #[test]
    fn test_should_start_empty_when_store_missing() {
        let (mut svc, _) = new_service(MemoryBookRepository::new());
        assert_eq!(LoadOutcome::Missing, svc.load_books().expect("should load"));
        assert!(svc.books().is_empty());
        assert_eq!("memory", svc.location().as_str());
    }
}
