use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::core::library::{BookStatus, LibraryError, LibraryResult, LoadOutcome};
use crate::core::repository::Repository;
use crate::utils::date::{format_date, parse_date};
use crate::utils::flatfile::{bool_field, join_fields, parse_bool_field, split_fields};

const BOOK_FIELDS: usize = 6;

// FileBookRepository stores one book per line:
// title,author,isbn,yyyy-MM-dd,genre,true|false
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Repository<BookEntity> for FileBookRepository {
    // sink is cleared only once the file has been opened, so a missing file
    // leaves it untouched
    fn load_all(&self, sink: &mut Vec<BookEntity>) -> LibraryResult<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file not found");
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => return Err(LibraryError::from(err)),
        };
        sink.clear();
        let mut loaded = 0;
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let fields = split_fields(line.as_str());
            if fields.len() < BOOK_FIELDS {
                debug!(line = i + 1, fields = fields.len(), "skipping short catalog line");
                continue;
            }
            sink.push(map_to_book(&fields)?);
            loaded += 1;
        }
        info!(path = %self.path.display(), loaded, "catalog loaded");
        Ok(LoadOutcome::Loaded(loaded))
    }

    fn save_all(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for book in entities {
            writeln!(writer, "{}", map_to_line(book))?;
        }
        writer.flush()?;
        info!(path = %self.path.display(), saved = entities.len(), "catalog saved");
        Ok(entities.len())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn map_to_line(book: &BookEntity) -> String {
    let date = format_date(&book.publication_date);
    join_fields(&[
        book.title.as_str(),
        book.author.as_str(),
        book.isbn.as_str(),
        date.as_str(),
        book.genre.as_str(),
        bool_field(book.book_status.is_checked_out()),
    ])
}

// Only the first six fields are read; extra fields are ignored.
fn map_to_book(fields: &[&str]) -> LibraryResult<BookEntity> {
    let publication_date = parse_date(fields[3])
        .map_err(|err| LibraryError::serialization(err.message()))?;
    Ok(BookEntity {
        title: fields[0].to_string(),
        author: fields[1].to_string(),
        isbn: fields[2].to_string(),
        publication_date,
        genre: fields[4].to_string(),
        book_status: BookStatus::from_checked_out(parse_bool_field(fields[5])),
    })
}
