use std::io::{BufRead, Write};
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryResult, LoadOutcome};
use crate::shell::menu::{parse_choice, MenuChoice, MENU_HEADER, MENU_ITEMS, MENU_PROMPT};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ShellState {
    MainMenu,
    Exited,
}

// ShellController owns the catalog for the lifetime of the session and hands it
// to one command per menu turn. End of input behaves like the exit choice.
pub struct ShellController<R: BufRead, W: Write> {
    catalog: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ShellController<R, W> {
    pub fn new(catalog: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog.as_ref()
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        self.load_catalog()?;
        let mut state = ShellState::MainMenu;
        while state == ShellState::MainMenu {
            state = self.turn()?;
        }
        Ok(())
    }

    pub fn load_catalog(&mut self) -> LibraryResult<()> {
        let location = self.catalog.location();
        match self.catalog.load_books() {
            Ok(LoadOutcome::Loaded(_)) => writeln!(self.output, "Books loaded from file: {}", location)?,
            Ok(LoadOutcome::Missing) => writeln!(self.output, "File not found: {}", location)?,
            Err(err) => writeln!(self.output, "Error loading books from file: {}", err)?,
        }
        Ok(())
    }

    pub fn turn(&mut self) -> LibraryResult<ShellState> {
        writeln!(self.output, "{}", MENU_HEADER)?;
        for item in MENU_ITEMS {
            writeln!(self.output, "{}", item)?;
        }
        write!(self.output, "{}", MENU_PROMPT)?;
        self.output.flush()?;

        let Some(line) = self.read_choice_line()? else {
            return self.exit();
        };
        let Some(choice) = parse_choice(line.as_str()) else {
            debug!(input = %line, "rejected menu input");
            writeln!(self.output, "Invalid input. Please try again.\n")?;
            return Ok(ShellState::MainMenu);
        };
        debug!(?choice, "menu choice");
        writeln!(self.output)?;
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::SearchBooks => self.search_books(),
            MenuChoice::CheckoutBook => self.checkout_book(),
            MenuChoice::ReturnBook => self.return_book(),
            MenuChoice::Exit => self.exit(),
            MenuChoice::Unknown(_) => {
                writeln!(self.output, "Invalid choice. Please try again.\n")?;
                Ok(ShellState::MainMenu)
            }
        }
    }

    fn add_book(&mut self) -> LibraryResult<ShellState> {
        let Some(title) = self.prompt("Enter the title of the book: ")? else { return self.exit() };
        let Some(author) = self.prompt("Enter the author of the book: ")? else { return self.exit() };
        let Some(isbn) = self.prompt("Enter the ISBN of the book: ")? else { return self.exit() };
        let Some(date) = self.prompt("Enter the publication date (yyyy-MM-dd): ")? else { return self.exit() };
        let Some(genre) = self.prompt("Enter the genre of the book: ")? else { return self.exit() };

        let req = AddBookCommandRequest::new(&title, &author, &isbn, &date, &genre);
        match AddBookCommand::new().execute(self.catalog.as_mut(), req) {
            Ok(_) => writeln!(self.output, "Book added successfully.\n")?,
            Err(err) => writeln!(self.output, "Book not added: {}\n", err)?,
        }
        Ok(ShellState::MainMenu)
    }

    fn search_books(&mut self) -> LibraryResult<ShellState> {
        let Some(keyword) = self.prompt("Enter the search keyword: ")? else { return self.exit() };
        let Some(genre) = self.prompt("Enter the genre to filter by (or press Enter to skip): ")? else {
            return self.exit();
        };

        let req = SearchBookCommandRequest::new(&keyword, &genre);
        match SearchBookCommand::new().execute(self.catalog.as_mut(), req) {
            Ok(res) => {
                writeln!(self.output, "Search results:")?;
                for book in res.books {
                    writeln!(self.output, "{}", book)?;
                }
            }
            Err(err) => self.report(&err)?,
        }
        writeln!(self.output)?;
        Ok(ShellState::MainMenu)
    }

    fn checkout_book(&mut self) -> LibraryResult<ShellState> {
        let Some(title) = self.prompt("Enter the title of the book to check out: ")? else { return self.exit() };
        match CheckoutBookCommand::new().execute(self.catalog.as_mut(), CheckoutBookCommandRequest::new(&title)) {
            Ok(_) => writeln!(self.output, "Book '{}' checked out successfully.", title)?,
            Err(err) => self.report(&err)?,
        }
        writeln!(self.output)?;
        Ok(ShellState::MainMenu)
    }

    fn return_book(&mut self) -> LibraryResult<ShellState> {
        let Some(title) = self.prompt("Enter the title of the book to return: ")? else { return self.exit() };
        match ReturnBookCommand::new().execute(self.catalog.as_mut(), ReturnBookCommandRequest::new(&title)) {
            Ok(_) => writeln!(self.output, "Book '{}' returned successfully.", title)?,
            Err(err) => self.report(&err)?,
        }
        writeln!(self.output)?;
        Ok(ShellState::MainMenu)
    }

    fn exit(&mut self) -> LibraryResult<ShellState> {
        let location = self.catalog.location();
        match self.catalog.save_books() {
            Ok(_) => writeln!(self.output, "Books saved to file: {}", location)?,
            Err(err) => writeln!(self.output, "Error saving books to file: {}", err)?,
        }
        writeln!(self.output, "Exiting and saving changes.")?;
        self.output.flush()?;
        Ok(ShellState::Exited)
    }

    fn report(&mut self, err: &CommandError) -> LibraryResult<()> {
        writeln!(self.output, "{}", err)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    // blank lines are skipped while waiting for a menu choice
    fn read_choice_line(&mut self) -> LibraryResult<Option<String>> {
        loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
