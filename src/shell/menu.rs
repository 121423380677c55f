pub const MENU_HEADER: &str = "----- Library Management System -----";
pub const MENU_ITEMS: [&str; 5] = [
    "1. Add a book",
    "2. Search for books",
    "3. Check out a book",
    "4. Return a book",
    "0. Exit",
];
pub const MENU_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    SearchBooks,
    CheckoutBook,
    ReturnBook,
    Exit,
    Unknown(i32),
}

impl From<i32> for MenuChoice {
    fn from(n: i32) -> Self {
        match n {
            1 => MenuChoice::AddBook,
            2 => MenuChoice::SearchBooks,
            3 => MenuChoice::CheckoutBook,
            4 => MenuChoice::ReturnBook,
            0 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

// Reads the first whitespace-separated token of a line as the choice; anything
// after it is discarded. Returns None when that token is not an integer.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    line.split_whitespace().next()
        .and_then(|token| token.parse::<i32>().ok())
        .map(MenuChoice::from)
}

#[cfg(test)]
mod tests {
    use crate::shell::menu::{parse_choice, MenuChoice};

    #[test]
    fn test_should_parse_menu_choices() {
        assert_eq!(Some(MenuChoice::AddBook), parse_choice("1"));
        assert_eq!(Some(MenuChoice::SearchBooks), parse_choice(" 2 "));
        assert_eq!(Some(MenuChoice::CheckoutBook), parse_choice("3"));
        assert_eq!(Some(MenuChoice::ReturnBook), parse_choice("4 trailing words"));
        assert_eq!(Some(MenuChoice::Exit), parse_choice("0"));
        assert_eq!(Some(MenuChoice::Unknown(7)), parse_choice("7"));
        assert_eq!(Some(MenuChoice::Unknown(-1)), parse_choice("-1"));
    }

    #[test]
    fn test_should_reject_non_integer_input() {
        assert_eq!(None, parse_choice("abc"));
        assert_eq!(None, parse_choice("1.5"));
        assert_eq!(None, parse_choice("abc 1"));
        assert_eq!(None, parse_choice("99999999999"));
        assert_eq!(None, parse_choice(""));
    }
}
