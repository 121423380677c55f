use crate::core::library::BookStatus;

pub mod model;

// Compares char by char, folding each pair through upper then lower case.
// Strings of different char counts never match, even when their full
// lowercase forms are equal.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() &&
        a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
        })
}

pub trait Book {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn genre(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_checked_out(&self) -> bool {
        self.status().is_checked_out()
    }

    // Titles identify books for checkout and return, ignoring case.
    fn has_title(&self, title: &str) -> bool {
        equals_ignore_case(self.title(), title)
    }

    // keyword is a case-sensitive substring of title or author; genre ignores case
    fn matches(&self, keyword: &str, genre: Option<&str>) -> bool {
        (self.title().contains(keyword) || self.author().contains(keyword)) &&
            genre.map_or(true, |g| equals_ignore_case(self.genre(), g))
    }
}
