pub mod date;
pub mod flatfile;
pub mod logging;
