pub mod dump;
pub mod style;

pub use dump::{dump, dump_as_date, dump_as_size, is_printable, DisplayOptions};   // re-export
pub use style::{ansi_codes, Formatter, Style};   // re-export
