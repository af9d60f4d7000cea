mod date;
mod text;

pub(crate) use date::parse_entry_date;
pub(crate) use text::{escape_pipes, shorten};
