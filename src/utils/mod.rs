mod csv;
mod parse_text;
mod random;
mod record;

pub use record::Record;
