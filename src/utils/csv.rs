use crate::{Cell, Generation, LifeError, Result};

/// Splits a leading signed decimal integer off `s`.
fn split_integer(s: &str) -> Option<(i32, &str)> {
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let (number, rest) = s.split_at(sign_len + digits_len);
    Some((number.parse().ok()?, rest))
}

/// Parses `<row><separator><column>` with the comment already stripped.
///
/// The separator is a single non-digit character, possibly surrounded by
/// whitespace, or a run of whitespace alone.
fn parse_record(record: &str) -> Option<Cell> {
    let (row, rest) = split_integer(record.trim())?;
    let trimmed = rest.trim_start();
    let column_text = if trimmed.len() != rest.len() && split_integer(trimmed).is_some() {
        trimmed
    } else {
        let mut chars = trimmed.chars();
        if chars.next()?.is_ascii_digit() {
            return None;
        }
        chars.as_str().trim_start()
    };
    let (column, tail) = split_integer(column_text)?;
    tail.is_empty().then_some(Cell::new(row, column))
}

impl Generation {
    /// Parses lines of `row,column` pairs.
    ///
    /// Everything from `#` to the end of a line is a comment, lines left
    /// blank are skipped. The whole parse fails on the first malformed line.
    pub fn from_csv<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut result = Generation::new();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let record = line.split('#').next().unwrap_or_default();
            if record.trim().is_empty() {
                continue;
            }
            let cell = parse_record(record).ok_or_else(|| LifeError::Csv {
                line: i + 1,
                text: line.to_string(),
            })?;
            result.set_alive(cell, true);
        }
        log::trace!("parsed csv with {} live cells", result.count());
        Ok(result)
    }

    /// One `row,column` line per live cell, in row-major order.
    pub fn to_csv(&self) -> Vec<String> {
        self.sorted_cells()
            .into_iter()
            .map(|cell| format!("{},{}", cell.row(), cell.column()))
            .collect()
    }
}
