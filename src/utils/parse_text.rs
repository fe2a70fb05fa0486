use crate::{Cell, Config, Generation};
use std::convert::Infallible;
use std::str::FromStr;

impl Generation {
    /// Parses a text picture of the field.
    ///
    /// Every line is a row and every character a column, counted after the
    /// line is trimmed. `_` and `.` are dead cells, any other character is a
    /// live one. Blank lines are empty rows. Never fails.
    pub fn parse_text(field: &str) -> Self {
        let mut result = Generation::new();
        for (row, line) in field.lines().enumerate() {
            // rows and columns past the grid bounds are dropped
            let Ok(row) = i32::try_from(row) else {
                break;
            };
            let cells = line
                .trim()
                .chars()
                .enumerate()
                .map_while(|(column, c)| Some((i32::try_from(column).ok()?, c)))
                .filter(|(_, c)| !Config::DEAD_GLYPHS.contains(c))
                .map(|(column, _)| Cell::new(row, column));
            result.extend(cells);
        }
        log::trace!("parsed text pattern with {} live cells", result.count());
        result
    }
}

impl FromStr for Generation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_text(s))
    }
}
