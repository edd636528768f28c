//! Column-level value typing.
//!
//! A column is numeric only when every populated cell is; one stray word keeps
//! the whole column textual. Placeholder cells ("n/a", "-") do not block a
//! numeric column and are read as missing there. Digit strings with a leading
//! zero ("0987...") are identifiers, not numbers, and keep the column textual.
//! "true"/"false" cells stay text.

use invdir_model::{RawValue, is_sentinel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Integer,
    Real,
    Text,
}

/// True for "0" followed by another digit, after an optional sign.
fn has_leading_zero(cell: &str) -> bool {
    let digits = cell.strip_prefix(['+', '-']).unwrap_or(cell);
    let mut chars = digits.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn parse_integer(cell: &str) -> Option<i64> {
    if has_leading_zero(cell) {
        return None;
    }
    cell.parse::<i64>().ok()
}

fn parse_real(cell: &str) -> Option<f64> {
    if has_leading_zero(cell) {
        return None;
    }
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Picks the narrowest kind that every populated cell satisfies.
pub(crate) fn infer_column<'a>(cells: impl IntoIterator<Item = &'a str>) -> ColumnKind {
    let mut integer = true;
    let mut real = true;
    let mut populated = 0usize;
    for cell in cells {
        if is_sentinel(cell) {
            continue;
        }
        let trimmed = cell.trim();
        populated += 1;
        integer &= parse_integer(trimmed).is_some();
        real &= parse_real(trimmed).is_some();
        if !(integer || real) {
            return ColumnKind::Text;
        }
    }
    if populated == 0 {
        ColumnKind::Text
    } else if integer {
        ColumnKind::Integer
    } else if real {
        ColumnKind::Real
    } else {
        ColumnKind::Text
    }
}

/// Converts one cell of a column of `kind`.
pub(crate) fn convert_cell(cell: &str, kind: ColumnKind) -> RawValue {
    if cell.is_empty() {
        return RawValue::Missing;
    }
    let trimmed = cell.trim();
    let typed = match kind {
        ColumnKind::Text => return RawValue::Text(cell.to_string()),
        ColumnKind::Integer => parse_integer(trimmed).map(RawValue::Integer),
        ColumnKind::Real => parse_real(trimmed).map(RawValue::Real),
    };
    // Only placeholders fail to convert in a typed column.
    typed.unwrap_or(RawValue::Missing)
}
