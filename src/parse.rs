//! Whitespace-separated grid input: `rows cols` followed by `rows * cols` integers.

use std::str::FromStr;

use crate::error::GridStatsError;
use crate::grid::{Grid, GridStorage};

/// Grid dimensions read from the first two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rows: usize,
    pub cols: usize,
}

impl Header {
    /// A grid with no cells, whose statistics are reported as `0 0` without reading elements.
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Separator bytes: ASCII whitespace plus vertical tab.
fn is_separator(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == b'\x0b'
}

/// Splits raw input on whitespace. Tokens stay as bytes until parsed, so
/// unread trailing content never has to be valid UTF-8.
pub fn tokens(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    input
        .split(is_separator)
        .filter(|token| !token.is_empty())
}

fn parse_token<T: FromStr>(token: &[u8]) -> Option<T> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

fn describe(token: &[u8]) -> String {
    format!("`{}` is not a valid number", String::from_utf8_lossy(token))
}

/// Reads the `rows cols` header.
///
/// # Errors
///
/// [`GridStatsError::DimensionParse`] when a token is missing or not an unsigned 32-bit integer.
pub fn read_header<'a>(
    tokens: &mut impl Iterator<Item = &'a [u8]>,
) -> Result<Header, GridStatsError> {
    let mut next_dim = |name: &str| -> Result<usize, GridStatsError> {
        let token = tokens
            .next()
            .ok_or_else(|| GridStatsError::DimensionParse(format!("missing {name}")))?;
        let value: u32 = parse_token(token).ok_or_else(|| {
            GridStatsError::DimensionParse(format!("{name}: {}", describe(token)))
        })?;
        usize::try_from(value)
            .map_err(|_| GridStatsError::DimensionParse(format!("{name} {value} is too large")))
    };

    let rows = next_dim("row count")?;
    let cols = next_dim("column count")?;
    Ok(Header { rows, cols })
}

/// Allocates a grid in storage `S` and fills it from the element tokens.
///
/// Storage is allocated before any element is read, so a capacity or allocation
/// failure is reported ahead of malformed data.
///
/// # Errors
///
/// The storage error, or [`GridStatsError::ElementParse`] for a missing or invalid element.
pub fn read_grid<'a, S: GridStorage>(
    header: Header,
    tokens: &mut impl Iterator<Item = &'a [u8]>,
) -> Result<Grid<S>, GridStatsError> {
    let mut grid = Grid::<S>::zeroed(header.rows, header.cols)?;
    for (index, cell) in grid.cells_mut().iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| GridStatsError::ElementParse {
            index,
            detail: "missing".to_string(),
        })?;
        *cell = parse_token(token).ok_or_else(|| GridStatsError::ElementParse {
            index,
            detail: describe(token),
        })?;
    }
    Ok(grid)
}
