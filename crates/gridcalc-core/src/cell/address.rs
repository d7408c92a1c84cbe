//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Convert column letters to a zero-based index (A = 0, Z = 25, AA = 26, etc.)
///
/// The letters are read as a bijective base-26 numeral where each letter
/// contributes `letter - 'A' + 1`. Only uppercase `A`-`Z` is accepted.
///
/// # Examples
/// ```
/// use gridcalc_core::column_to_index;
///
/// assert_eq!(column_to_index("A").unwrap(), 0);
/// assert_eq!(column_to_index("AA").unwrap(), 26);
/// assert!(column_to_index("a1").is_err());
/// ```
pub fn column_to_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn(letters.to_string()));
    }

    let mut col: u64 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
        col = col * 26 + u64::from(b - b'A' + 1);
        if col > u64::from(u32::MAX) + 1 {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
    }

    // col >= 1 here, and col - 1 fits in u32 by the check above
    Ok((col - 1) as u32)
}

/// Convert a zero-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn index_to_column(index: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(index) + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// A cell address (e.g., "A1", "AA12")
///
/// Identifiers are column letters followed by a 1-based row number. Both
/// coordinates are stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., Z=25, AA=26)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from zero-based coordinates
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The input must be uppercase column letters immediately followed by a
    /// row number of at least 1.
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr.row, 2);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .bytes()
            .position(|b| !b.is_ascii_uppercase())
            .unwrap_or(s.len());

        if split == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = column_to_index(&s[..split])?;

        let row_str = &s[split..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("row number too large in '{}'", s)))?;

        // Rows are 1-based in identifiers, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", index_to_column(self.col), u64::from(self.row) + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An inclusive rectangle of cells (e.g., "A1:B10")
///
/// Unlike a normalized selection, the corners are kept exactly as written.
/// A range whose start lies below or right of its end covers no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left when well-formed)
    pub start: CellAddress,
    /// End address (bottom-right when well-formed)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range without reordering the corners
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Parse a range from strict A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((start, end)) => {
                let start = CellAddress::parse(start)
                    .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
                let end = CellAddress::parse(end)
                    .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
                Ok(Self::new(start, end))
            }
            None => Err(Error::InvalidRange(format!("missing ':' in '{}'", s))),
        }
    }

    /// Whether the range covers no cells (inverted rows or columns)
    pub fn is_empty(&self) -> bool {
        self.start.row > self.end.row || self.start.col > self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            u64::from(self.end.row - self.start.row) + 1
        }
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            u64::from(self.end.col - self.start.col) + 1
        }
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count().saturating_mul(self.col_count())
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            remaining: self.cell_count(),
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range, row-major
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u32,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let addr = CellAddress::new(self.current_row, self.current_col);

        if self.current_col == self.range.end.col {
            self.current_col = self.range.start.col;
            // Saturates only on the final cell, which the counter already ends
            self.current_row = self.current_row.saturating_add(1);
        } else {
            self.current_col += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
