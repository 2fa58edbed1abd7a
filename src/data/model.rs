use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::loader::ParseError;

// ---------------------------------------------------------------------------
// Direction – import or export
// ---------------------------------------------------------------------------

/// Trade direction of a record. Also names the two chart views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Import,
    Export,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Import, Direction::Export];

    /// The value used in the `import_export` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Import => "import",
            Direction::Export => "export",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "import" => Ok(Direction::Import),
            "export" => Ok(Direction::Export),
            other => Err(ParseError::UnknownDirection(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RawRecord – one row of the trade file
// ---------------------------------------------------------------------------

/// A raw input row before parsing: column name → cell text.
pub type RawRow = BTreeMap<String, String>;

/// A single parsed trade row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// cotton, silk, wool, ...
    pub fiber_type: String,
    pub import_export: Direction,
    /// yarn, apparel, home, ...
    pub category: String,
    pub sub_category: String,
    pub year: i32,
    /// Calendar month, 1–12.
    pub month: u8,
    pub value: f64,
}

/// A row the parser refused, kept so the UI can report it.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// Zero-based data row number (header excluded).
    pub row: usize,
    pub error: ParseError,
}

// ---------------------------------------------------------------------------
// TradeDataset – the complete loaded file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TradeDataset {
    pub records: Vec<RawRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl TradeDataset {
    /// Number of accepted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Series – monthly totals for one direction
// ---------------------------------------------------------------------------

/// Summed value of one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotal {
    pub month: u8,
    pub value: f64,
}

/// Per-month totals for one trade direction, ascending by month with at most
/// one entry per month.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub direction: Direction,
    pub totals: Vec<MonthTotal>,
}

impl Series {
    pub fn empty(direction: Direction) -> Self {
        Series {
            direction,
            totals: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Largest monthly total, `None` for an empty series.
    pub fn max_value(&self) -> Option<f64> {
        self.totals.iter().map(|t| t.value).reduce(f64::max)
    }

    /// Total for `month`, if the month is present.
    pub fn get(&self, month: u8) -> Option<f64> {
        self.totals
            .iter()
            .find(|t| t.month == month)
            .map(|t| t.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_column_values() {
        assert_eq!("import".parse::<Direction>(), Ok(Direction::Import));
        assert_eq!(" export ".parse::<Direction>(), Ok(Direction::Export));
        assert_eq!(
            "Import".parse::<Direction>(),
            Err(ParseError::UnknownDirection("Import".into()))
        );
    }

    #[test]
    fn series_max_and_lookup() {
        let series = Series {
            direction: Direction::Export,
            totals: vec![
                MonthTotal { month: 1, value: 10.0 },
                MonthTotal { month: 4, value: 42.5 },
                MonthTotal { month: 9, value: 3.0 },
            ],
        };
        assert_eq!(series.max_value(), Some(42.5));
        assert_eq!(series.get(4), Some(42.5));
        assert_eq!(series.get(5), None);
        assert_eq!(Series::empty(Direction::Import).max_value(), None);
    }
}
