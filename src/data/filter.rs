use crate::config::{TRADE_FILTER, TradeFilter};

use super::model::{Direction, RawRecord};

// ---------------------------------------------------------------------------
// Filter predicate: one fiber, one year, one direction
// ---------------------------------------------------------------------------

impl TradeFilter {
    /// Whether `record` belongs to this commodity-year in the given direction.
    pub fn matches(&self, record: &RawRecord, direction: Direction) -> bool {
        record.fiber_type == self.fiber_type
            && record.year == self.year
            && record.import_export == direction
    }
}

/// Records of [`TRADE_FILTER`]'s fiber and year travelling in `direction`.
///
/// Everything else is dropped silently; the predicate is fixed, not a query.
pub fn select(
    records: &[RawRecord],
    direction: Direction,
) -> impl Iterator<Item = &RawRecord> + '_ {
    records
        .iter()
        .filter(move |r| TRADE_FILTER.matches(r, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fiber: &str, year: i32, direction: Direction) -> RawRecord {
        RawRecord {
            fiber_type: fiber.into(),
            import_export: direction,
            category: "raw_fiber".into(),
            sub_category: "cotton".into(),
            year,
            month: 1,
            value: 1.0,
        }
    }

    #[test]
    fn keeps_only_raw_cotton_2020_in_direction() {
        let records = vec![
            record("raw_cotton", 2020, Direction::Import),
            record("raw_cotton", 2020, Direction::Export),
            record("raw_cotton", 2019, Direction::Import),
            record("wool", 2020, Direction::Import),
            record("raw_cotton", 2020, Direction::Import),
        ];

        for direction in Direction::ALL {
            let selected: Vec<_> = select(&records, direction).collect();
            assert!(!selected.is_empty());
            for r in &selected {
                assert_eq!(r.fiber_type, "raw_cotton");
                assert_eq!(r.year, 2020);
                assert_eq!(r.import_export, direction);
            }
        }
        assert_eq!(select(&records, Direction::Import).count(), 2);
        assert_eq!(select(&records, Direction::Export).count(), 1);
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert_eq!(select(&[], Direction::Import).count(), 0);
    }
}
