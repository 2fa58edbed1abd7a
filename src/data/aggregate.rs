use std::collections::BTreeMap;

use super::filter;
use super::model::{Direction, MonthTotal, RawRecord, Series};

/// Sum `value` per month.
///
/// Months without records are left out rather than zero-filled, and the
/// result is ordered by month whatever order the records arrive in.
pub fn by_month<'a>(
    direction: Direction,
    records: impl IntoIterator<Item = &'a RawRecord>,
) -> Series {
    let mut sums: BTreeMap<u8, f64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.month).or_insert(0.0) += r.value;
    }

    Series {
        direction,
        totals: sums
            .into_iter()
            .map(|(month, value)| MonthTotal { month, value })
            .collect(),
    }
}

/// Filter the full record set to one direction and aggregate it.
pub fn build_series(records: &[RawRecord], direction: Direction) -> Series {
    by_month(direction, filter::select(records, direction))
}
