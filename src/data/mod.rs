/// Data layer: core types, loading, filtering and monthly aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  rows → parse_record → TradeDataset (+ rejected rows)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  raw_cotton, 2020, one direction
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  sum per month → Series
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
