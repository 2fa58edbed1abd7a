use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, in the column order the viewer expects.
#[derive(Serialize)]
struct TradeRow<'a> {
    fiber_type: &'a str,
    import_export: &'a str,
    category: &'a str,
    sub_category: &'a str,
    year: i32,
    month: u8,
    value: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Seasonal multiplier peaking in `peak_month`.
fn seasonality(month: u8, peak_month: u8) -> f64 {
    let phase = (month as f64 - peak_month as f64) / 12.0 * 2.0 * std::f64::consts::PI;
    1.0 + 0.4 * phase.cos()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (fiber, category, sub categories, base monthly lbs)
    let fibers: [(&str, &str, &[&str], f64); 4] = [
        ("raw_cotton", "raw_fiber", &["upland", "pima"], 2_500_000.0),
        ("wool", "apparel", &["sweaters", "suits"], 400_000.0),
        ("silk", "home", &["bedding"], 60_000.0),
        ("cotton", "yarn", &["carded", "combed"], 900_000.0),
    ];
    let directions = [("import", 1.0, 3u8), ("export", 2.5, 9u8)];
    let years = [2019, 2020, 2021];

    let output_path = Path::new("data/US_Textile_Fiber_Trade.csv");
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).context("creating output directory")?;
    }
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    let mut rows = 0usize;
    for &year in &years {
        for &(fiber_type, category, sub_categories, base) in &fibers {
            for &(import_export, scale, peak) in &directions {
                for &sub_category in sub_categories {
                    for month in 1..=12u8 {
                        let value = base * scale * seasonality(month, peak)
                            / sub_categories.len() as f64
                            * rng.uniform(0.8, 1.2);
                        writer
                            .serialize(TradeRow {
                                fiber_type,
                                import_export,
                                category,
                                sub_category,
                                year,
                                month,
                                value: value.round(),
                            })
                            .context("writing row")?;
                        rows += 1;
                    }
                }
            }
        }
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {rows} trade rows to {}", output_path.display());
    Ok(())
}
