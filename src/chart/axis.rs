//! Tick positions and labels for the two axes.
//!
//! The y axis uses d3's `ticks()` nice-step rule and `.2s` number format.

use crate::config::MONTH_LABELS;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// One tick per month, labelled with its abbreviation.
pub fn month_ticks() -> Vec<Tick> {
    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| Tick {
            value: (i + 1) as f64,
            label: (*label).to_string(),
        })
        .collect()
}

/// Ticks over `[0, max]` labelled with SI prefixes.
pub fn value_ticks(max: f64, count: usize) -> Vec<Tick> {
    ticks(0.0, max, count)
        .into_iter()
        .map(|value| Tick {
            value,
            label: format_si(value),
        })
        .collect()
}

/// Roughly `count` evenly spaced round numbers within `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    if stop < start {
        let mut reversed = ticks(stop, start, count);
        reversed.reverse();
        return reversed;
    }

    let (i1, i2, inc) = tick_spec(start, stop, count as f64);
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| {
            let i = i as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect()
}

/// First and last tick index plus the increment. A negative increment means
/// "divide by its magnitude", which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (i64, i64, f64) {
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        let mut i1 = (start * scale).round() as i64;
        let mut i2 = (stop * scale).round() as i64;
        if (i1 as f64) / scale < start {
            i1 += 1;
        }
        if (i2 as f64) / scale > stop {
            i2 -= 1;
        }
        (i1, i2, -scale)
    } else {
        let step = 10f64.powf(power) * factor;
        let mut i1 = (start / step).round() as i64;
        let mut i2 = (stop / step).round() as i64;
        if (i1 as f64) * step < start {
            i1 += 1;
        }
        if (i2 as f64) * step > stop {
            i2 -= 1;
        }
        (i1, i2, step)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Two significant digits with an SI prefix: `1.5M`, `20k`, `150k`, `0.0`.
pub fn format_si(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let sign = if v < 0.0 { "-" } else { "" };
    // `{:.1e}` rounds to two significant digits: "1.5e6", "0.0e0".
    let sci = format!("{:.1e}", v.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits = mantissa.replace('.', "");

    let prefix_exp = exp.div_euclid(3).clamp(-8, 8);
    let int_len = exp - prefix_exp * 3 + 1;
    let n = digits.len() as i32;

    let body = if int_len == n {
        digits
    } else if int_len > n {
        format!("{digits}{}", "0".repeat((int_len - n) as usize))
    } else if int_len > 0 {
        let (head, tail) = digits.split_at(int_len as usize);
        format!("{head}.{tail}")
    } else {
        format!("0.{}{digits}", "0".repeat((-int_len) as usize))
    };

    format!("{sign}{body}{}", SI_PREFIXES[(prefix_exp + 8) as usize])
}
