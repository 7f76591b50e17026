use super::constants::METERS_PER_LIGHT_YEAR;

// Metric bands as (upper bound in meters, meters per unit, unit symbol).
// Each band covers [previous upper bound, upper bound).
const METRIC_BANDS: &[(f64, f64, &str)] = &[
    (1e-12, 1e-15, "fm"),
    (1e-9, 1e-12, "pm"),
    (1e-6, 1e-9, "nm"),
    (1e-3, 1e-6, "µm"),
    (1.0, 1e-3, "mm"),
    (1e3, 1.0, "m"),
    (1e6, 1e3, "km"),
    (1e9, 1e6, "Mm"),
    (METERS_PER_LIGHT_YEAR, 1e9, "Gm"),
];

const LIGHT_YEAR_BANDS: &[(f64, f64, &str)] = &[
    (1e3, 1.0, "ly"),
    (1e6, 1e3, "thousand ly"),
    (1e9, 1e6, "million ly"),
];

/// Value shown for `x` printed with `decimals` places.
#[inline]
fn rounded(x: f64, decimals: i32) -> f64 {
    let k = 10f64.powi(decimals);
    (x * k).round() / k
}

/// Human readable length with a unit chosen so the mantissa stays roughly
/// within 1..1000. A value that rounds up onto a band's upper edge is shown
/// in the next unit.
pub fn format_length(meters: f64) -> String {
    let abs = meters.abs();
    if abs == 0.0 {
        return "0 m".to_string();
    }
    if !abs.is_finite() {
        return format!("{} m", meters);
    }

    if abs < 1e-15 {
        let am = meters * 1e18;
        if am.abs() < 0.01 {
            return format!("{:.1e} am", am);
        }
        if rounded(am.abs(), 2) < 1e3 {
            return format!("{:.2} am", am);
        }
    }

    for &(upper, unit, symbol) in METRIC_BANDS {
        if abs < upper {
            let value = meters / unit;
            // One decimal at the bottom of the fm and pm bands
            let coarse = (symbol == "fm" && abs < 1e-14) || (symbol == "pm" && abs < 1e-11);
            let decimals = if coarse { 1 } else { 2 };
            if rounded(value.abs(), decimals) < upper / unit {
                return format!("{:.*} {}", decimals as usize, value, symbol);
            }
        }
    }

    let light_years = meters / METERS_PER_LIGHT_YEAR;
    for &(upper, unit, symbol) in LIGHT_YEAR_BANDS {
        let value = light_years / unit;
        if light_years.abs() < upper && rounded(value.abs(), 2) < upper / unit {
            return format!("{:.2} {}", value, symbol);
        }
    }
    format!("{:.2} billion ly", light_years / 1e9)
}
