//! Money market tenor strings.

use tenor_core::Date;

use crate::error::{CurveError, CurveResult};

/// Resolves a tenor string against `start`.
///
/// Accepts `ON`, `TN` and `SN` (one, two and three days), and `<n>D`,
/// `<n>W`, `<n>M` and `<n>Y`. Case-insensitive; month and year tenors clamp
/// to the end of the target month.
///
/// # Errors
///
/// Returns [`CurveError::InvalidTenor`] for an unknown unit or count, or when
/// the resulting date is out of range.
pub fn parse_tenor(start: Date, tenor: &str) -> CurveResult<Date> {
    let tenor = tenor.trim().to_uppercase();

    let overnight = match tenor.as_str() {
        "ON" | "O/N" => Some(1),
        "TN" | "T/N" => Some(2),
        "SN" | "S/N" => Some(3),
        _ => None,
    };
    if let Some(days) = overnight {
        return start
            .checked_add_days(days)
            .map_err(|e| CurveError::invalid_tenor(format!("{tenor} from {start}: {e}")));
    }

    let Some(unit) = tenor.chars().last() else {
        return Err(CurveError::invalid_tenor("empty tenor"));
    };
    let count = &tenor[..tenor.len() - unit.len_utf8()];
    let count: i32 = count
        .parse()
        .map_err(|_| CurveError::invalid_tenor(format!("invalid count in {tenor}")))?;

    let shifted = match unit {
        'D' => start.checked_add_days(i64::from(count)),
        'W' => start.checked_add_days(i64::from(count) * 7),
        'M' => start.add_months(count),
        'Y' => start.add_years(count),
        _ => return Err(CurveError::invalid_tenor(format!("unknown unit in {tenor}"))),
    };

    shifted.map_err(|e| CurveError::invalid_tenor(format!("{tenor} from {start}: {e}")))
}
