//! Number and percentage formatting shared by tooltips, tick labels and
//! interaction labels.

/// Formats a value the way dashboard labels display numbers: integral values
/// without a fractional part, everything else in shortest round-trip form.
///
/// Non-finite input formats as `0` so derived metrics never surface `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

/// Share of `value` in `total` as a percentage in `[0, 100]` for
/// non-negative inputs.
///
/// A zero or non-finite total yields `0.0`.
#[must_use]
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() || !value.is_finite() {
        return 0.0;
    }
    value / total * 100.0
}

/// Percentage rounded to one decimal place, trailing `.0` dropped.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    format_number(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn zero_total_share_is_zero() {
        assert_eq!(share_percent(0.0, 0.0), 0.0);
        assert_eq!(format_percent(share_percent(5.0, 0.0)), "0");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(share_percent(1.0, 3.0)), "33.3");
        assert_eq!(format_percent(share_percent(1.0, 4.0)), "25");
    }

    #[test]
    fn non_finite_values_format_as_zero() {
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
    }
}
