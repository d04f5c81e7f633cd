//! Equation formatting.

/// Round to 4 decimal places, the display precision of the trainer.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Render `a·x² + b·x + c = 0` as text.
///
/// Coefficients are rounded to 4 decimals first. Zero terms are dropped,
/// unit coefficients lose their numeral in front of a variable, and every
/// term after the first carries its sign in a `" + "` / `" - "` separator.
///
/// ```
/// use mesim_core::format::format_equation;
///
/// assert_eq!(format_equation(1.0, -2.0, 1.0), "x² - 2x + 1 = 0");
/// assert_eq!(format_equation(-1.0, 0.0, 5.0), "-x² + 5 = 0");
/// ```
pub fn format_equation(a: f64, b: f64, c: f64) -> String {
    let terms = [(round4(a), "x²"), (round4(b), "x"), (round4(c), "")];

    let mut out = String::new();
    for (coef, var) in terms {
        if coef == 0.0 {
            continue;
        }
        let leading = out.is_empty();
        push_term(&mut out, coef, var, leading);
    }

    if out.is_empty() {
        out.push('0');
    }
    out.push_str(" = 0");
    out
}

fn push_term(out: &mut String, coef: f64, var: &str, leading: bool) {
    let unit = coef.abs() == 1.0 && !var.is_empty();

    if leading {
        if unit {
            if coef < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(&coef.to_string());
        }
    } else {
        out.push_str(if coef < 0.0 { " - " } else { " + " });
        if !unit {
            out.push_str(&coef.abs().to_string());
        }
    }
    out.push_str(var);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_triples() {
        assert_eq!(format_equation(2.0, -3.0, 0.0), "2x² - 3x = 0");
        assert_eq!(format_equation(1.0, -2.0, 1.0), "x² - 2x + 1 = 0");
        assert_eq!(format_equation(-1.0, 0.0, 5.0), "-x² + 5 = 0");
    }

    #[test]
    fn unit_coefficients_on_every_position() {
        assert_eq!(format_equation(1.0, 1.0, 1.0), "x² + x + 1 = 0");
        assert_eq!(format_equation(1.0, -1.0, -1.0), "x² - x - 1 = 0");
    }

    #[test]
    fn leading_term_shifts_when_a_is_zero() {
        assert_eq!(format_equation(0.0, -1.0, 3.0), "-x + 3 = 0");
        assert_eq!(format_equation(0.0, 0.0, -7.0), "-7 = 0");
        assert_eq!(format_equation(0.0, 0.0, 0.0), "0 = 0");
    }

    #[test]
    fn coefficients_are_rounded_to_four_places() {
        assert_eq!(
            format_equation(1.0, -2.0 / 3.0, 1.0 / 9.0),
            "x² - 0.6667x + 0.1111 = 0"
        );
        assert_eq!(format_equation(-2.5, 0.00004, 1.23456), "-2.5x² + 1.2346 = 0");
    }

    #[test]
    fn rounding_to_unit_drops_numeral() {
        assert_eq!(format_equation(0.99999, 1.00001, 0.0), "x² + x = 0");
    }

    #[test]
    fn round4_behaviour() {
        assert_eq!(round4(3.14159), 3.1416);
        assert_eq!(round4(-0.00004), 0.0);
        assert_eq!(round4(2.0), 2.0);
    }
}
