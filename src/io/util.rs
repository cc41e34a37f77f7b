use std::fmt;

/// Right-aligned fixed-point field, rendered like C's `%12.6f`.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match non_finite(self.0) {
            Some(text) => write!(f, "{:>12}", text),
            None => write!(f, "{:>12.6}", self.0),
        }
    }
}

/// C `%e`: six mantissa digits and a signed exponent of at least two digits.
#[derive(Debug, Clone, Copy)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = non_finite(self.0) {
            return f.write_str(text);
        }

        let rendered = format!("{:.6e}", self.0);
        let Some((mantissa, exponent)) = rendered.split_once('e') else {
            return f.write_str(&rendered);
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}
