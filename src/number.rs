use std::{fmt, ops::Add};

/// A numeric value that remembers whether it started life as an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Add for Number {
    type Output = Number;

    /// Integer + integer stays integral; anything involving a float is a float.
    /// Integer overflow spills into a float rather than wrapping.
    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(lhs), Number::Integer(rhs)) => lhs
                .checked_add(rhs)
                .map_or_else(|| Number::Float(lhs as f64 + rhs as f64), Number::Integer),
            (lhs, rhs) => Number::Float(lhs.as_f64() + rhs.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) => format_float(*value, f),
        }
    }
}

/// Writes floats the way the CLI has always printed them: `6.0`, `nan`,
/// `1e+20`, `1e-05`.
fn format_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }

    // Debug keeps the trailing `.0` on whole floats and switches to
    // exponent form outside 1e-4..1e16.
    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return f.write_str(&repr);
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// Returns true when `number` is divisible by two, zero and negatives included.
pub fn is_even(number: i64) -> bool {
    number % 2 == 0
}
