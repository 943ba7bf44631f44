//! Number literals, which hold whatever double-precision value the formula parser produced.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A number literal.
///
/// Literals are compared by bit pattern after normalising `-0` to `0` and every NaN to one NaN,
/// so two literals are equal exactly when they display, and serialize, identically.
#[derive(Debug, Copy, Clone)]
pub struct Number(f64);

/// Integers up to this magnitude are exactly representable, and serialized without a fraction.
const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

impl Number {
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Number(0.0)
        } else if value.is_nan() {
            Number(f64::NAN)
        } else {
            Number(value)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Number {}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::new(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::new(value.into())
    }
}

impl fmt::Display for Number {
    /// Formats the number the way a JavaScript front end would: the shortest digits which read
    /// back as the same value, in plain notation for magnitudes from `1e-7` up to `1e21` and in
    /// exponent notation (`1e+30`, `1.5e-9`) outside of that.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.0;
        if value.is_nan() { return write!(f, "NaN"); }
        if value.is_infinite() {
            return write!(f, "{}", if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 { return write!(f, "0"); }
        if value < 0.0 { write!(f, "-")?; }

        // `{:e}` gives the shortest round-tripping digits, as `d.ddde<exp>`
        let scientific = format!("{:e}", value.abs());
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let digits = mantissa.replace('.', "");
        let k = digits.len() as i32;

        // The position of the decimal point relative to the start of the digits
        let n = exponent + 1;

        if k <= n && n <= 21 {
            write!(f, "{}{}", digits, "0".repeat((n - k) as usize))
        } else if 0 < n && n <= 21 {
            let (whole, fraction) = digits.split_at(n as usize);
            write!(f, "{}.{}", whole, fraction)
        } else if -6 < n && n <= 0 {
            write!(f, "0.{}{}", "0".repeat((-n) as usize), digits)
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            let (first, rest) = digits.split_at(1);
            if rest.is_empty() {
                write!(f, "{}e{}{}", first, sign, exponent.abs())
            } else {
                write!(f, "{}.{}e{}{}", first, rest, sign, exponent.abs())
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if !value.is_finite() {
            // JSON has no representation for these
            serializer.serialize_str(&self.to_string())
        } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number literal")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
        Ok(Number::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
        Ok(Number::new(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
        Ok(Number::new(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Number, E> {
        match v {
            "NaN" => Ok(Number::new(f64::NAN)),
            "Infinity" => Ok(Number::new(f64::INFINITY)),
            "-Infinity" => Ok(Number::new(f64::NEG_INFINITY)),
            _ => v.parse::<f64>()
                .map(Number::new)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}
