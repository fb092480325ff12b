//! Numeric formatting for script parameter values
//!
//! The Explain runner that consumes these scripts has historically been fed
//! values rendered by Python's `str()`, and its parser is only known to be
//! tolerant of that exact shape. This module reproduces it: integral values
//! print without a decimal point, ordinary magnitudes print as the shortest
//! round-tripping decimal, and anything below `1e-4` or at `1e16` and above
//! switches to scientific notation with a signed, zero-padded two-digit
//! exponent (`1e-06`, not `1e-6`).

/// Upper magnitude bound for positional notation
const EXP_HIGH: f64 = 1e16;
/// Lower magnitude bound for positional notation
const EXP_LOW: f64 = 1e-4;

/// Formats a parameter value the way the instrument runner expects
pub fn fmt_param(value: f64) -> String
{
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();

    if magnitude >= EXP_LOW && magnitude < EXP_HIGH {
        if value.fract() == 0.0 {
            // within this window the value always fits an i64
            format!("{}", value as i64)
        }
        else {
            format!("{}", value)
        }
    }
    else {
        scientific(value)
    }
}

/// Renders scientific notation with an explicit sign and at least two
/// exponent digits
fn scientific(value: f64) -> String
{
    let raw = format!("{:e}", value);

    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            match exponent.parse::<i32>() {
                Ok(exp) => {
                    let sign = if exp < 0 { '-' } else { '+' };
                    format!("{}e{}{:02}", mantissa, sign, exp.abs())
                }
                Err(_) => raw,
            }
        }
        // `{:e}` always emits an exponent; this arm is unreachable
        None => raw,
    }
}
