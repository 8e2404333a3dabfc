//! Fixed-two-decimal display formatting of complex-number pairs.

use log::error;

use crate::calculator::SENTINEL;
use crate::value::Value;

/// Extract the displayable numeric value of a pair element.
///
/// Deliberately more lenient than the arithmetic validator: booleans are
/// accepted and coerced (`true` → 1.0). This asymmetry is intentional and
/// covered by tests; do not align it with `validate`.
fn displayable_element(v: &Value) -> Option<f64> {
    match v {
        Value::I64(x) => Some(*x as f64),
        Value::F64(x) => Some(*x),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Render a complex-number pair as `"{re:.2} + {im:.2}i"` (or with `-` and
/// `|im|` for a negative imaginary part).
///
/// Soft-fails to the [`SENTINEL`] string, with one error record, when the
/// value is not a two-element pair of displayable numbers.
pub fn format_complex(c: &Value) -> String {
    let elems = match c {
        Value::List(xs) if xs.len() == 2 => xs,
        other => {
            error!("cannot format {} as a complex number: not a two-element pair", other);
            return SENTINEL.to_string();
        }
    };
    let (Some(re), Some(im)) = (
        displayable_element(&elems[0]),
        displayable_element(&elems[1]),
    ) else {
        error!("cannot format {}: elements must be integers or floats", c);
        return SENTINEL.to_string();
    };
    if im >= 0.0 {
        format!("{:.2} + {:.2}i", re, im)
    } else {
        format!("{:.2} - {:.2}i", re, im.abs())
    }
}
