//! Point values go on the wire as integers when they are whole (`10`, not
//! `10.0`). Percentages are not point values and keep their float form.

use serde::Serializer;

// Largest magnitude an f64 holds with integer precision.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub(crate) mod option {
    use serde::Serializer;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(points) => super::serialize(points, serializer),
            None => serializer.serialize_none(),
        }
    }
}
