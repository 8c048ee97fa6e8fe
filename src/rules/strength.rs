//! Categorical strength labels and their numeric keys.

pub const LOW_KEY: i32 = 0;
pub const HIGH_KEY: i32 = 1;

/// Map a strength label to its numeric key.
///
/// Labels are matched case-sensitively. Anything other than `HIGH`,
/// including unknown and empty labels, maps to the `LOW` key.
pub fn strength_key(label: &str) -> i32 {
    match label {
        "LOW" => LOW_KEY,
        "HIGH" => HIGH_KEY,
        _ => LOW_KEY,
    }
}
