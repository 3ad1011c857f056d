use uuid::Uuid;

pub const ORDER_NUMBER_LEN: usize = 15;

/// Human-facing order identifier: a random v4 UUID without hyphens,
/// uppercased and truncated to 15 characters.
pub fn new_order_number() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(ORDER_NUMBER_LEN)
        .collect()
}
