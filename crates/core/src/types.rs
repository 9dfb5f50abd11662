/// Food identifiers are server-assigned integers.
pub type FoodId = i64;
