pub mod foods;
pub mod health;
