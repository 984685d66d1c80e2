pub mod remaining;
pub mod week;
