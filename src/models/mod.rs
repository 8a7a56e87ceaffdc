pub mod raw;
pub mod shift;
pub mod week;
