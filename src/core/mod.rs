pub mod duration;
pub mod estimator;
pub mod lattice;
pub mod logic;
pub mod normalize;
pub mod session;
pub mod weekly;
