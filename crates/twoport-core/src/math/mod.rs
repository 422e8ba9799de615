//! Mathematical helpers: parameter transforms, linear algebra, dB conversions.

pub mod conversions;
pub mod linalg;
pub mod transforms;

pub use conversions::*;
pub use transforms::*;
