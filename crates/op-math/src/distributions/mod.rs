//! Probability distributions.
//!
//! Only the standard normal is needed by the pricing engines; its CDF is
//! evaluated through `statrs`'s complementary error function.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
