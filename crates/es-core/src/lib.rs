//! # es-core
//!
//! Shared foundations for the Esscher workspace:
//! - [`Error`] / [`Result`] used by every fallible operation
//! - [`Real`], the floating-point abstraction variates are generic over
//! - [`Variate`], the derivative-order contract implemented by distributions
//! - [`SeriesConfig`], the convergence policy of the hypergeometric kernel

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;
pub mod special;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use scalar::Real;
pub use traits::Variate;
pub use types::{SeriesConfig, Termination};
