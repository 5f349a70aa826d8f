//! Esscher-tilted variates and the series kernel behind them.
//!
//! This crate hosts the numerics of the workspace:
//! - [`hypergeometric`]: the generalized `pFq` series with adaptive truncation
//! - [`hermite`], [`combinatorics`]: derivative tables for normal and logistic laws
//! - variates implementing [`es_core::Variate`]: [`Constant`], [`StandardNormal`],
//!   [`Logistic`], and the location-scale wrapper [`Affine`]
//! - [`AnyVariate`], a closed enum over all of them

pub mod math;
pub mod affine;
pub mod combinatorics;
pub mod constant;
pub mod distributions;
pub mod hermite;
pub mod hypergeometric;
pub mod logistic;
pub mod normal;

pub use affine::Affine;
pub use constant::Constant;
pub use distributions::AnyVariate;
pub use hypergeometric::{Hypergeometric, SeriesSummary};
pub use logistic::Logistic;
pub use normal::StandardNormal;
