//! Plegado: cross-validation fold partitioning in pure Rust.
//!
//! Plegado splits a dataset of `n` indexed samples into `k` disjoint
//! train/test folds, either unconditionally ([`KFold`]) or preserving each
//! class's representation across folds ([`StratifiedKFold`]). Splits are
//! computed once at construction from a seeded generator, so a fixed seed
//! reproduces the exact same folds.
//!
//! The crate hands out index lists only; it never touches the dataset
//! itself. Slicing rows, fitting models, and scoring are the caller's job.
//!
//! # Quick Start
//!
//! ```
//! use plegado::prelude::*;
//!
//! // 3 classes, 4 samples each
//! let labels = vec![0i64, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];
//!
//! let skfold = StratifiedKFold::new(4, &labels, Some(17)).unwrap();
//! assert!(!skfold.is_faulty());
//!
//! for fold in 0..skfold.n_folds() {
//!     let (train, test) = skfold.get_fold(fold).unwrap();
//!     assert_eq!(train.len(), 9);
//!     assert_eq!(test.len(), 3);
//! }
//! ```
//!
//! # Modules
//!
//! - [`folding`]: the [`Fold`] trait and the [`KFold`] / [`StratifiedKFold`] splitters
//! - [`error`]: error types
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod folding;
pub mod prelude;

pub use error::{PlegadoError, Result};
pub use folding::{Fold, KFold, StratifiedKFold};

/// Crate version, for compatibility checks by callers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
