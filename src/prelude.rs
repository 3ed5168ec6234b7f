//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use plegado::prelude::*;
//! ```

pub use crate::error::{PlegadoError, Result};
pub use crate::folding::{Fold, KFold, StratifiedKFold};
