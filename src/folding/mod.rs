//! Cross-validation fold partitioning.
//!
//! This module provides two splitters over a dataset of `n` indexed samples:
//! - [`KFold`]: one shuffled permutation sliced into `k` contiguous test windows
//! - [`StratifiedKFold`]: per-class distribution that keeps every class's
//!   representation across folds within one sample
//!
//! Both compute their partition once, at construction, from a seeded
//! generator; every later [`Fold::get_fold`] call is a pure read. Sample
//! indices are opaque identifiers in `[0, n)` and are never dereferenced
//! here — slicing the caller's dataset is the caller's concern.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{PlegadoError, Result};

/// Common capability of the fold splitters: produce a `(train, test)`
/// index pair for a fold.
///
/// The set of implementors is closed — a splitter is selected at
/// construction time and used through this trait (or directly).
///
/// # Examples
///
/// ```
/// use plegado::folding::{Fold, KFold, StratifiedKFold};
///
/// let labels = vec![0i64, 0, 0, 1, 1, 1];
/// let splitters: Vec<Box<dyn Fold>> = vec![
///     Box::new(KFold::new(3, 6, Some(19)).unwrap()),
///     Box::new(StratifiedKFold::new(3, &labels, Some(19)).unwrap()),
/// ];
/// for splitter in &splitters {
///     for fold in 0..splitter.n_folds() {
///         let (train, test) = splitter.get_fold(fold).unwrap();
///         assert_eq!(train.len() + test.len(), 6);
///     }
/// }
/// ```
pub trait Fold {
    /// Number of folds `k` this splitter was configured with.
    fn n_folds(&self) -> usize;

    /// Train/test index pair for fold `fold`.
    ///
    /// # Errors
    ///
    /// Returns [`PlegadoError::FoldIndexOutOfRange`] when `fold >= k`.
    fn get_fold(&self, fold: usize) -> Result<(Vec<usize>, Vec<usize>)>;
}

/// Builds the instance generator: a fixed seed gives full reproducibility,
/// no seed draws from OS entropy. This generator is the sole source of
/// randomness for a splitter and is consumed entirely at construction.
fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn check_config(k: usize, n: usize) -> Result<()> {
    if k < 1 {
        return Err(PlegadoError::invalid_configuration("k", k, ">= 1"));
    }
    if n < 1 {
        return Err(PlegadoError::invalid_configuration("n", n, ">= 1"));
    }
    Ok(())
}

/// K-Fold cross-validation splitter.
///
/// Shuffles `0..n` once at construction and slices the shuffled order into
/// `k` contiguous test windows. Folds `0..k-1` hold exactly `n / k` test
/// samples; the last fold additionally takes the `n % k` remainder, so fold
/// sizes are near-equal rather than perfectly equal.
///
/// # Examples
///
/// ```
/// use plegado::folding::{Fold, KFold};
///
/// let kfold = KFold::new(5, 102, Some(19)).unwrap();
/// let (train, test) = kfold.get_fold(4).unwrap();
/// assert_eq!(test.len(), 22); // 20 + the remainder of 102 / 5
/// assert_eq!(train.len(), 80);
/// ```
#[derive(Debug, Clone)]
pub struct KFold {
    k: usize,
    n: usize,
    indices: Vec<usize>,
}

impl KFold {
    /// Create a K-Fold splitter over `n` samples.
    ///
    /// Pass `Some(seed)` for a reproducible shuffle, `None` to seed from
    /// OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`PlegadoError::InvalidConfiguration`] if `k < 1` or `n < 1`.
    pub fn new(k: usize, n: usize, seed: Option<u64>) -> Result<Self> {
        check_config(k, n)?;
        let mut rng = seeded_rng(seed);
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut rng);
        Ok(Self { k, n, indices })
    }

    /// Total number of samples.
    pub fn n_samples(&self) -> usize {
        self.n
    }
}

impl Fold for KFold {
    fn n_folds(&self) -> usize {
        self.k
    }

    fn get_fold(&self, fold: usize) -> Result<(Vec<usize>, Vec<usize>)> {
        if fold >= self.k {
            return Err(PlegadoError::FoldIndexOutOfRange {
                index: fold,
                k: self.k,
            });
        }
        let test_size = self.n / self.k;
        let start = fold * test_size;
        // The last fold's test window absorbs the n % k remainder.
        let end = if fold == self.k - 1 {
            self.n
        } else {
            start + test_size
        };

        let test = self.indices[start..end].to_vec();
        let mut train = Vec::with_capacity(self.n - (end - start));
        train.extend_from_slice(&self.indices[..start]);
        train.extend_from_slice(&self.indices[end..]);
        Ok((train, test))
    }
}

/// Stratified K-Fold cross-validation splitter.
///
/// Groups sample indices by class label, shuffles within each class, and
/// distributes each class evenly across the `k` folds, so per-class counts
/// in any two folds differ by at most one. A class's `count % k` leftover
/// samples go to that many distinct folds chosen at random.
///
/// A class with fewer samples than folds cannot reach every fold; the
/// instance is then marked *faulty* and one warning line is reported per
/// such class. This is a data-quality signal, not an error — consult
/// [`is_faulty`](StratifiedKFold::is_faulty) to decide how to proceed.
///
/// Classes are processed in ascending label order, which fixes how the
/// generator state is consumed: the same `(k, labels, seed)` always
/// produces the same folds.
///
/// # Examples
///
/// ```
/// use plegado::folding::{Fold, StratifiedKFold};
///
/// // Two balanced classes, 6 samples each.
/// let labels = vec![0i64, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1];
/// let skfold = StratifiedKFold::new(3, &labels, Some(17)).unwrap();
/// assert!(!skfold.is_faulty());
///
/// for fold in 0..skfold.n_folds() {
///     let (_, test) = skfold.get_fold(fold).unwrap();
///     // Each test fold holds 2 samples of each class.
///     assert_eq!(test.iter().filter(|&&i| labels[i] == 0).count(), 2);
///     assert_eq!(test.iter().filter(|&&i| labels[i] == 1).count(), 2);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StratifiedKFold {
    k: usize,
    n: usize,
    partitions: Vec<Vec<usize>>,
    faulty: bool,
    warnings: Vec<String>,
}

impl StratifiedKFold {
    /// Create a stratified splitter from a label sequence, one integer
    /// class id per sample. Warnings about under-represented classes go
    /// to stderr.
    ///
    /// # Errors
    ///
    /// Returns [`PlegadoError::InvalidConfiguration`] if `k < 1` or
    /// `labels` is empty.
    pub fn new(k: usize, labels: &[i64], seed: Option<u64>) -> Result<Self> {
        Self::with_warning_sink(k, labels, seed, |line| eprintln!("{line}"))
    }

    /// Like [`new`](StratifiedKFold::new) but suppresses warning output.
    /// The lines are still recorded and available through
    /// [`warnings`](StratifiedKFold::warnings).
    pub fn quiet(k: usize, labels: &[i64], seed: Option<u64>) -> Result<Self> {
        Self::with_warning_sink(k, labels, seed, |_| {})
    }

    /// Create a stratified splitter from any ordered sequence convertible
    /// to integer labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use plegado::folding::StratifiedKFold;
    ///
    /// let labels: [u8; 6] = [0, 0, 0, 1, 1, 1];
    /// let skfold = StratifiedKFold::from_labels(2, labels, Some(42)).unwrap();
    /// assert_eq!(skfold.n_samples(), 6);
    /// ```
    pub fn from_labels<I>(k: usize, labels: I, seed: Option<u64>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let labels: Vec<i64> = labels.into_iter().map(Into::into).collect();
        Self::new(k, &labels, seed)
    }

    /// Create a stratified splitter routing warning lines into `sink`
    /// instead of stderr. The sink is only invoked during construction.
    ///
    /// # Errors
    ///
    /// Returns [`PlegadoError::InvalidConfiguration`] if `k < 1` or
    /// `labels` is empty.
    pub fn with_warning_sink<F>(
        k: usize,
        labels: &[i64],
        seed: Option<u64>,
        mut sink: F,
    ) -> Result<Self>
    where
        F: FnMut(&str),
    {
        let n = labels.len();
        check_config(k, n)?;
        let mut rng = seeded_rng(seed);

        // Ascending label order; BTreeMap iteration fixes the order in
        // which the generator is consumed below.
        let mut class_indices: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (i, &label) in labels.iter().enumerate() {
            class_indices.entry(label).or_default().push(i);
        }

        let mut partitions: Vec<Vec<usize>> = vec![Vec::new(); k];
        let mut faulty = false;
        let mut warnings = Vec::new();

        for (label, mut members) in class_indices {
            members.shuffle(&mut rng);
            let count = members.len();
            let per_fold = count / k;
            let remainder = count % k;

            if per_fold == 0 {
                let line = format!(
                    "Warning! The number of samples in class {label} ({count}) \
                     is less than the number of folds ({k})."
                );
                sink(&line);
                warnings.push(line);
                faulty = true;
            }

            // Even part: per_fold indices to each fold, in fold order.
            let mut cursor = 0;
            for partition in &mut partitions {
                partition.extend_from_slice(&members[cursor..cursor + per_fold]);
                cursor += per_fold;
            }

            // Leftovers: one extra index to each of `remainder` distinct
            // folds, sampled without replacement. Under-represented
            // classes land here with their full sample count.
            if remainder > 0 {
                let chosen = rand::seq::index::sample(&mut rng, k, remainder);
                for fold in chosen.iter() {
                    partitions[fold].push(members[cursor]);
                    cursor += 1;
                }
            }
        }

        Ok(Self {
            k,
            n,
            partitions,
            faulty,
            warnings,
        })
    }

    /// Total number of samples (the label sequence length).
    pub fn n_samples(&self) -> usize {
        self.n
    }

    /// True iff at least one class had fewer samples than folds, so that
    /// class cannot be represented in every fold.
    pub fn is_faulty(&self) -> bool {
        self.faulty
    }

    /// Warning lines produced during construction, one per
    /// under-represented class, regardless of where they were emitted.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Fold for StratifiedKFold {
    fn n_folds(&self) -> usize {
        self.k
    }

    fn get_fold(&self, fold: usize) -> Result<(Vec<usize>, Vec<usize>)> {
        if fold >= self.k {
            return Err(PlegadoError::FoldIndexOutOfRange {
                index: fold,
                k: self.k,
            });
        }
        let test = self.partitions[fold].clone();
        let mut train = Vec::with_capacity(self.n - test.len());
        for (i, partition) in self.partitions.iter().enumerate() {
            if i != fold {
                train.extend_from_slice(partition);
            }
        }
        Ok((train, test))
    }
}

#[cfg(test)]
mod tests_folding_contract;
