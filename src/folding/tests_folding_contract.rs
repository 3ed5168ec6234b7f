// =========================================================================
// FALSIFY-KF / FALSIFY-SKF: fold partitioning contract (plegado folding)
//
// Each test names the claim it tries to falsify. The contract is the
// partition algebra: per-fold disjointness, full coverage across folds,
// per-class balance within one sample, and seed-reproducibility.
//
// References:
//   - Stone (1974) "Cross-Validatory Choice and Assessment of Predictions"
//   - Kohavi (1995) "A Study of Cross-Validation and Bootstrap for
//     Accuracy Estimation and Model Selection"
// =========================================================================

use super::*;

/// FALSIFY-KF-001: K-Fold answers every fold index below k and no more
#[test]
fn falsify_kf_001_fold_index_domain() {
    let kfold = KFold::new(5, 100, Some(19)).unwrap();
    for fold in 0..5 {
        assert!(
            kfold.get_fold(fold).is_ok(),
            "FALSIFIED KF-001: fold {fold} rejected"
        );
    }
    assert!(
        kfold.get_fold(5).is_err(),
        "FALSIFIED KF-001: fold 5 accepted with k=5"
    );
}

/// FALSIFY-KF-002: every sample appears in exactly one test fold
#[test]
fn falsify_kf_002_every_sample_in_one_test_fold() {
    let kfold = KFold::new(5, 20, Some(19)).unwrap();

    let mut test_counts = vec![0usize; 20];
    for fold in 0..5 {
        let (_train, test) = kfold.get_fold(fold).unwrap();
        for &idx in &test {
            test_counts[idx] += 1;
        }
    }

    for (i, &count) in test_counts.iter().enumerate() {
        assert_eq!(
            count, 1,
            "FALSIFIED KF-002: sample {i} appeared in {count} test folds (expected 1)"
        );
    }
}

/// FALSIFY-KF-003: train + test cover all samples per fold, even when
/// n is not divisible by k
#[test]
fn falsify_kf_003_train_test_cover_all() {
    let n = 17;
    let kfold = KFold::new(4, n, Some(7)).unwrap();

    for fold in 0..4 {
        let (train, test) = kfold.get_fold(fold).unwrap();
        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        all.dedup();

        assert_eq!(
            all.len(),
            n,
            "FALSIFIED KF-003: fold {fold} covers {} samples, expected {n}",
            all.len()
        );
    }
}

/// FALSIFY-KF-004: the remainder enlarges the last fold only
#[test]
fn falsify_kf_004_remainder_policy() {
    let kfold = KFold::new(5, 103, Some(11)).unwrap();
    for fold in 0..4 {
        let (_, test) = kfold.get_fold(fold).unwrap();
        assert_eq!(
            test.len(),
            20,
            "FALSIFIED KF-004: fold {fold} test size {} != 20",
            test.len()
        );
    }
    let (_, last) = kfold.get_fold(4).unwrap();
    assert_eq!(
        last.len(),
        23,
        "FALSIFIED KF-004: last fold test size {} != 23",
        last.len()
    );
}

/// FALSIFY-SKF-001: stratified folds keep per-class counts within one
#[test]
fn falsify_skf_001_per_class_balance() {
    let mut labels = vec![0i64; 19];
    labels.extend(vec![1i64; 8]);
    labels.extend(vec![2i64; 13]);
    let skfold = StratifiedKFold::quiet(5, &labels, Some(17)).unwrap();

    let mut counts = vec![std::collections::HashMap::<i64, usize>::new(); 5];
    for fold in 0..5 {
        let (_, test) = skfold.get_fold(fold).unwrap();
        for &idx in &test {
            *counts[fold].entry(labels[idx]).or_default() += 1;
        }
    }
    for class in [0i64, 1, 2] {
        for i in 0..5 {
            for j in 0..5 {
                let a = counts[i].get(&class).copied().unwrap_or(0);
                let b = counts[j].get(&class).copied().unwrap_or(0);
                assert!(
                    a.abs_diff(b) <= 1,
                    "FALSIFIED SKF-001: class {class} counts {a} vs {b} in folds {i}/{j}"
                );
            }
        }
    }
}

/// FALSIFY-SKF-002: identical (k, labels, seed) means identical folds
#[test]
fn falsify_skf_002_seed_reproducibility() {
    let mut labels = vec![0i64; 12];
    labels.extend(vec![1i64; 9]);
    labels.extend(vec![2i64; 10]);

    let a = StratifiedKFold::quiet(4, &labels, Some(99)).unwrap();
    let b = StratifiedKFold::quiet(4, &labels, Some(99)).unwrap();
    for fold in 0..4 {
        assert_eq!(
            a.get_fold(fold).unwrap(),
            b.get_fold(fold).unwrap(),
            "FALSIFIED SKF-002: fold {fold} differs under identical seed"
        );
    }
}

/// FALSIFY-SKF-003: a class smaller than k marks the instance faulty,
/// a partition with all classes >= k does not
#[test]
fn falsify_skf_003_faulty_detection() {
    let healthy = StratifiedKFold::quiet(3, &[0i64, 0, 0, 1, 1, 1], Some(1)).unwrap();
    assert!(
        !healthy.is_faulty(),
        "FALSIFIED SKF-003: healthy instance marked faulty"
    );

    let faulty = StratifiedKFold::quiet(4, &[0i64, 0, 0, 1, 1, 1, 1], Some(1)).unwrap();
    assert!(
        faulty.is_faulty(),
        "FALSIFIED SKF-003: class of 3 with k=4 not flagged"
    );
}

mod folding_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-KF-005-prop: test folds partition 0..n for random k, n, seed
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn falsify_kf_005_prop_partition(
            k in 1..=10usize,
            n in 1..=60usize,
            seed in 0..1000u64,
        ) {
            let k = k.min(n);
            let kfold = KFold::new(k, n, Some(seed)).unwrap();

            let mut test_counts = vec![0usize; n];
            for fold in 0..k {
                let (train, test) = kfold.get_fold(fold).unwrap();
                prop_assert_eq!(train.len() + test.len(), n);
                for &idx in &test {
                    test_counts[idx] += 1;
                }
            }
            for (i, &count) in test_counts.iter().enumerate() {
                prop_assert_eq!(
                    count, 1,
                    "FALSIFIED KF-005-prop: sample {} appeared {} times",
                    i, count
                );
            }
        }
    }

    /// FALSIFY-SKF-004-prop: stratified test folds partition 0..n and stay
    /// balanced per class, for random class sizes and seeds
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn falsify_skf_004_prop_partition_and_balance(
            sizes in prop::collection::vec(1..=15usize, 1..=4),
            k in 2..=5usize,
            seed in 0..1000u64,
        ) {
            let mut labels = Vec::new();
            for (class, &size) in sizes.iter().enumerate() {
                labels.extend(std::iter::repeat(class as i64).take(size));
            }
            let n = labels.len();
            let skfold = StratifiedKFold::quiet(k, &labels, Some(seed)).unwrap();

            let mut test_counts = vec![0usize; n];
            let mut class_counts = vec![vec![0usize; sizes.len()]; k];
            for fold in 0..k {
                let (_, test) = skfold.get_fold(fold).unwrap();
                for &idx in &test {
                    test_counts[idx] += 1;
                    class_counts[fold][labels[idx] as usize] += 1;
                }
            }
            for &count in &test_counts {
                prop_assert_eq!(count, 1);
            }
            for class in 0..sizes.len() {
                for i in 0..k {
                    for j in 0..k {
                        prop_assert!(
                            class_counts[i][class].abs_diff(class_counts[j][class]) <= 1,
                            "FALSIFIED SKF-004-prop: class {} unbalanced ({} vs {})",
                            class, class_counts[i][class], class_counts[j][class]
                        );
                    }
                }
            }
            prop_assert_eq!(
                skfold.is_faulty(),
                sizes.iter().any(|&s| s < k),
                "FALSIFIED SKF-004-prop: faulty flag disagrees with class sizes"
            );
        }
    }
}
