//! Entropy and information gain over the class column of a dataset view.

use crate::dataset::DatasetView;
use num_traits::{Float, FromPrimitive};

/// Shannon entropy (base 2) of a count vector whose entries sum to `total`.
/// Zero counts contribute nothing.
fn entropy_of_counts<F>(counts: &[usize], total: usize) -> F
where
    F: Float + FromPrimitive,
{
    let total_f = match F::from_usize(total) {
        Some(val) if val > F::zero() => val,
        _ => return F::zero(),
    };

    let mut entropy = F::zero();
    for &count in counts {
        if count == 0 {
            continue; // p = 0 contributes nothing, and log2(0) would be -inf
        }
        let p = F::from_usize(count).unwrap_or_else(F::zero) / total_f;
        entropy = entropy - p * p.log2();
    }
    entropy
}

/// Number of rows per class value index.
fn class_counts(view: &DatasetView<'_>) -> Option<Vec<usize>> {
    let class_len = view.class_attribute()?.len();
    let mut counts = vec![0usize; class_len];
    for class in view.class_values()? {
        counts[class] += 1;
    }
    Some(counts)
}

/// Entropy of the class distribution in `view`.
///
/// Returns `None` when the view is empty or has no designated class column;
/// entropy is undefined in both cases.
pub fn entropy<F>(view: &DatasetView<'_>) -> Option<F>
where
    F: Float + FromPrimitive,
{
    if view.is_empty() {
        return None;
    }
    let counts = class_counts(view)?;
    Some(entropy_of_counts(&counts, view.len()))
}

/// Class entropy remaining after partitioning `view` on `column`.
///
/// Each value of `column` that occurs in the view forms one partition; the
/// result is the size-weighted mean of the partition entropies.
pub fn conditional_entropy<F>(view: &DatasetView<'_>, column: usize) -> Option<F>
where
    F: Float + FromPrimitive,
{
    if view.is_empty() {
        return None;
    }
    let class_column = view.class_column()?;
    let class_len = view.class_attribute()?.len();
    let attribute_len = view.schema().attribute(column)?.len();

    // counts[value][class]
    let mut counts = vec![vec![0usize; class_len]; attribute_len];
    for row in view.rows() {
        let values = row.values();
        counts[values[column]][values[class_column]] += 1;
    }

    let total_f = F::from_usize(view.len())?;
    let mut conditional = F::zero();
    for partition in &counts {
        let size: usize = partition.iter().sum();
        if size == 0 {
            continue; // Value does not occur in this view
        }
        let weight = F::from_usize(size)? / total_f;
        conditional = conditional + weight * entropy_of_counts::<F>(partition, size);
    }
    Some(conditional)
}

/// Entropy reduction obtained by splitting `view` on `column`.
pub fn information_gain<F>(view: &DatasetView<'_>, column: usize) -> Option<F>
where
    F: Float + FromPrimitive,
{
    Some(entropy::<F>(view)? - conditional_entropy::<F>(view, column)?)
}
