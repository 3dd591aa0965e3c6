//! Random forest classifier
//!
//! Bagged CART trees over dense feature vectors: Gini impurity splits,
//! bootstrap sampling, sqrt-feature subsampling at every node, majority
//! vote across trees with ties resolved toward the lowest label index.
//! Training is fully seeded so a fixed corpus always yields the same model.

use mailsift_domain::{MailsiftError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Forest training parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestParams {
    pub trees: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self { trees: 200, max_depth: None, min_samples_split: 2, seed: 42 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Node {
    Leaf { label: usize },
    Split { feature: usize, threshold: f64, left: usize, right: usize },
}

/// Single CART tree, stored as a flat node arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn predict(&self, sample: &[f64]) -> usize {
        let mut at = 0;
        loop {
            match self.nodes[at] {
                Node::Leaf { label } => return label,
                Node::Split { feature, threshold, left, right } => {
                    at = if sample.get(feature).copied().unwrap_or(0.0) <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Shared training context for one tree.
struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    labels: &'a [usize],
    n_labels: usize,
    params: &'a ForestParams,
}

impl TreeBuilder<'_> {
    fn fit(&self, indices: &[usize], rng: &mut StdRng) -> DecisionTree {
        let mut tree = DecisionTree { nodes: Vec::new() };
        self.grow(&mut tree, indices, 0, rng);
        tree
    }

    fn grow(
        &self,
        tree: &mut DecisionTree,
        indices: &[usize],
        depth: usize,
        rng: &mut StdRng,
    ) -> usize {
        let depth_reached = self.params.max_depth.is_some_and(|limit| depth >= limit);
        if depth_reached
            || indices.len() < self.params.min_samples_split
            || self.is_pure(indices)
        {
            return self.push_leaf(tree, indices);
        }

        let Some((feature, threshold)) = self.best_split(indices, rng) else {
            return self.push_leaf(tree, indices);
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) =
            indices.iter().partition(|&&i| self.features[i][feature] <= threshold);
        if left_idx.is_empty() || right_idx.is_empty() {
            return self.push_leaf(tree, indices);
        }

        // Reserve the split slot before recursing so child indices are known.
        let node = tree.nodes.len();
        tree.nodes.push(Node::Split { feature, threshold, left: 0, right: 0 });
        let left = self.grow(tree, &left_idx, depth + 1, rng);
        let right = self.grow(tree, &right_idx, depth + 1, rng);
        tree.nodes[node] = Node::Split { feature, threshold, left, right };
        node
    }

    fn push_leaf(&self, tree: &mut DecisionTree, indices: &[usize]) -> usize {
        let label = self.majority_label(indices);
        tree.nodes.push(Node::Leaf { label });
        tree.nodes.len() - 1
    }

    fn is_pure(&self, indices: &[usize]) -> bool {
        indices.windows(2).all(|w| self.labels[w[0]] == self.labels[w[1]])
    }

    /// Majority class among `indices`; ties resolve to the lowest label.
    fn majority_label(&self, indices: &[usize]) -> usize {
        let mut counts = vec![0usize; self.n_labels];
        for &i in indices {
            counts[self.labels[i]] += 1;
        }
        argmax(&counts)
    }

    /// Find the best Gini split over a sqrt-sized random feature subsample.
    ///
    /// Returns `None` when no candidate feature separates the samples.
    fn best_split(&self, indices: &[usize], rng: &mut StdRng) -> Option<(usize, f64)> {
        let n_features = self.features.first().map(Vec::len).unwrap_or(0);
        if n_features == 0 {
            return None;
        }
        let sample_size = ((n_features as f64).sqrt().floor() as usize).clamp(1, n_features);
        let candidates = rand::seq::index::sample(rng, n_features, sample_size);

        let mut best: Option<(usize, f64, f64)> = None;
        let total = indices.len();

        for feature in candidates {
            // Sort the node's samples by this feature and sweep the
            // thresholds between distinct adjacent values, updating class
            // counts incrementally.
            let mut ordered: Vec<(f64, usize)> =
                indices.iter().map(|&i| (self.features[i][feature], self.labels[i])).collect();
            ordered.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            let mut left_counts = vec![0usize; self.n_labels];
            let mut right_counts = vec![0usize; self.n_labels];
            for &(_, label) in &ordered {
                right_counts[label] += 1;
            }

            for split_at in 1..total {
                let (value, label) = ordered[split_at - 1];
                left_counts[label] += 1;
                right_counts[label] -= 1;

                let next_value = ordered[split_at].0;
                if next_value <= value {
                    continue;
                }

                let weighted = (split_at as f64 * gini(&left_counts, split_at)
                    + (total - split_at) as f64 * gini(&right_counts, total - split_at))
                    / total as f64;
                if best.is_none_or(|(_, _, score)| weighted < score) {
                    best = Some((feature, (value + next_value) / 2.0, weighted));
                }
            }
        }

        best.map(|(feature, threshold, _)| (feature, threshold))
    }
}

/// Bagged ensemble of [`DecisionTree`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_labels: usize,
}

impl RandomForest {
    /// Train a forest on `features`/`labels` (label values `< n_labels`).
    ///
    /// # Errors
    /// Returns `MailsiftError::Training` for an empty or inconsistent
    /// training set.
    pub fn fit(
        features: &[Vec<f64>],
        labels: &[usize],
        n_labels: usize,
        params: &ForestParams,
    ) -> Result<Self> {
        if features.is_empty() || n_labels == 0 {
            return Err(MailsiftError::Training("empty training set".to_string()));
        }
        if features.len() != labels.len() {
            return Err(MailsiftError::Training(format!(
                "feature/label length mismatch: {} vs {}",
                features.len(),
                labels.len()
            )));
        }

        let builder = TreeBuilder { features, labels, n_labels, params };
        let n = features.len();
        let mut trees = Vec::with_capacity(params.trees);
        for t in 0..params.trees {
            // One seeded stream per tree keeps the ensemble reproducible
            // independent of construction order.
            let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(t as u64));
            let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            trees.push(builder.fit(&bootstrap, &mut rng));
        }

        Ok(Self { trees, n_labels })
    }

    /// Majority vote across trees; ties resolve to the lowest label index.
    pub fn predict(&self, sample: &[f64]) -> usize {
        let mut votes = vec![0usize; self.n_labels];
        for tree in &self.trees {
            let label = tree.predict(sample);
            if label < self.n_labels {
                votes[label] += 1;
            }
        }
        argmax(&votes)
    }

    pub fn n_labels(&self) -> usize {
        self.n_labels
    }
}

/// Index of the largest count; the first (lowest) index wins ties.
fn argmax(counts: &[usize]) -> usize {
    let mut best = 0;
    for (index, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = index;
        }
    }
    best
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total as f64;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two well-separated clusters in one dimension.
    fn clustered() -> (Vec<Vec<f64>>, Vec<usize>) {
        let features = vec![
            vec![0.1, 0.0],
            vec![0.2, 0.1],
            vec![0.15, 0.05],
            vec![0.9, 1.0],
            vec![0.85, 0.9],
            vec![0.95, 0.95],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];
        (features, labels)
    }

    #[test]
    fn learns_a_separable_problem() {
        let (features, labels) = clustered();
        let params = ForestParams { trees: 25, ..ForestParams::default() };
        let forest = RandomForest::fit(&features, &labels, 2, &params).unwrap();

        assert_eq!(forest.predict(&[0.12, 0.02]), 0);
        assert_eq!(forest.predict(&[0.92, 0.97]), 1);
    }

    #[test]
    fn training_is_reproducible_for_a_fixed_seed() {
        let (features, labels) = clustered();
        let params = ForestParams { trees: 10, ..ForestParams::default() };
        let a = RandomForest::fit(&features, &labels, 2, &params).unwrap();
        let b = RandomForest::fit(&features, &labels, 2, &params).unwrap();

        let probe = [0.5, 0.4];
        assert_eq!(a.predict(&probe), b.predict(&probe));
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let err = RandomForest::fit(&[], &[], 2, &ForestParams::default()).unwrap_err();
        assert!(matches!(err, MailsiftError::Training(_)));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err =
            RandomForest::fit(&[vec![1.0]], &[0, 1], 2, &ForestParams::default()).unwrap_err();
        assert!(matches!(err, MailsiftError::Training(_)));
    }

    #[test]
    fn single_class_always_predicts_that_class() {
        let features = vec![vec![0.1], vec![0.5], vec![0.9]];
        let labels = vec![1, 1, 1];
        let params = ForestParams { trees: 5, ..ForestParams::default() };
        let forest = RandomForest::fit(&features, &labels, 2, &params).unwrap();
        assert_eq!(forest.predict(&[0.3]), 1);
    }

    #[test]
    fn vote_tie_resolves_to_lowest_label() {
        // No trees at all: zero votes everywhere is a full tie.
        let forest = RandomForest { trees: Vec::new(), n_labels: 3 };
        assert_eq!(forest.predict(&[0.0]), 0);
    }

    #[test]
    fn max_depth_one_still_produces_a_model() {
        let (features, labels) = clustered();
        let params = ForestParams { trees: 5, max_depth: Some(1), ..ForestParams::default() };
        let forest = RandomForest::fit(&features, &labels, 2, &params).unwrap();
        let label = forest.predict(&[0.1, 0.0]);
        assert!(label < 2);
    }

    #[test]
    fn serde_round_trip_preserves_predictions() {
        let (features, labels) = clustered();
        let params = ForestParams { trees: 8, ..ForestParams::default() };
        let forest = RandomForest::fit(&features, &labels, 2, &params).unwrap();

        let json = serde_json::to_string(&forest).unwrap();
        let restored: RandomForest = serde_json::from_str(&json).unwrap();
        for probe in [[0.1, 0.0], [0.9, 1.0], [0.5, 0.5]] {
            assert_eq!(forest.predict(&probe), restored.predict(&probe));
        }
    }
}
