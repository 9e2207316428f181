//! Comparison driver: every agreement measure for each candidate dataset
//! against a fixed ground truth.

use crate::algorithms::{
    cosine_datasets, jaccard_datasets, kendall_datasets, max_kendall, nmi_datasets,
    overlap_datasets, pearson_datasets, smc_datasets, sorensen_datasets, spearman_datasets,
};
use crate::data::Dataset;
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;

/// Every measure's coefficient for one truth/candidate pair.
///
/// `None` means the measure is not applicable to the shape pairing; it is
/// rendered as a hyphen in the text table and `null` in JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scores {
    pub kendall: Option<f64>,
    pub spearman: Option<f64>,
    pub pearson: Option<f64>,
    pub cosine: Option<f64>,
    pub jaccard: Option<f64>,
    pub smc: Option<f64>,
    pub sorensen: Option<f64>,
    pub overlap: Option<f64>,
    pub nmi: Option<f64>,
}

/// Compute every applicable measure between a truth and one candidate.
///
/// Fails if any applicable measure finds mismatched element sets or empty
/// input; inapplicable shape pairings are `None`, never errors.
pub fn score<T>(truth: &Dataset<T>, candidate: &Dataset<T>) -> Result<Scores>
where
    T: Eq + Hash + Clone + Display,
{
    Ok(Scores {
        kendall: kendall_datasets(truth, candidate)?,
        spearman: spearman_datasets(truth, candidate)?,
        pearson: pearson_datasets(truth, candidate)?,
        cosine: cosine_datasets(truth, candidate)?,
        jaccard: jaccard_datasets(truth, candidate)?,
        smc: smc_datasets(truth, candidate)?,
        sorensen: sorensen_datasets(truth, candidate)?,
        overlap: overlap_datasets(truth, candidate)?,
        nmi: nmi_datasets(truth, candidate)?,
    })
}

/// One candidate's row in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Candidate name, usually the file name.
    pub name: String,
    #[serde(flatten)]
    pub scores: Scores,
}

/// Full evaluation of all candidates against one truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Truth name, usually the file name.
    pub truth_name: String,
    /// Ceiling tau-b imposed by the truth's own ties, when the truth has a
    /// rank shape.
    pub max_kendall: Option<f64>,
    /// Per-candidate scores, in input order.
    pub comparisons: Vec<Comparison>,
}

/// Evaluate every candidate against the truth.
///
/// Candidates are independent, so the loop runs in parallel; output order
/// follows input order.
pub fn evaluate<T>(
    truth_name: &str,
    truth: &Dataset<T>,
    candidates: &[(String, Dataset<T>)],
) -> Result<Report>
where
    T: Eq + Hash + Clone + Display + Sync,
{
    let ceiling = truth
        .to_tied_ranked()
        .map(|tied| max_kendall(&tied))
        .transpose()?;

    let comparisons: Vec<Comparison> = candidates
        .par_iter()
        .map(|(name, candidate)| {
            score(truth, candidate).map(|scores| Comparison {
                name: name.clone(),
                scores,
            })
        })
        .collect::<Result<_>>()?;

    Ok(Report {
        truth_name: truth_name.to_string(),
        max_kendall: ceiling,
        comparisons,
    })
}

const COLUMNS: [&str; 9] = [
    "Kendall", "Spearman", "Pearson", "Cosine", "Jaccard", "SMC", "Dice", "Overlap", "NMI",
];

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>9.4}", v),
        None => format!("{:>9}", "-"),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluating against {}", self.truth_name)?;
        if let Some(ceiling) = self.max_kendall {
            writeln!(f, "Max Kendall tau-b: {:.4}", ceiling)?;
        }
        writeln!(f)?;

        let width = self
            .comparisons
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        write!(f, "{:<width$}", "Name", width = width)?;
        for column in COLUMNS {
            write!(f, " {:>9}", column)?;
        }
        writeln!(f)?;

        for c in &self.comparisons {
            write!(f, "{:<width$}", c.name, width = width)?;
            let s = c.scores;
            for value in [
                s.kendall, s.spearman, s.pearson, s.cosine, s.jaccard, s.smc, s.sorensen,
                s.overlap, s.nmi,
            ] {
                write!(f, " {}", cell(value))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Partition, RankedList, ValueList};
    use std::collections::HashMap;

    fn ranks(elements: &[&str]) -> Dataset<String> {
        Dataset::Ranks(
            RankedList::from_elements(elements.iter().map(|s| s.to_string()).collect())
                .unwrap(),
        )
    }

    fn values(entries: &[(&str, f64)]) -> Dataset<String> {
        let map: HashMap<String, f64> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        Dataset::Values(ValueList::from_map(map).unwrap())
    }

    fn partition(groups: &[&[&str]]) -> Dataset<String> {
        Dataset::Partition(
            Partition::from_groups(
                groups
                    .iter()
                    .map(|g| g.iter().map(|s| s.to_string()).collect())
                    .collect(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_rank_truth_scores_rank_measures_only() {
        let truth = ranks(&["dog", "bear", "cat"]);
        let candidate = ranks(&["cat", "bear", "dog"]);
        let scores = score(&truth, &candidate).unwrap();
        assert!((scores.kendall.unwrap() + 1.0).abs() < 1e-10);
        assert!((scores.spearman.unwrap() + 1.0).abs() < 1e-10);
        assert!(scores.pearson.is_none());
        assert!(scores.jaccard.is_none());
        assert!(scores.nmi.is_none());
    }

    #[test]
    fn test_value_truth_against_partition_not_applicable() {
        let truth = values(&[("cat", 1.0), ("dog", 2.0)]);
        let candidate = partition(&[&["cat", "dog"]]);
        let scores = score(&truth, &candidate).unwrap();
        assert!(scores.kendall.is_none());
        assert!(scores.pearson.is_none());
        assert!(scores.cosine.is_none());
        assert!(scores.jaccard.is_none());
    }

    #[test]
    fn test_evaluate_preserves_candidate_order() {
        let truth = partition(&[&["a", "b"], &["c"]]);
        let candidates = vec![
            ("first".to_string(), partition(&[&["a"], &["b"], &["c"]])),
            ("second".to_string(), partition(&[&["a", "b"], &["c"]])),
        ];
        let report = evaluate("truth", &truth, &candidates).unwrap();
        assert_eq!(report.comparisons.len(), 2);
        assert_eq!(report.comparisons[0].name, "first");
        assert_eq!(report.comparisons[1].name, "second");
        assert!(report.max_kendall.is_none());
        assert!((report.comparisons[1].scores.jaccard.unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_display_uses_hyphen_placeholder() {
        let truth = ranks(&["dog", "bear", "cat"]);
        let candidates = vec![(
            "split.txt".to_string(),
            partition(&[&["dog"], &["bear"], &["cat"]]),
        )];
        let report = evaluate("truth.txt", &truth, &candidates).unwrap();
        let rendered = report.to_string();
        assert!(rendered.contains("split.txt"));
        assert!(rendered.contains('-'));
        assert!(rendered.contains("Max Kendall tau-b: 1.0000"));
    }
}
