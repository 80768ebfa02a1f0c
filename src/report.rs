use serde::{Deserialize, Serialize};

use crate::{evaluation::Evaluation, senses::Sense};

/// Format a fraction as a percentage with three decimal places, e.g. `66.667%`
pub fn percent(fraction: f64) -> String {
    format!("{:.3}%", fraction * 100.0)
}

/// Render the plain text console report
pub fn text(evaluation: &Evaluation) -> String {
    format!(
        "\nBaseline accuracy:  {}\n\nMy overall accuracy:  {}\n\nConfusion matrix: \n{}",
        percent(evaluation.baseline),
        percent(evaluation.accuracy),
        evaluation.confusion
    )
}

/// A single confusion matrix cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The gold sense
    pub gold: Sense,

    /// The predicted sense
    pub predicted: Sense,

    /// Number of instances
    pub count: usize,
}

/// Serializable form of an [`Evaluation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Accuracy of always predicting the majority sense, as a fraction
    pub baseline_accuracy: f64,

    /// Accuracy of the predictions, as a fraction
    pub accuracy: f64,

    /// Number of scored instances
    pub total: usize,

    /// Every (gold, predicted) cell, gold-major
    pub confusion: Vec<Cell>,
}

impl From<&Evaluation> for Report {
    fn from(evaluation: &Evaluation) -> Self {
        let confusion = evaluation
            .confusion
            .cells()
            .map(|((gold, predicted), count)| Cell {
                gold,
                predicted,
                count,
            })
            .collect();

        Report {
            baseline_accuracy: evaluation.baseline,
            accuracy: evaluation.accuracy,
            total: evaluation.total(),
            confusion,
        }
    }
}

/// Render the report as pretty-printed JSON
pub fn json(evaluation: &Evaluation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::from(evaluation))
}
