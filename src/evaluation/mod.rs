use derive_new::new;

use crate::senses::Sense;

/// Confusion matrix keyed by (gold, predicted) sense pairs
pub mod confusion;

pub use confusion::ConfusionMatrix;

/// The scores for a single run
#[derive(Debug, Clone, PartialEq, new)]
pub struct Evaluation {
    /// Accuracy of always predicting the majority sense
    pub baseline: f64,

    /// Accuracy of the predictions
    pub accuracy: f64,

    /// Gold by predicted counts
    pub confusion: ConfusionMatrix,
}

impl Evaluation {
    /// Number of scored instances
    pub fn total(&self) -> usize {
        self.confusion.total()
    }
}

/// Score position-aligned predicted and gold senses
pub fn evaluate(
    predicted: &[Sense],
    gold: &[Sense],
    majority: Sense,
) -> Result<Evaluation, EvaluationError> {
    check_aligned(predicted, gold)?;

    let baseline = baseline_accuracy(gold, majority)?;
    let confusion = ConfusionMatrix::tally(predicted, gold)?;
    let accuracy = accuracy(predicted, gold)?;

    // The diagonal and the positional comparison count the same instances
    debug_assert_eq!(confusion.accuracy(), Some(accuracy));

    log::debug!(
        "Scored {} instances: baseline {:.5}, accuracy {:.5}",
        gold.len(),
        baseline,
        accuracy
    );

    Ok(Evaluation::new(baseline, accuracy, confusion))
}

/// Accuracy of a classifier that always predicts `majority`. Only the gold senses matter.
pub fn baseline_accuracy(gold: &[Sense], majority: Sense) -> Result<f64, EvaluationError> {
    if gold.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let hits = gold.iter().filter(|sense| **sense == majority).count();

    Ok(hits as f64 / gold.len() as f64)
}

/// Fraction of positions where the prediction matches the gold sense
pub fn accuracy(predicted: &[Sense], gold: &[Sense]) -> Result<f64, EvaluationError> {
    check_aligned(predicted, gold)?;

    let hits = predicted
        .iter()
        .zip(gold)
        .filter(|(predicted, gold)| predicted == gold)
        .count();

    Ok(hits as f64 / gold.len() as f64)
}

pub(crate) fn check_aligned(predicted: &[Sense], gold: &[Sense]) -> Result<(), EvaluationError> {
    if predicted.len() != gold.len() {
        return Err(EvaluationError::LengthMismatch {
            predicted: predicted.len(),
            gold: gold.len(),
        });
    }

    if gold.is_empty() {
        return Err(EvaluationError::Empty);
    }

    Ok(())
}

/// Evaluation Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// The two sense lists do not line up
    #[error("length mismatch: {predicted} predicted senses but {gold} gold senses")]
    LengthMismatch {
        /// Number of predicted senses
        predicted: usize,

        /// Number of gold senses
        gold: usize,
    },

    /// There is nothing to score
    #[error("no instances to score")]
    Empty,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::senses::Sense::{Phone, Product};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn scores_a_mixed_run() {
        let gold = [Product, Product, Phone];
        let predicted = [Product, Phone, Phone];

        let evaluation = evaluate(&predicted, &gold, Sense::MAJORITY).unwrap();

        assert_close(evaluation.baseline, 2.0 / 3.0);
        assert_close(evaluation.accuracy, 2.0 / 3.0);
        assert_eq!(evaluation.confusion.correct(Product), 1);
        assert_eq!(evaluation.confusion.errors(Product), 1);
        assert_eq!(evaluation.confusion.correct(Phone), 1);
        assert_eq!(evaluation.confusion.errors(Phone), 0);
    }

    #[test]
    fn scores_a_run_that_is_always_wrong() {
        let gold = [Phone, Phone];
        let predicted = [Product, Product];

        let evaluation = evaluate(&predicted, &gold, Sense::MAJORITY).unwrap();

        assert_eq!(evaluation.baseline, 0.0);
        assert_eq!(evaluation.accuracy, 0.0);
        assert_eq!(evaluation.confusion.count(Phone, Product), 2);
        assert_eq!(evaluation.confusion.total_correct(), 0);
        assert_eq!(evaluation.confusion.errors(Product), 0);
    }

    #[test]
    fn perfect_predictions_score_one() {
        let gold = [Phone, Product, Product, Phone, Product];

        let evaluation = evaluate(&gold, &gold, Sense::MAJORITY).unwrap();

        assert_eq!(evaluation.accuracy, 1.0);
        assert_close(evaluation.baseline, 0.6);
    }

    #[test]
    fn counts_cover_every_instance() {
        let gold = [Product, Phone, Phone, Product, Phone, Product, Product];
        let predicted = [Phone, Phone, Product, Product, Phone, Phone, Product];

        let evaluation = evaluate(&predicted, &gold, Sense::MAJORITY).unwrap();
        let confusion = &evaluation.confusion;

        let sum: usize = Sense::ALL
            .iter()
            .map(|sense| confusion.correct(*sense) + confusion.errors(*sense))
            .sum();

        assert_eq!(sum, gold.len());
        assert_eq!(evaluation.total(), gold.len());
        assert_close(evaluation.accuracy, accuracy(&predicted, &gold).unwrap());
    }

    #[test]
    fn baseline_ignores_predictions() {
        let gold = [Product, Phone, Phone, Product];
        let mut predicted = vec![Product, Product, Phone, Phone];

        let before = evaluate(&predicted, &gold, Sense::MAJORITY).unwrap().baseline;
        predicted.reverse();
        let after = evaluate(&predicted, &gold, Sense::MAJORITY).unwrap().baseline;

        assert_eq!(before, after);
        assert_eq!(before, 0.5);
    }

    #[test]
    fn baseline_follows_the_majority_sense() {
        let gold = [Phone, Phone, Product];

        assert_close(baseline_accuracy(&gold, Phone).unwrap(), 2.0 / 3.0);
        assert_close(baseline_accuracy(&gold, Product).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = evaluate(&[Product, Phone], &[Product], Sense::MAJORITY).unwrap_err();

        assert_eq!(
            err,
            EvaluationError::LengthMismatch {
                predicted: 2,
                gold: 1,
            }
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(
            evaluate(&[], &[], Sense::MAJORITY).unwrap_err(),
            EvaluationError::Empty
        );
        assert_eq!(
            baseline_accuracy(&[], Sense::MAJORITY).unwrap_err(),
            EvaluationError::Empty
        );
    }
}
