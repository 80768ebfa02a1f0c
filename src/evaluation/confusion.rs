use std::{collections::BTreeMap, fmt::Display};

use crate::senses::Sense;

use super::{check_aligned, EvaluationError};

/// Counts of (gold, predicted) sense pairs. Every pair of known senses has a cell, even
/// when its count is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    counts: BTreeMap<(Sense, Sense), usize>,
}

impl Default for ConfusionMatrix {
    fn default() -> Self {
        let counts = Sense::ALL
            .iter()
            .flat_map(|gold| Sense::ALL.iter().map(move |predicted| ((*gold, *predicted), 0)))
            .collect();

        Self { counts }
    }
}

impl ConfusionMatrix {
    /// Tally position-aligned predicted and gold senses
    pub fn tally(predicted: &[Sense], gold: &[Sense]) -> Result<Self, EvaluationError> {
        check_aligned(predicted, gold)?;

        let mut matrix = Self::default();
        for (predicted, gold) in predicted.iter().zip(gold) {
            matrix.add(*gold, *predicted);
        }

        Ok(matrix)
    }

    /// Record a single instance
    pub fn add(&mut self, gold: Sense, predicted: Sense) {
        *self.counts.entry((gold, predicted)).or_default() += 1;
    }

    /// The number of instances with the given gold and predicted senses
    pub fn count(&self, gold: Sense, predicted: Sense) -> usize {
        self.counts.get(&(gold, predicted)).copied().unwrap_or_default()
    }

    /// Instances of `gold` that were predicted correctly
    pub fn correct(&self, gold: Sense) -> usize {
        self.count(gold, gold)
    }

    /// Instances of `gold` that were predicted as something else
    pub fn errors(&self, gold: Sense) -> usize {
        self.row_total(gold) - self.correct(gold)
    }

    /// Instances whose gold sense is `gold`
    pub fn row_total(&self, gold: Sense) -> usize {
        self.counts
            .iter()
            .filter(|((g, _), _)| *g == gold)
            .map(|(_, count)| count)
            .sum()
    }

    /// Instances on the diagonal
    pub fn total_correct(&self) -> usize {
        Sense::ALL.iter().map(|sense| self.correct(*sense)).sum()
    }

    /// All instances
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Fraction of instances on the diagonal, `None` for an empty matrix
    pub fn accuracy(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.total_correct() as f64 / total as f64),
        }
    }

    /// Iterate over `((gold, predicted), count)` cells, gold-major
    pub fn cells(&self) -> impl Iterator<Item = ((Sense, Sense), usize)> + '_ {
        self.counts.iter().map(|(key, count)| (*key, *count))
    }
}

/// Renders gold senses as rows and predicted senses as columns
impl Display for ConfusionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_width = Sense::ALL
            .iter()
            .map(|sense| sense.as_str().len())
            .max()
            .unwrap_or_default();

        let column_widths: Vec<usize> = Sense::ALL
            .iter()
            .map(|predicted| {
                Sense::ALL
                    .iter()
                    .map(|gold| self.count(*gold, *predicted).to_string().len())
                    .chain([predicted.as_str().len()])
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        write!(f, "{:<label_width$}", "")?;
        for (predicted, width) in Sense::ALL.iter().zip(&column_widths) {
            write!(f, "  {:>width$}", predicted.as_str())?;
        }
        writeln!(f)?;

        for gold in Sense::ALL {
            write!(f, "{:<label_width$}", gold.as_str())?;
            for (predicted, width) in Sense::ALL.iter().zip(&column_widths) {
                write!(f, "  {:>width$}", self.count(gold, *predicted))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
