use crate::senses::Sense;

/// Attribute-based extraction from XML-like answer tags
pub mod attribute;

/// Legacy extraction that takes the last token of each cleaned line
pub mod last_token;

pub use attribute::Attribute;
pub use last_token::LastToken;

/// A strategy for pulling the raw sense token out of a single annotation line
pub trait Extractor {
    /// Return the sense token for the line, or `None` if the line carries none
    fn token(&self, line: &str) -> Option<String>;
}

impl<E: Extractor + ?Sized> Extractor for Box<E> {
    fn token(&self, line: &str) -> Option<String> {
        (**self).token(line)
    }
}

/// Convert the contents of an annotation file into an ordered list of senses, one per
/// non-blank line.
///
/// Blank lines are skipped. Any other line that fails to produce a known sense aborts the
/// whole extraction, so the predicted and gold lists never drift out of alignment.
pub fn extract_senses<E: Extractor + ?Sized>(
    content: &str,
    extractor: &E,
) -> Result<Vec<Sense>, ExtractionError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let line_number = index + 1;

            let token = extractor
                .token(line)
                .ok_or_else(|| ExtractionError::Malformed {
                    line: line_number,
                    text: line.to_string(),
                })?;

            Sense::try_from(token.as_str()).map_err(|_| ExtractionError::UnknownSense {
                line: line_number,
                value: token,
            })
        })
        .collect()
}

/// Extraction Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// The line did not yield a sense token
    #[error("line {line}: no sense label found in {text:?}")]
    Malformed {
        /// The 1-based line number
        line: usize,

        /// The offending line
        text: String,
    },

    /// The line yielded a token outside the known senses
    #[error("line {line}: unknown sense {value:?}")]
    UnknownSense {
        /// The 1-based line number
        line: usize,

        /// The token that was found
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ANSWERS: &str = "\
<answer instance=\"line-n.w8_059:8174:\" senseid=\"phone\"/>
<answer instance=\"line-n.w7_098:12684:\" senseid=\"product\"/>
<answer instance=\"line-n.w8_106:13309:\" senseid =\"phone\"/>
";

    #[test]
    fn extracts_in_line_order() {
        let senses = extract_senses(ANSWERS, &Attribute::default()).unwrap();

        assert_eq!(senses, vec![Sense::Phone, Sense::Product, Sense::Phone]);
    }

    #[test]
    fn both_strategies_agree_on_well_formed_input() {
        let by_attribute = extract_senses(ANSWERS, &Attribute::default()).unwrap();
        let by_token = extract_senses(ANSWERS, &LastToken).unwrap();

        assert_eq!(by_attribute, by_token);
    }

    #[test]
    fn skips_blank_lines() {
        let content = format!("\n  \n{ANSWERS}\n\n");

        let senses = extract_senses(&content, &Attribute::default()).unwrap();

        assert_eq!(senses.len(), 3);
    }

    #[test]
    fn malformed_line_is_fatal() {
        let content = "<answer senseid=\"phone\"/>\n\"//>\n";

        let err = extract_senses(content, &LastToken).unwrap_err();

        assert_eq!(
            err,
            ExtractionError::Malformed {
                line: 2,
                text: "\"//>".to_string(),
            }
        );
    }

    #[test]
    fn missing_attribute_is_fatal() {
        let content = "<answer instance=\"a:1:\"/>";

        let err = extract_senses(content, &Attribute::default()).unwrap_err();

        assert!(matches!(err, ExtractionError::Malformed { line: 1, .. }));
    }

    #[test]
    fn unknown_sense_reports_line() {
        let content = "<answer senseid=\"phone\"/>\n<answer senseid=\"cord\"/>";

        let err = extract_senses(content, &Attribute::default()).unwrap_err();

        assert_eq!(
            err,
            ExtractionError::UnknownSense {
                line: 2,
                value: "cord".to_string(),
            }
        );
    }

    #[test]
    fn works_through_a_boxed_extractor() {
        let extractor: Box<dyn Extractor> = Box::new(LastToken);

        let senses = extract_senses("<answer senseid=\"product\"/>", &extractor).unwrap();

        assert_eq!(senses, vec![Sense::Product]);
    }
}
