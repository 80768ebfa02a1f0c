use derive_new::new;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Extractor;

/// The attribute that carries the sense in answer files
pub static DEFAULT_ATTRIBUTE: &str = "senseid";

/// Reads the sense from a named attribute of an XML-like tag, such as
/// `<answer instance="line-n.w7_057:1203:" senseid="phone"/>`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Attribute {
    /// The attribute name to read
    pub name: String,
}

impl Default for Attribute {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE.to_string())
    }
}

impl Extractor for Attribute {
    fn token(&self, line: &str) -> Option<String> {
        attributes(line)
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

// A `name=value` pair. Quoted values are consumed whole, so a name inside another
// attribute's value never starts a match.
static ATTRIBUTE_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s<>/='"]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s/>'"]+))"#)
        .expect("valid regex")
});

/// Iterate over the `name=value` pairs of a tag, in order. Names without a value (such as
/// the tag name itself) are passed over.
pub fn attributes<'a>(line: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    ATTRIBUTE_PAIR.captures_iter(line).filter_map(|caps| {
        let name = caps.get(1)?.as_str();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))?
            .as_str();

        Some((name, value))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reads_sense_attribute() {
        let line = "<answer instance=\"a:1:\" senseid=\"product\"/>";

        assert_eq!(Attribute::default().token(line), Some("product".to_string()));
    }

    #[test]
    fn lists_attributes_in_order() {
        let line = "<answer instance=\"line-n.w7_057:1203:\" senseid =\"phone\"/>";

        let found: Vec<_> = attributes(line).collect();

        assert_eq!(
            found,
            vec![("instance", "line-n.w7_057:1203:"), ("senseid", "phone")]
        );
    }

    #[test]
    fn accepts_single_quotes_and_bare_values() {
        let extractor = Attribute::default();

        assert_eq!(
            extractor.token("<answer senseid='phone'/>"),
            Some("phone".to_string())
        );
        assert_eq!(
            extractor.token("<answer senseid = product>"),
            Some("product".to_string())
        );
    }

    #[test]
    fn ignores_the_name_inside_other_values() {
        let line = "<answer instance=\"senseid=phone\" senseid=\"product\"/>";

        assert_eq!(Attribute::default().token(line), Some("product".to_string()));
    }

    #[test]
    fn matches_whole_names_only() {
        let line = "<answer xsenseid=\"phone\"/>";

        assert_eq!(Attribute::default().token(line), None);
    }

    #[test]
    fn empty_or_unterminated_values_yield_nothing() {
        let extractor = Attribute::default();

        assert_eq!(extractor.token("<answer senseid=\"\"/>"), None);
        assert_eq!(extractor.token("<answer senseid=\"phone/>"), None);
        assert_eq!(extractor.token(""), None);
    }

    #[test]
    fn unterminated_quote_does_not_hide_later_attributes() {
        let line = "<answer instance='line-n.w7_057:1203: senseid=\"phone\"/>";

        assert_eq!(Attribute::default().token(line), Some("phone".to_string()));
    }

    #[test]
    fn reads_other_named_attributes() {
        let extractor = Attribute::new("sense".to_string());

        assert_eq!(
            extractor.token("<instance id=\"7\" sense=\"phone\">"),
            Some("phone".to_string())
        );
    }
}
