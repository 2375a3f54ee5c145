//! Decoding extractor output.
//!
//! The text-analysis collaborator answers with a `ValuesComparisons`
//! document: a list of comparisons, each naming two values (with whatever
//! description the model echoed back), the entry date, a quote and a reason.

use serde::{Deserialize, Serialize};

use crate::error::{DwellResult, ValidationError};
use crate::judgment::Judgment;
use crate::value::{RokeachValue, ValueName};

/// One comparison as emitted by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesComparison {
    /// The value the entry demonstrates to matter more.
    pub superior: RokeachValue,

    /// The value the entry demonstrates to matter less.
    pub inferior: RokeachValue,

    /// Relevant date of the journal entry.
    pub date: String,

    /// Journal entry or thread extract supporting the comparison.
    #[serde(default, rename = "ref")]
    pub reference: String,

    /// Summary of the comparison the evidence supports.
    pub reason: String,
}

impl From<ValuesComparison> for Judgment {
    fn from(c: ValuesComparison) -> Self {
        let judgment = Judgment::new(c.superior.name, c.inferior.name, c.reason, c.date);
        if c.reference.trim().is_empty() {
            judgment
        } else {
            judgment.with_reference(c.reference)
        }
    }
}

/// Envelope of an extractor answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesComparisons {
    /// Comparisons justified by the analyzed content.
    #[serde(default)]
    pub values: Vec<ValuesComparison>,
}

impl ValuesComparisons {
    /// Converts every comparison into a judgment, keeping order.
    #[must_use]
    pub fn into_judgments(self) -> Vec<Judgment> {
        self.values.into_iter().map(Judgment::from).collect()
    }
}

// Wire shape of an extractor answer. Value names stay strings here so an
// unknown name surfaces as `ValidationError::UnknownValue` rather than as a
// decode failure.
#[derive(Deserialize)]
struct WireComparisons {
    #[serde(default)]
    values: Vec<WireComparison>,
}

#[derive(Deserialize)]
struct WireComparison {
    superior: WireValue,
    inferior: WireValue,
    date: String,
    #[serde(default, rename = "ref")]
    reference: String,
    reason: String,
}

#[derive(Deserialize)]
struct WireValue {
    name: String,
}

impl TryFrom<WireValue> for RokeachValue {
    type Error = ValidationError;

    fn try_from(wire: WireValue) -> Result<Self, Self::Error> {
        Ok(Self::new(wire.name.parse::<ValueName>()?))
    }
}

impl TryFrom<WireComparison> for ValuesComparison {
    type Error = ValidationError;

    fn try_from(wire: WireComparison) -> Result<Self, Self::Error> {
        Ok(Self {
            superior: wire.superior.try_into()?,
            inferior: wire.inferior.try_into()?,
            date: wire.date,
            reference: wire.reference,
            reason: wire.reason,
        })
    }
}

/// Parses an extractor answer into judgments.
///
/// Fails with [`DwellError::Serialization`](crate::error::DwellError) on
/// malformed JSON, and with [`ValidationError::UnknownValue`] on a value
/// name outside the catalog.
pub fn parse_comparisons(json: &str) -> DwellResult<Vec<Judgment>> {
    let wire: WireComparisons = serde_json::from_str(json)?;
    let values = wire
        .values
        .into_iter()
        .map(ValuesComparison::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ValuesComparisons { values }.into_judgments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DwellError;

    #[test]
    fn test_parse_comparisons() {
        let json = r#"{
            "values": [
                {
                    "superior": {"name": "HONESTY", "desc": "whatever"},
                    "inferior": {"name": "Politeness", "desc": ""},
                    "date": "2024-04-02",
                    "ref": "I told her the truth even though it was awkward",
                    "reason": "chose truthfulness over smoothing things over"
                },
                {
                    "superior": {"name": "FAMILY_SECURITY"},
                    "inferior": {"name": "AMBITION"},
                    "date": "2024-04-03",
                    "reason": "declined the promotion"
                }
            ]
        }"#;

        let judgments = parse_comparisons(json).unwrap();
        assert_eq!(judgments.len(), 2);
        assert_eq!(judgments[0].edge(), (ValueName::Honesty, ValueName::Politeness));
        assert_eq!(
            judgments[0].reference.as_deref(),
            Some("I told her the truth even though it was awkward")
        );
        assert_eq!(judgments[1].edge(), (ValueName::FamilySecurity, ValueName::Ambition));
        assert_eq!(judgments[1].reference, None);
    }

    #[test]
    fn test_unknown_value_rejected() {
        let json = r#"{"values": [{
            "superior": {"name": "KINDNESS"},
            "inferior": {"name": "LOGIC"},
            "date": "2024-04-02",
            "reason": "r"
        }]}"#;
        let err = parse_comparisons(json).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            DwellError::Validation(ValidationError::UnknownValue { ref name }) if name == "KINDNESS"
        ));
    }

    #[test]
    fn test_unknown_inferior_rejected() {
        let json = r#"{"values": [{
            "superior": {"name": "LOGIC"},
            "inferior": {"name": "Greed"},
            "date": "2024-04-02",
            "reason": "r"
        }]}"#;
        match parse_comparisons(json) {
            Err(DwellError::Validation(ValidationError::UnknownValue { name })) => {
                assert_eq!(name, "Greed");
            }
            other => panic!("expected unknown value, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_is_serialization_error() {
        let json = r#"{"values": [{"superior": {"name": "LOGIC"}, "date": "2024-04-02", "reason": "r"}]}"#;
        assert!(parse_comparisons(json).unwrap_err().is_serialization());
    }

    #[test]
    fn test_empty_envelope() {
        assert!(parse_comparisons("{}").unwrap().is_empty());
        assert!(parse_comparisons(r#"{"values": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_comparisons("[").unwrap_err().is_serialization());
    }
}
