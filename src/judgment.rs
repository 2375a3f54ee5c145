//! Pairwise value judgments and the evidence behind them.
//!
//! A judgment is one extracted claim that a journal entry demonstrates
//! `superior` to matter more than `inferior`. Users review each judgment;
//! only confirmed ones are meant to reach the resolver, and filtering them
//! is the caller's job.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value::ValueName;

/// One pairwise claim that `superior` is more important than `inferior`.
///
/// The engine accepts any judgment, including a malformed one that compares
/// a value with itself. Call [`Judgment::validate`] to reject such input
/// before storing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Judgment {
    /// The value demonstrated to matter more.
    pub superior: ValueName,

    /// The value demonstrated to matter less.
    pub inferior: ValueName,

    /// Summary of why the entry supports the comparison.
    pub reason: String,

    /// Quote from the journal entry or chat thread.
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Date of the entry, as an ISO date string.
    pub date: String,
}

impl Judgment {
    /// Creates a judgment without a reference quote.
    pub fn new(
        superior: ValueName,
        inferior: ValueName,
        reason: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            superior,
            inferior,
            reason: reason.into(),
            reference: None,
            date: date.into(),
        }
    }

    /// Attaches the quote the judgment was extracted from.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Returns the directed edge `(superior, inferior)`.
    #[must_use]
    pub const fn edge(&self) -> (ValueName, ValueName) {
        (self.superior, self.inferior)
    }

    /// Returns true if the judgment compares a value with itself.
    #[must_use]
    pub fn is_self_comparison(&self) -> bool {
        self.superior == self.inferior
    }

    /// Returns the evidence this judgment contributes to its edge.
    #[must_use]
    pub fn evidence(&self) -> Evidence {
        Evidence {
            reason: self.reason.clone(),
            date: self.date.clone(),
            reference: self.reference.clone(),
        }
    }

    /// Checks the judgment for input the engine tolerates but callers
    /// usually want to reject before storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_self_comparison() {
            return Err(ValidationError::SelfComparison {
                value: self.superior.to_string(),
            });
        }
        if self.reason.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "reason".to_string(),
            });
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "date".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {} ({})", self.superior, self.inferior, self.date)
    }
}

/// The supporting text and date of one judgment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evidence {
    /// Summary of why the entry supports the comparison.
    pub reason: String,

    /// Date of the entry, as given.
    pub date: String,

    /// Quote from the journal entry, if one was extracted.
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Evidence {
    /// Parses the leading `YYYY-MM-DD` of the date, if present.
    ///
    /// Timestamps such as `2024-03-01 08:15:00` and `2024-03-01T08:15:00Z`
    /// resolve to their calendar day.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let day = self.date.trim().get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// The user's verdict on an extracted judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// The user agrees with the judgment.
    Confirmed,

    /// The user disagrees; the judgment must not influence orders.
    Rejected,

    /// Not reviewed yet.
    Undecided,
}

impl Default for ReviewStatus {
    fn default() -> Self {
        Self::Undecided
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Rejected => write!(f, "rejected"),
            Self::Undecided => write!(f, "undecided"),
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "rejected" => Ok(Self::Rejected),
            "undecided" => Ok(Self::Undecided),
            _ => Err(ValidationError::UnknownReviewStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// A judgment paired with its review status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewedJudgment {
    /// The judgment under review.
    #[serde(flatten)]
    pub judgment: Judgment,

    /// The user's verdict.
    #[serde(default)]
    pub status: ReviewStatus,
}

impl ReviewedJudgment {
    /// Pairs a judgment with a status.
    #[must_use]
    pub const fn new(judgment: Judgment, status: ReviewStatus) -> Self {
        Self { judgment, status }
    }

    /// Returns true if the user confirmed the judgment.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.status == ReviewStatus::Confirmed
    }
}

/// Keeps only confirmed judgments, in their original order.
pub fn confirmed_judgments<I>(reviewed: I) -> Vec<Judgment>
where
    I: IntoIterator<Item = ReviewedJudgment>,
{
    reviewed
        .into_iter()
        .filter(ReviewedJudgment::is_confirmed)
        .map(|r| r.judgment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judgment_validate_self_comparison() {
        let j = Judgment::new(ValueName::Honesty, ValueName::Honesty, "r", "2024-01-01");
        assert!(j.is_self_comparison());
        assert!(matches!(
            j.validate(),
            Err(ValidationError::SelfComparison { value }) if value == "HONESTY"
        ));
    }

    #[test]
    fn test_judgment_validate_empty_fields() {
        let j = Judgment::new(ValueName::Honesty, ValueName::Courage, "  ", "2024-01-01");
        assert!(matches!(
            j.validate(),
            Err(ValidationError::EmptyField { field }) if field == "reason"
        ));

        let j = Judgment::new(ValueName::Honesty, ValueName::Courage, "told the truth", "");
        assert!(matches!(
            j.validate(),
            Err(ValidationError::EmptyField { field }) if field == "date"
        ));

        let ok = Judgment::new(ValueName::Honesty, ValueName::Courage, "told the truth", "2024-01-01");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_judgment_evidence_carries_reference() {
        let j = Judgment::new(ValueName::Love, ValueName::Ambition, "skipped work", "2024-02-14")
            .with_reference("I stayed home with her");
        let e = j.evidence();
        assert_eq!(e.reason, "skipped work");
        assert_eq!(e.date, "2024-02-14");
        assert_eq!(e.reference.as_deref(), Some("I stayed home with her"));
    }

    #[test]
    fn test_judgment_display() {
        let j = Judgment::new(ValueName::Honesty, ValueName::Politeness, "r", "2024-01-01");
        assert_eq!(j.to_string(), "HONESTY > POLITENESS (2024-01-01)");
    }

    #[test]
    fn test_judgment_serde_uses_ref_key() {
        let j = Judgment::new(ValueName::Wisdom, ValueName::Pleasure, "r", "2024-01-01")
            .with_reference("quote");
        let json = serde_json::to_value(&j).unwrap();
        assert_eq!(json["ref"], "quote");
        assert_eq!(json["superior"], "WISDOM");

        let back: Judgment = serde_json::from_value(json).unwrap();
        assert_eq!(back, j);
    }

    #[test]
    fn test_evidence_parsed_date() {
        let mut e = Judgment::new(ValueName::Logic, ValueName::Imagination, "r", "2024-03-01").evidence();
        assert_eq!(e.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 1));

        e.date = "2024-03-01 08:15:00".to_string();
        assert_eq!(e.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 1));

        e.date = "last tuesday".to_string();
        assert_eq!(e.parsed_date(), None);

        e.date = "2024".to_string();
        assert_eq!(e.parsed_date(), None);
    }

    #[test]
    fn test_review_status_parse() {
        assert_eq!("Confirmed".parse::<ReviewStatus>().unwrap(), ReviewStatus::Confirmed);
        assert_eq!(" rejected ".parse::<ReviewStatus>().unwrap(), ReviewStatus::Rejected);
        assert!(matches!(
            "maybe".parse::<ReviewStatus>(),
            Err(ValidationError::UnknownReviewStatus { .. })
        ));
        assert_eq!(ReviewStatus::default(), ReviewStatus::Undecided);
    }

    #[test]
    fn test_confirmed_judgments_filters_in_order() {
        let a = Judgment::new(ValueName::Honesty, ValueName::Courage, "a", "2024-01-01");
        let b = Judgment::new(ValueName::Courage, ValueName::Logic, "b", "2024-01-02");
        let c = Judgment::new(ValueName::Logic, ValueName::Love, "c", "2024-01-03");

        let reviewed = vec![
            ReviewedJudgment::new(a.clone(), ReviewStatus::Confirmed),
            ReviewedJudgment::new(b, ReviewStatus::Rejected),
            ReviewedJudgment::new(c.clone(), ReviewStatus::Confirmed),
            ReviewedJudgment::new(
                Judgment::new(ValueName::Love, ValueName::Freedom, "d", "2024-01-04"),
                ReviewStatus::Undecided,
            ),
        ];

        assert_eq!(confirmed_judgments(reviewed), vec![a, c]);
    }

    #[test]
    fn test_reviewed_judgment_serde_flattened() {
        let json = r#"{
            "superior": "FREEDOM",
            "inferior": "OBEDIENCE",
            "reason": "quit the job",
            "date": "2024-05-01",
            "status": "confirmed"
        }"#;
        let r: ReviewedJudgment = serde_json::from_str(json).unwrap();
        assert!(r.is_confirmed());
        assert_eq!(r.judgment.edge(), (ValueName::Freedom, ValueName::Obedience));
        assert_eq!(r.judgment.reference, None);
    }
}
