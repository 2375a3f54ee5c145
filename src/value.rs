//! Personal values that judgments compare.
//!
//! The vocabulary is the Rokeach Value Survey: 36 terminal and instrumental
//! values, each with a short description. The set is closed; anything else
//! fails to parse with [`ValidationError::UnknownValue`](crate::error::ValidationError).

use serde::{Deserialize, Serialize};

use crate::catalog::closed_catalog;

closed_catalog! {
    /// A value from the Rokeach catalog.
    ///
    /// Serializes as its canonical SCREAMING_SNAKE_CASE name. Parsing also
    /// accepts display forms:
    ///
    /// ```
    /// use dwell_values::ValueName;
    ///
    /// let v: ValueName = "True Friendship".parse().unwrap();
    /// assert_eq!(v, ValueName::TrueFriendship);
    /// assert_eq!(v.as_str(), "TRUE_FRIENDSHIP");
    /// assert_eq!(v.label(), "TRUE FRIENDSHIP");
    /// ```
    pub enum ValueName (UnknownValue) {
        TrueFriendship => "TRUE_FRIENDSHIP", "close companionship";
        MatureLove => "MATURE_LOVE", "sexual and spiritual intimacy";
        SelfRespect => "SELF_RESPECT", "self-esteem, self-respect, sense of worth";
        Happiness => "HAPPINESS", "contentedness";
        InnerHarmony => "INNER_HARMONY", "free of inner conflict";
        Equality => "EQUALITY", "brotherhood, equal opportunity for all";
        Freedom => "FREEDOM", "independence, free choice";
        Pleasure => "PLEASURE", "an enjoyable, leisurely life";
        SocialRecognition => "SOCIAL_RECOGNITION", "respect, admiration";
        Wisdom => "WISDOM", "a mature understanding of life";
        Salvation => "SALVATION", "saved, eternal life";
        FamilySecurity => "FAMILY_SECURITY", "taking care of loved ones";
        NationalSecurity => "NATIONAL_SECURITY", "protection of nation from attack";
        ASenseOfAccomplishment => "A_SENSE_OF_ACCOMPLISHMENT", "pride in one's achievements, a lasting contribution";
        AWorldOfBeauty => "A_WORLD_OF_BEAUTY", "appreciation of nature and the arts";
        AWorldAtPeace => "A_WORLD_AT_PEACE", "free of war and conflict";
        AComfortableLife => "A_COMFORTABLE_LIFE", "a prosperous life";
        AnExcitingLife => "AN_EXCITING_LIFE", "a stimulating, active life";
        Cheerfulness => "CHEERFULNESS", "a joyful, lighthearted outlook";
        Ambition => "AMBITION", "a strong desire to succeed, hardworking, aspiring";
        Love => "LOVE", "deep affection, tenderness";
        Cleanliness => "CLEANLINESS", "neatness, tidiness";
        SelfControl => "SELF_CONTROL", "ability to control one's emotions and desires, restrain, self discipline";
        Capability => "CAPABILITY", "competence, effectiveness";
        Courage => "COURAGE", "standing up for your beliefs";
        Politeness => "POLITENESS", "good manners, courtesy";
        Honesty => "HONESTY", "truthfulness, sincerity";
        Imagination => "IMAGINATION", "creativity, inventiveness, daring";
        Independence => "INDEPENDENCE", "self-reliance, self-sufficiency";
        Intellect => "INTELLECT", "intelligence, cognitive ability, reflective";
        BroadMindedness => "BROAD_MINDEDNESS", "open-mindedness, tolerance";
        Logic => "LOGIC", "consistent, rational thinking";
        Obedience => "OBEDIENCE", "compliance with rules and authority, dutiful, respectful";
        Helpfulness => "HELPFULNESS", "willingness to assist others, working for the welfare of others";
        Responsibility => "RESPONSIBILITY", "accountability, reliability, dependability";
        Forgiveness => "FORGIVENESS", "readiness to forgive/pardon others";
    }
}

impl ValueName {
    /// Returns the display label (underscores replaced by spaces).
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// A value together with its description, as exchanged with the extractor.
///
/// The description is always the catalog text; whatever `desc` arrives on
/// the wire is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRokeachValue")]
pub struct RokeachValue {
    /// The value.
    pub name: ValueName,
    /// Catalog description of the value.
    pub desc: String,
}

impl RokeachValue {
    /// Creates a value with its catalog description.
    #[must_use]
    pub fn new(name: ValueName) -> Self {
        Self {
            name,
            desc: name.description().to_string(),
        }
    }
}

impl From<ValueName> for RokeachValue {
    fn from(name: ValueName) -> Self {
        Self::new(name)
    }
}

// `desc` is ignored on input; the catalog text is authoritative.
#[derive(Deserialize)]
struct RawRokeachValue {
    name: ValueName,
}

impl From<RawRokeachValue> for RokeachValue {
    fn from(raw: RawRokeachValue) -> Self {
        Self::new(raw.name)
    }
}
