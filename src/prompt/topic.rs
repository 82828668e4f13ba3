// src/prompt/topic.rs
// Writing-task categories and the persona phrasing each one implies

use serde::Serialize;
use std::fmt;

const BAND_EIGHT_TEST_TAKER: &str = "an IELTS test taker with a band score of 8.0";

/// Category of writing task the question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TopicType {
    IeltsWriting,
    IeltsSpeaking,
    Debate,
    /// Any label that is not one of the known categories
    General,
}

impl TopicType {
    /// Categories offered to clients, in display order
    pub const SELECTABLE: [TopicType; 3] = [Self::IeltsWriting, Self::IeltsSpeaking, Self::Debate];

    /// Resolve a wire label. Matching is exact; anything else is `General`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "IELTS Writing" => Self::IeltsWriting,
            "IELTS Speaking" => Self::IeltsSpeaking,
            "Debate" => Self::Debate,
            _ => Self::General,
        }
    }

    /// Wire label, empty for `General`
    pub fn label(&self) -> &'static str {
        match self {
            Self::IeltsWriting => "IELTS Writing",
            Self::IeltsSpeaking => "IELTS Speaking",
            Self::Debate => "Debate",
            Self::General => "",
        }
    }

    /// Phrase naming the kind of question, substituted as `{question_type}`
    pub fn question_type(&self) -> &'static str {
        match self {
            Self::IeltsWriting => "IELTS Writing Task 2",
            Self::IeltsSpeaking => "IELTS Speaking",
            Self::Debate => "debate",
            Self::General => "",
        }
    }

    /// Persona the model is asked to act as, substituted as `{actor}`
    pub fn actor(&self) -> &'static str {
        match self {
            Self::IeltsWriting | Self::IeltsSpeaking => BAND_EIGHT_TEST_TAKER,
            Self::Debate => "a debater",
            Self::General => "a person",
        }
    }
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            other => write!(f, "{}", other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for topic in TopicType::SELECTABLE {
            assert_eq!(TopicType::from_label(topic.label()), topic);
        }
    }

    #[test]
    fn test_unknown_label_is_general() {
        assert_eq!(TopicType::from_label("TOEFL"), TopicType::General);
        // Case and surrounding whitespace matter
        assert_eq!(TopicType::from_label("debate"), TopicType::General);
        assert_eq!(TopicType::from_label(" Debate"), TopicType::General);
    }

    #[test]
    fn test_persona_table() {
        assert_eq!(TopicType::IeltsWriting.question_type(), "IELTS Writing Task 2");
        assert_eq!(TopicType::IeltsSpeaking.question_type(), "IELTS Speaking");
        assert_eq!(TopicType::Debate.question_type(), "debate");
        assert_eq!(TopicType::General.question_type(), "");

        assert_eq!(TopicType::IeltsWriting.actor(), BAND_EIGHT_TEST_TAKER);
        assert_eq!(TopicType::IeltsSpeaking.actor(), BAND_EIGHT_TEST_TAKER);
        assert_eq!(TopicType::Debate.actor(), "a debater");
        assert_eq!(TopicType::General.actor(), "a person");
    }
}
