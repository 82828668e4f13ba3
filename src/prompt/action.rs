// src/prompt/action.rs
// Writing-assistance actions and the template each one maps to

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::template::{Placeholder, Template};
use Placeholder::{Actor, Content, Question, QuestionType};

/// Group an action belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionFamily {
    /// Idea generation from the question alone
    Brainstorming,
    /// Writing new parts of an essay in progress
    Drafting,
    /// Reworking existing essay text
    Editing,
    /// Treating the content as a single word or phrase
    Vocabulary,
}

/// Requested writing-assistance operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Outline,
    SupportArguments,
    OpposeArguments,
    SampleAnswer,
    Introduction,
    Conclusion,
    Elaborate,
    Example,
    FinishSentence,
    CorrectMistakes,
    Paraphrase,
    MakeLonger,
    MakeSimpler,
    Improve,
    Suggestions,
    Dictionary,
    Synonyms,
    Antonyms,
    OtherWaysToSay,
    Summarize,
}

/// Action identifier that matches no known action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

const BRAINSTORM: &[Placeholder] = &[Actor, QuestionType, Question];
const DRAFT: &[Placeholder] = &[Actor, QuestionType, Question, Content];
const TOPIC_AND_CONTENT: &[Placeholder] = &[QuestionType, Question, Content];
const CONTENT_ONLY: &[Placeholder] = &[Content];

const OUTLINE: Template = Template::new(
    "Act as {actor}. Write an essay outline in response to the following {question_type} question: {question}",
    BRAINSTORM,
);
const SUPPORT_ARGUMENTS: Template = Template::new(
    "Act as {actor}. Given the following {question_type} question, generate 3 arguments to support the statement: {question}",
    BRAINSTORM,
);
const OPPOSE_ARGUMENTS: Template = Template::new(
    "Act as {actor}. Given the following {question_type} question, generate 3 arguments to oppose the statement: {question}",
    BRAINSTORM,
);
const SAMPLE_ANSWER: Template = Template::new(
    "Act as {actor}. Write an essay in response to the following {question_type} question with at least 250 words: {question}",
    BRAINSTORM,
);

const INTRODUCTION: Template = Template::new(
    "Act as {actor}. Write a short introduction paragraph for an essay in response to the following {question_type} question:: {question}",
    BRAINSTORM,
);
const CONCLUSION: Template = Template::new(
    "Act as {actor}. Write a short conclusion paragraph for this half-done essay:\n\"{content}\"\nFor your information, the essay is written in response to the following {question_type} question: {question}",
    DRAFT,
);
const ELABORATE: Template = Template::new(
    "Act as {actor}. Elaborate/Explain the following argument in 3-4 sentences:\n\"{content}\"\nFor your information, the essay is written in response to the following {question_type} question: {question}",
    DRAFT,
);
const EXAMPLE: Template = Template::new(
    "Act as {actor}. Give and explain an example in support of the following argument in 1-2 sentences:\n\"{content}\"\nFor your information, the essay is written in response to the following {question_type} question: {question}",
    DRAFT,
);
const FINISH_SENTENCE: Template = Template::new(
    "Act as {actor}. Finish this sentence for me:\n\"{content}\"\nFor your information, the essay is written in response to the following {question_type} question: {question}",
    DRAFT,
);

const CORRECT_MISTAKES: Template = Template::new(
    "Point out clearly the mistakes in this essay and how to correct them: {content}",
    CONTENT_ONLY,
);
const PARAPHRASE: Template = Template::new(
    "Paraphrase/Rephrase this sentence/paragraph: \n{content}",
    CONTENT_ONLY,
);
const MAKE_LONGER: Template = Template::new(
    "Make this {question_type} essay longer by elaborating on the existing points (don't add more arguments):\n\"{content}\"\nFor your information, the essay is written in response to the following {question_type} question: {question}",
    TOPIC_AND_CONTENT,
);
const MAKE_SIMPLER: Template = Template::new(
    "Rewrite this {question_type} essay using simpler/more academic language: \n{content}",
    &[QuestionType, Content],
);
const IMPROVE: Template = Template::new("Improve/Perfect this essay: \n{content}", CONTENT_ONLY);
const SUGGESTIONS: Template = Template::new(
    "What are the strengths & weaknesses of this essay? Give your suggestions for improvement for the writer: \n{content}",
    CONTENT_ONLY,
);
const SUMMARIZE: Template = Template::new(
    "Act as a summarizer and summarize this essay: \n{content}",
    CONTENT_ONLY,
);

const DICTIONARY: Template = Template::new(
    "Explain the meaning of {content} and give me an example of how to use it in real life.",
    CONTENT_ONLY,
);
const SYNONYMS: Template = Template::new("Give me 5 synonyms of {content}", CONTENT_ONLY);
const ANTONYMS: Template = Template::new("Give me 5 antonyms of {content}", CONTENT_ONLY);
const OTHER_WAYS_TO_SAY: Template = Template::new("Give me 10 other ways to say {content}", CONTENT_ONLY);

impl ActionKind {
    pub const ALL: [ActionKind; 20] = [
        Self::Outline,
        Self::SupportArguments,
        Self::OpposeArguments,
        Self::SampleAnswer,
        Self::Introduction,
        Self::Conclusion,
        Self::Elaborate,
        Self::Example,
        Self::FinishSentence,
        Self::CorrectMistakes,
        Self::Paraphrase,
        Self::MakeLonger,
        Self::MakeSimpler,
        Self::Improve,
        Self::Suggestions,
        Self::Dictionary,
        Self::Synonyms,
        Self::Antonyms,
        Self::OtherWaysToSay,
        Self::Summarize,
    ];

    /// Wire identifier, as sent in `promptType`
    pub fn id(&self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::SupportArguments => "support_arguments",
            Self::OpposeArguments => "oppose_arguments",
            Self::SampleAnswer => "sample_answer",
            Self::Introduction => "introduction",
            Self::Conclusion => "conclusion",
            Self::Elaborate => "elaborate",
            Self::Example => "example",
            Self::FinishSentence => "finish_sentence",
            Self::CorrectMistakes => "correct_mistakes",
            Self::Paraphrase => "paraphrase",
            Self::MakeLonger => "make_longer",
            Self::MakeSimpler => "make_simpler",
            Self::Improve => "improve",
            Self::Suggestions => "suggestions",
            Self::Dictionary => "dictionary",
            Self::Synonyms => "synonyms",
            Self::Antonyms => "antonyms",
            Self::OtherWaysToSay => "other_ways_to_say",
            Self::Summarize => "summarize",
        }
    }

    pub fn template(&self) -> &'static Template {
        match self {
            Self::Outline => &OUTLINE,
            Self::SupportArguments => &SUPPORT_ARGUMENTS,
            Self::OpposeArguments => &OPPOSE_ARGUMENTS,
            Self::SampleAnswer => &SAMPLE_ANSWER,
            Self::Introduction => &INTRODUCTION,
            Self::Conclusion => &CONCLUSION,
            Self::Elaborate => &ELABORATE,
            Self::Example => &EXAMPLE,
            Self::FinishSentence => &FINISH_SENTENCE,
            Self::CorrectMistakes => &CORRECT_MISTAKES,
            Self::Paraphrase => &PARAPHRASE,
            Self::MakeLonger => &MAKE_LONGER,
            Self::MakeSimpler => &MAKE_SIMPLER,
            Self::Improve => &IMPROVE,
            Self::Suggestions => &SUGGESTIONS,
            Self::Dictionary => &DICTIONARY,
            Self::Synonyms => &SYNONYMS,
            Self::Antonyms => &ANTONYMS,
            Self::OtherWaysToSay => &OTHER_WAYS_TO_SAY,
            Self::Summarize => &SUMMARIZE,
        }
    }

    pub fn family(&self) -> ActionFamily {
        match self {
            Self::Outline | Self::SupportArguments | Self::OpposeArguments | Self::SampleAnswer => {
                ActionFamily::Brainstorming
            }
            Self::Introduction
            | Self::Conclusion
            | Self::Elaborate
            | Self::Example
            | Self::FinishSentence => ActionFamily::Drafting,
            Self::CorrectMistakes
            | Self::Paraphrase
            | Self::MakeLonger
            | Self::MakeSimpler
            | Self::Improve
            | Self::Suggestions
            | Self::Summarize => ActionFamily::Editing,
            Self::Dictionary | Self::Synonyms | Self::Antonyms | Self::OtherWaysToSay => {
                ActionFamily::Vocabulary
            }
        }
    }

    /// Whether clients should only offer the action once essay text exists.
    /// The server still accepts these with empty content.
    pub fn requires_content(&self) -> bool {
        matches!(self, Self::Conclusion | Self::Improve | Self::Suggestions)
    }

    /// Short button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Outline => "Outline",
            Self::SupportArguments => "Supportive arguments",
            Self::OpposeArguments => "Opposite arguments",
            Self::SampleAnswer => "Sample answer",
            Self::Introduction => "Introduction",
            Self::Conclusion => "Conclusion",
            Self::Elaborate => "Elaborate",
            Self::Example => "Example",
            Self::FinishSentence => "Finish sentence",
            Self::CorrectMistakes => "Correct mistakes",
            Self::Paraphrase => "Paraphrase",
            Self::MakeLonger => "Make longer",
            Self::MakeSimpler => "Make simpler",
            Self::Improve => "Improve",
            Self::Suggestions => "Suggestions",
            Self::Dictionary => "Dictionary",
            Self::Synonyms => "Synonyms",
            Self::Antonyms => "Antonyms",
            Self::OtherWaysToSay => "Other ways to say",
            Self::Summarize => "Summarize",
        }
    }

    /// One-line description for hover text
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Outline => "Write an essay outline",
            Self::SupportArguments => "generate 3 arguments to support the statement",
            Self::OpposeArguments => "generate 3 arguments to oppose the statement",
            Self::SampleAnswer => "Write an sample essay",
            Self::Introduction => "Write a short introduction paragraph for an essay",
            Self::Conclusion => "Write a short conclusion paragraph for this half-done essay",
            Self::Elaborate => "Elaborate/Explain the following argument in 3-4 sentences",
            Self::Example => {
                "Give and explain an example in support of the following argument in 1-2 sentences"
            }
            Self::FinishSentence => "Finish this sentence",
            Self::CorrectMistakes => {
                "Point out clearly the mistakes in this essay and how to correct them"
            }
            Self::Paraphrase => "Paraphrase/Rephrase this sentence/paragraph",
            Self::MakeLonger => {
                "Make this essay longer by elaborating on the existing points (don't add more arguments)"
            }
            Self::MakeSimpler => "Rewrite this essay using simpler/more academic language",
            Self::Improve => "Improve/Perfect this essay",
            Self::Suggestions => {
                "What are the strengths & weaknesses of this essay? Give your suggestions for improvement for the writer"
            }
            Self::Dictionary => {
                "Explain the meaning of the word and give me an example of how to use it in real life"
            }
            Self::Synonyms => "Give me 5 synonyms",
            Self::Antonyms => "Give me 5 antonyms",
            Self::OtherWaysToSay => "Give me 10 other ways to say this",
            Self::Summarize => "Summarize this essay",
        }
    }
}

impl FromStr for ActionKind {
    type Err = UnknownAction;

    /// Exact, case-sensitive match on the wire identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
