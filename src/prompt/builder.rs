// src/prompt/builder.rs
// Builds the completion prompt for a topic/action pair

use super::action::{ActionKind, UnknownAction};
use super::template::PromptVars;
use super::topic::TopicType;

/// Render the prompt for an already-resolved topic and action
pub fn render_prompt(topic: TopicType, action: ActionKind, question: &str, content: &str) -> String {
    let vars = PromptVars {
        actor: topic.actor(),
        question_type: topic.question_type(),
        question,
        content,
    };
    action.template().render(&vars)
}

/// Build the prompt from raw wire labels.
///
/// Total: an unrecognized action yields an empty string, an unrecognized
/// topic falls back to the general persona. `question` and `content` are
/// inserted exactly as given.
pub fn build_prompt(topic_type: &str, prompt_type: &str, question: &str, content: &str) -> String {
    match prompt_type.parse::<ActionKind>() {
        Ok(action) => render_prompt(TopicType::from_label(topic_type), action, question, content),
        Err(_) => String::new(),
    }
}

/// Like [`build_prompt`], but an unknown action is an error instead of an
/// empty prompt. Used by the `render` command.
pub fn preview_prompt(
    topic_type: &str,
    prompt_type: &str,
    question: &str,
    content: &str,
) -> Result<String, UnknownAction> {
    let action = prompt_type.parse::<ActionKind>()?;
    Ok(render_prompt(TopicType::from_label(topic_type), action, question, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::template::Placeholder;

    const ESSAY_TAIL: &str =
        "For your information, the essay is written in response to the following IELTS Writing Task 2 question: Q";

    fn writing(action: &str, content: &str) -> String {
        build_prompt("IELTS Writing", action, "Q", content)
    }

    #[test]
    fn test_debate_outline() {
        assert_eq!(
            build_prompt("Debate", "outline", "Is X good?", ""),
            "Act as a debater. Write an essay outline in response to the following debate question: Is X good?"
        );
    }

    #[test]
    fn test_synonyms_ignores_question() {
        assert_eq!(writing("synonyms", "happy"), "Give me 5 synonyms of happy");
    }

    #[test]
    fn test_unknown_action_is_empty() {
        assert_eq!(build_prompt("Debate", "not_a_real_action", "Q", "C"), "");
        assert_eq!(build_prompt("Debate", "", "Q", "C"), "");
    }

    #[test]
    fn test_preview_rejects_unknown_action() {
        let err = preview_prompt("Debate", "brainstorm", "Q", "").unwrap_err();
        assert_eq!(err, UnknownAction("brainstorm".to_string()));
        assert_eq!(err.to_string(), "unknown action: brainstorm");
    }

    #[test]
    fn test_preview_matches_build_prompt() {
        assert_eq!(
            preview_prompt("Debate", "outline", "Is X good?", "").unwrap(),
            build_prompt("Debate", "outline", "Is X good?", "")
        );
    }

    #[test]
    fn test_unknown_topic_uses_general_persona() {
        assert_eq!(
            build_prompt("Poetry", "sample_answer", "Q", ""),
            "Act as a person. Write an essay in response to the following  question with at least 250 words: Q"
        );
    }

    #[test]
    fn test_brainstorming_templates() {
        let actor = "Act as an IELTS test taker with a band score of 8.0.";
        assert_eq!(
            writing("support_arguments", ""),
            format!("{actor} Given the following IELTS Writing Task 2 question, generate 3 arguments to support the statement: Q")
        );
        assert_eq!(
            writing("oppose_arguments", ""),
            format!("{actor} Given the following IELTS Writing Task 2 question, generate 3 arguments to oppose the statement: Q")
        );
        assert_eq!(
            build_prompt("IELTS Speaking", "sample_answer", "Q", ""),
            "Act as an IELTS test taker with a band score of 8.0. Write an essay in response to the following IELTS Speaking question with at least 250 words: Q"
        );
        assert_eq!(
            writing("introduction", ""),
            format!("{actor} Write a short introduction paragraph for an essay in response to the following IELTS Writing Task 2 question:: Q")
        );
    }

    #[test]
    fn test_drafting_templates_quote_content() {
        let actor = "Act as an IELTS test taker with a band score of 8.0.";
        assert_eq!(
            writing("conclusion", "My essay"),
            format!("{actor} Write a short conclusion paragraph for this half-done essay:\n\"My essay\"\n{ESSAY_TAIL}")
        );
        assert_eq!(
            writing("elaborate", "Arg"),
            format!("{actor} Elaborate/Explain the following argument in 3-4 sentences:\n\"Arg\"\n{ESSAY_TAIL}")
        );
        assert_eq!(
            writing("example", "Arg"),
            format!("{actor} Give and explain an example in support of the following argument in 1-2 sentences:\n\"Arg\"\n{ESSAY_TAIL}")
        );
        assert_eq!(
            writing("finish_sentence", "I think"),
            format!("{actor} Finish this sentence for me:\n\"I think\"\n{ESSAY_TAIL}")
        );
    }

    #[test]
    fn test_editing_templates() {
        assert_eq!(
            writing("correct_mistakes", "E"),
            "Point out clearly the mistakes in this essay and how to correct them: E"
        );
        assert_eq!(writing("paraphrase", "E"), "Paraphrase/Rephrase this sentence/paragraph: \nE");
        assert_eq!(
            writing("make_longer", "E"),
            format!("Make this IELTS Writing Task 2 essay longer by elaborating on the existing points (don't add more arguments):\n\"E\"\n{ESSAY_TAIL}")
        );
        assert_eq!(
            writing("make_simpler", "E"),
            "Rewrite this IELTS Writing Task 2 essay using simpler/more academic language: \nE"
        );
        assert_eq!(writing("improve", "E"), "Improve/Perfect this essay: \nE");
        assert_eq!(
            writing("suggestions", "E"),
            "What are the strengths & weaknesses of this essay? Give your suggestions for improvement for the writer: \nE"
        );
        assert_eq!(
            writing("summarize", "E"),
            "Act as a summarizer and summarize this essay: \nE"
        );
    }

    #[test]
    fn test_vocabulary_templates() {
        assert_eq!(
            writing("dictionary", "serendipity"),
            "Explain the meaning of serendipity and give me an example of how to use it in real life."
        );
        assert_eq!(writing("antonyms", "happy"), "Give me 5 antonyms of happy");
        assert_eq!(writing("other_ways_to_say", "very good"), "Give me 10 other ways to say very good");
    }

    #[test]
    fn test_every_pair_contains_inputs_verbatim() {
        let question = "Should {content} be \"free\"?\n  Discuss & explain.";
        let content = "  Line one\n\tline {question} two  ";
        let topics = ["IELTS Writing", "IELTS Speaking", "Debate", "Other"];

        for topic in topics {
            for action in ActionKind::ALL {
                let prompt = build_prompt(topic, action.id(), question, content);
                assert!(!prompt.is_empty(), "{topic}/{action} produced empty prompt");

                let template = action.template();
                if template.uses(Placeholder::Question) {
                    assert!(prompt.contains(question), "{topic}/{action} lost the question");
                }
                if template.uses(Placeholder::Content) {
                    assert!(prompt.contains(content), "{topic}/{action} lost the content");
                }
            }
        }
    }

    #[test]
    fn test_content_actions_accept_empty_content() {
        let prompt = writing("improve", "");
        assert_eq!(prompt, "Improve/Perfect this essay: \n");
    }

    #[test]
    fn test_idempotent() {
        for action in ActionKind::ALL {
            let first = build_prompt("Debate", action.id(), "Q?", "some text");
            let second = build_prompt("Debate", action.id(), "Q?", "some text");
            assert_eq!(first, second);
        }
    }
}
