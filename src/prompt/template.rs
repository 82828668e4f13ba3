// src/prompt/template.rs
// Fixed prompt templates with named placeholders and a single-pass renderer

/// A value a template can interpolate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Actor,
    QuestionType,
    Question,
    Content,
}

impl Placeholder {
    /// Token name as written between braces in template text
    pub fn token(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::QuestionType => "question_type",
            Self::Question => "question",
            Self::Content => "content",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "actor" => Some(Self::Actor),
            "question_type" => Some(Self::QuestionType),
            "question" => Some(Self::Question),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// Values available for interpolation
#[derive(Debug, Clone, Copy)]
pub struct PromptVars<'a> {
    pub actor: &'a str,
    pub question_type: &'a str,
    pub question: &'a str,
    pub content: &'a str,
}

impl PromptVars<'_> {
    fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Actor => self.actor,
            Placeholder::QuestionType => self.question_type,
            Placeholder::Question => self.question,
            Placeholder::Content => self.content,
        }
    }
}

/// Static template text plus the placeholder set it is allowed to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
    placeholders: &'static [Placeholder],
}

impl Template {
    pub const fn new(text: &'static str, placeholders: &'static [Placeholder]) -> Self {
        Self { text, placeholders }
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &'static str {
        self.text
    }

    pub fn placeholders(&self) -> &'static [Placeholder] {
        self.placeholders
    }

    pub fn uses(&self, placeholder: Placeholder) -> bool {
        self.placeholders.contains(&placeholder)
    }

    /// Interpolate `vars` into the template.
    ///
    /// Substituted values are copied verbatim and never rescanned, so user
    /// text that happens to contain `{question}` stays literal. Braces that
    /// do not form a declared placeholder are emitted unchanged.
    pub fn render(&self, vars: &PromptVars<'_>) -> String {
        let mut out = String::with_capacity(
            self.text.len() + vars.question.len() + vars.content.len() + vars.actor.len(),
        );
        let mut rest = self.text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];

            let placeholder = tail.find('}').and_then(|close| {
                Placeholder::from_token(&tail[1..close])
                    .filter(|p| self.uses(*p))
                    .map(|p| (p, close))
            });

            match placeholder {
                Some((placeholder, close)) => {
                    out.push_str(vars.get(placeholder));
                    rest = &tail[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: PromptVars<'static> = PromptVars {
        actor: "a debater",
        question_type: "debate",
        question: "Is X good?",
        content: "draft",
    };

    #[test]
    fn test_render_substitutes_declared_placeholders() {
        let template = Template::new(
            "Act as {actor}. {question_type}: {question}",
            &[Placeholder::Actor, Placeholder::QuestionType, Placeholder::Question],
        );
        assert_eq!(template.render(&VARS), "Act as a debater. debate: Is X good?");
    }

    #[test]
    fn test_render_leaves_undeclared_tokens_alone() {
        let template = Template::new("{content} and {question}", &[Placeholder::Content]);
        assert_eq!(template.render(&VARS), "draft and {question}");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let template = Template::new("Q: {question}", &[Placeholder::Question]);
        let vars = PromptVars {
            question: "what is {content}?",
            ..VARS
        };
        assert_eq!(template.render(&vars), "Q: what is {content}?");
    }

    #[test]
    fn test_render_handles_stray_braces() {
        let template = Template::new("{ {content} }{", &[Placeholder::Content]);
        assert_eq!(template.render(&VARS), "{ draft }{");
    }

    #[test]
    fn test_render_with_empty_values() {
        let template = Template::new("\"{content}\"", &[Placeholder::Content]);
        let vars = PromptVars { content: "", ..VARS };
        assert_eq!(template.render(&vars), "\"\"");
    }
}
