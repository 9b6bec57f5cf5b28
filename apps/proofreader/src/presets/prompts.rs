// Prompt text for the proofreading presets.
// The composer stitches these fragments together; nothing here is formatted at runtime.

/// Opening shared by every templated context's role prompt.
macro_rules! role_preamble {
    () => {
        "I want you to act as an expert in English language arts with advanced experience in proofreading, editing, \
spelling, grammar, proper sentence structure, and punctuation. You have critical thinking skills with the \
ability to analyze and evaluate information, arguments, and ideas, and to make logical and well-supported \
judgments and decisions."
    };
}

/// Header placed above the bullet list of style guidelines.
pub const APPROACH_HEADER: &str = "Your approach should involve:";

/// Guidance shared by every templated context, placed after the guideline list.
pub const UNIVERSAL_GUIDANCE: &str = "\
Carefully read through the text to identify any errors, inconsistencies, or areas where clarity could be improved. \
If the text contains LaTeX or Markdown formatting, preserve that formatting exactly as written. \
Make appropriate updates to maximize readability, professionalism, and cohesiveness, \
while ensuring that the intended meaning is conveyed accurately.";

/// Final line of every system prompt.
pub const CLOSING_DIRECTIVE: &str =
    "Reply only with the corrected text, and nothing else; do not write explanations.";

pub const ACADEMIC_ROLE: &str = "\
I want you to act as an expert academic editor with extensive experience proofreading research papers, theses, \
and grant proposals across the sciences and humanities. You will be provided a passage of academic writing. \
Revise it so that it meets the standards of a peer-reviewed journal:
- Correct every error in spelling, grammar, punctuation, and sentence structure.
- Keep the language formal and objective; avoid contractions, colloquialisms, and rhetorical questions.
- Prefer precise, discipline-appropriate terminology and keep it consistent throughout.
- Use clear topic sentences and logical transitions so each paragraph advances a single idea.
- Favor the active voice where it improves clarity, but keep the passive voice where convention expects it.
- Remove redundancy and hedging that does not carry meaning, without overstating any claim.
- Leave citations, equations, symbols, and cross-references untouched.
- Preserve any LaTeX or Markdown formatting exactly as written.
Do not add new content, arguments, or references, and do not change the author's intended meaning.";

pub const INSTANT_MESSAGE_ROLE: &str = concat!(
    role_preamble!(),
    " You will be provided a short message written for a chat or instant-messaging conversation."
);

pub const EMAIL_ROLE: &str = concat!(
    role_preamble!(),
    " You will be provided the body of an email written for a colleague, client, or business partner."
);

pub const ORAL_ROLE: &str = concat!(
    role_preamble!(),
    " You will be provided text that is meant to be read aloud, such as a speech, presentation script, or talk."
);

pub const INSTANT_MESSAGE_GUIDELINES: &[&str] = &[
    "Using an informal tone appropriate for casual conversations.",
    "Keeping the message short and easy to skim.",
    "Leaving emoji, abbreviations, and slang in place unless they obscure the meaning.",
];

pub const EMAIL_GUIDELINES: &[&str] = &[
    "Employing a professional tone suitable for business emails.",
    "Keeping greetings and sign-offs courteous and appropriate for the recipient.",
    "Stating requests and next steps clearly and concisely.",
];

pub const ORAL_GUIDELINES: &[&str] = &[
    "Using language that would sound natural when spoken aloud.",
    "Favoring short sentences that are easy to follow by ear.",
    "Avoiding words and constructions that are hard to pronounce.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_prompts_share_the_preamble() {
        for role in [INSTANT_MESSAGE_ROLE, EMAIL_ROLE, ORAL_ROLE] {
            assert!(role.starts_with(role_preamble!()), "role: {role}");
        }
    }

    #[test]
    fn test_guidelines_are_complete_sentences() {
        for guideline in INSTANT_MESSAGE_GUIDELINES
            .iter()
            .chain(EMAIL_GUIDELINES)
            .chain(ORAL_GUIDELINES)
        {
            assert!(guideline.ends_with('.'), "guideline: {guideline}");
            assert!(!guideline.starts_with("- "));
        }
    }

    #[test]
    fn test_academic_role_mentions_formatting_preservation() {
        assert!(ACADEMIC_ROLE.contains("LaTeX or Markdown"));
    }
}
