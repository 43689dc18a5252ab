//! Instruction sent to the text-generation provider.

use checklist_core::join_english_list;

pub const PERSONA: &str = "a helpful medical communication assistant";
pub const TONE: &str = "confident, calm, collaborative";
pub const MAX_WORDS: usize = 100;

/// Describe the patient's situation for the prompt.
pub fn symptom_context<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        "The patient has no specific urgent symptoms but is aware of the link between HPV and \
         anal cancer and wants to be proactive about screening."
            .to_string()
    } else {
        format!(
            "The patient has noticed the following symptoms: {}.",
            join_english_list(labels)
        )
    }
}

/// Full prompt for a list of symptom labels.
pub fn build_prompt<S: AsRef<str>>(labels: &[S]) -> String {
    format!(
        "You are {PERSONA}. Write a short first-person script that a patient can read aloud to their doctor.\n\
         Context: {context}\n\
         The script should explain what the patient has noticed and ask to discuss scheduling an Anal Pap.\n\
         Tone: {TONE}. Length: {MAX_WORDS} words or fewer.\n\
         Output only the script text, without surrounding quotes or any preamble.",
        context = symptom_context(labels)
    )
}
