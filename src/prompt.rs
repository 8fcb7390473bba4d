//! Prompt template for the voice assistant.

/// Build the instruction prompt for a trimmed intent.
///
/// The template is constant except for the single substitution of the
/// intent text: it casts the model as a voice assistant, demands exactly two
/// short spoken-style sentences matching the intent's tone, carries three
/// fixed examples, and steers the reply toward keeping the user awake.
pub fn build_prompt(intent: &str) -> String {
    format!(
        r#"You are a voice assistant. The user gives a short intent like "pep talk", "scary voice", or "motivation".
Reply as a voice assistant with exactly two short, natural sentences that match the tone.
It must sound human and spoken - not robotic.
Generate your response based on this intent: "{intent}"
Examples:
pep talk -> "Come on, you've got this! Don't quit now."
scary voice -> "If you sleep now, something's watching. Stay awake."
motivation -> "Every second counts. Keep pushing."
The output should ultimately be motivational and to keep the user awake.
"#
    )
}
