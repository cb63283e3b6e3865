//! Prompt construction.
//!
//! Renders the single prompt string sent to the model. The prompt is the
//! sole channel of information to the model: persona instructions, the
//! sector knowledge snippet, the user's profile, the flattened spreadsheet
//! context (or an explicit no-file placeholder) and the question, in that
//! order. Pure and deterministic given identical inputs.

use super::knowledge::IndustryKnowledge;
use super::personas::Persona;
use crate::user::{Profile, ProfileKey};
use std::fmt::Write as _;

/// Placeholder sentence used when no spreadsheet is loaded.
///
/// The context section is never silently omitted: either the flattened data
/// or this sentence is present, so the model can never assume data exists
/// when it does not.
pub const NO_FILE_PLACEHOLDER: &str =
    "No hay ningún archivo cargado. No existen datos financieros del usuario para esta consulta.";

/// Builds the prompt for one question.
///
/// # Arguments
///
/// * `persona` - Fixed instruction block, included verbatim and first
/// * `knowledge` - Sector snippet lookup, resolved against the profile's
///   `industria` (fallback text when absent or unknown)
/// * `profile` - When non-empty, rendered one `- {key}: {value}` line per
///   populated key, in canonical key order
/// * `context` - Flattened spreadsheet text; `None` renders the placeholder
/// * `question` - Appended last, verbatim
pub fn build(
    persona: &Persona,
    knowledge: &IndustryKnowledge,
    profile: &Profile,
    context: Option<&str>,
    question: &str,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(persona.instructions);
    prompt.push_str("\n\n");

    let _ = writeln!(
        prompt,
        "Conocimiento del sector:\n{}",
        knowledge.lookup(profile.get(ProfileKey::Industria))
    );
    prompt.push('\n');

    if !profile.is_empty() {
        prompt.push_str("Perfil del usuario:\n");
        for (key, value) in profile.entries() {
            let _ = writeln!(prompt, "- {}: {}", key.as_str(), value);
        }
        prompt.push('\n');
    }

    prompt.push_str(context.unwrap_or(NO_FILE_PLACEHOLDER));
    prompt.push_str("\n\n");

    let _ = write!(prompt, "Pregunta del usuario: {question}");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::personas::FINANCIAL_ANALYST_PERSONA;

    #[test]
    fn test_question_is_the_suffix() {
        let prompt = build(
            &FINANCIAL_ANALYST_PERSONA,
            &IndustryKnowledge::default(),
            &Profile::default(),
            None,
            "¿Cuál es el margen bruto?",
        );
        assert!(prompt.ends_with("Pregunta del usuario: ¿Cuál es el margen bruto?"));
    }

    #[test]
    fn test_context_or_placeholder_never_neither() {
        let knowledge = IndustryKnowledge::default();
        let profile = Profile::default();

        let with_context = build(
            &FINANCIAL_ANALYST_PERSONA,
            &knowledge,
            &profile,
            Some("Datos financieros disponibles:\n\nHoja: Balance\n"),
            "¿Cómo está la liquidez?",
        );
        assert!(with_context.contains("Hoja: Balance"));
        assert!(!with_context.contains(NO_FILE_PLACEHOLDER));

        let without_context = build(
            &FINANCIAL_ANALYST_PERSONA,
            &knowledge,
            &profile,
            None,
            "¿Cómo está la liquidez?",
        );
        assert!(without_context.contains(NO_FILE_PLACEHOLDER));
    }

    #[test]
    fn test_empty_profile_renders_no_profile_block() {
        let prompt = build(
            &FINANCIAL_ANALYST_PERSONA,
            &IndustryKnowledge::default(),
            &Profile::default(),
            None,
            "hola",
        );
        assert!(!prompt.contains("Perfil del usuario:"));
        assert!(prompt.contains(crate::prompt::DEFAULT_KNOWLEDGE));
    }

    #[test]
    fn test_persona_opens_the_prompt() {
        let prompt = build(
            &FINANCIAL_ANALYST_PERSONA,
            &IndustryKnowledge::default(),
            &Profile::default(),
            None,
            "hola",
        );
        assert!(prompt.starts_with(FINANCIAL_ANALYST_PERSONA.instructions));
    }

    #[test]
    fn test_agricultura_example() {
        // Worked example: profile with only the industry set, no file loaded.
        let mut profile = Profile::default();
        profile.set(ProfileKey::Industria, "Agricultura");

        let knowledge = IndustryKnowledge::default();
        let prompt = build(
            &FINANCIAL_ANALYST_PERSONA,
            &knowledge,
            &profile,
            None,
            "¿Cómo va mi margen?",
        );

        assert!(prompt.contains(knowledge.lookup(Some("Agricultura"))));
        assert!(prompt.contains("- industria: Agricultura"));
        assert!(prompt.contains(NO_FILE_PLACEHOLDER));
        assert!(prompt.contains("¿Cómo va mi margen?"));
    }

    #[test]
    fn test_profile_lines_in_canonical_order() {
        let mut profile = Profile::default();
        profile.set(ProfileKey::Rol, "Contador");
        profile.set(ProfileKey::Industria, "Comercio");

        let prompt = build(
            &FINANCIAL_ANALYST_PERSONA,
            &IndustryKnowledge::default(),
            &profile,
            None,
            "hola",
        );

        let industria = prompt.find("- industria: Comercio").unwrap();
        let rol = prompt.find("- rol: Contador").unwrap();
        assert!(industria < rol);
    }
}
