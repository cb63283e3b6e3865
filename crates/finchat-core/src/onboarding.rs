//! Onboarding questionnaire state machine.
//!
//! Walks a fixed ordered sequence of profile questions, writing one answer
//! into the [`Profile`] per step. There is no back transition and no
//! cancellation; re-running onboarding overwrites keys one at a time as each
//! step is answered, leaving keys not yet reached intact.

use crate::error::{FinchatError, Result};
use crate::user::{Profile, ProfileKey};

/// One onboarding step: the profile key it fills, the question shown to the
/// user, and the closed list of accepted answers.
#[derive(Debug, Clone, Copy)]
pub struct OnboardingQuestion {
    pub key: ProfileKey,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

/// The fixed questionnaire, in step order. One step per profile key.
pub static QUESTIONS: [OnboardingQuestion; 6] = [
    OnboardingQuestion {
        key: ProfileKey::Industria,
        prompt: "¿En qué industria opera tu negocio?",
        options: &[
            "Agricultura",
            "Comercio",
            "Manufactura",
            "Servicios",
            "Tecnología",
            "Construcción",
            "Otro",
        ],
    },
    OnboardingQuestion {
        key: ProfileKey::EstadoIndustria,
        prompt: "¿Cómo describirías el estado actual de tu industria?",
        options: &[
            "En crecimiento",
            "Estable",
            "En contracción",
            "No estoy seguro",
        ],
    },
    OnboardingQuestion {
        key: ProfileKey::TipoNegocio,
        prompt: "¿Qué tipo de negocio tienes?",
        options: &[
            "Persona natural",
            "Pyme",
            "Empresa mediana",
            "Empresa grande",
        ],
    },
    OnboardingQuestion {
        key: ProfileKey::Rol,
        prompt: "¿Cuál es tu rol en el negocio?",
        options: &[
            "Dueño o fundador",
            "Gerente financiero",
            "Contador",
            "Analista",
            "Otro",
        ],
    },
    OnboardingQuestion {
        key: ProfileKey::ObjetivoPrincipal,
        prompt: "¿Cuál es tu objetivo principal?",
        options: &[
            "Aumentar ventas",
            "Reducir costos",
            "Mejorar liquidez",
            "Ordenar mis finanzas",
            "Conseguir financiamiento",
        ],
    },
    OnboardingQuestion {
        key: ProfileKey::DolorPrincipal,
        prompt: "¿Cuál es tu mayor dolor financiero hoy?",
        options: &[
            "Flujo de caja",
            "Márgenes bajos",
            "Deudas",
            "Falta de visibilidad financiera",
            "Impuestos",
        ],
    },
];

/// Outcome of submitting one onboarding answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The answer was recorded and there is a next question.
    Advanced,
    /// The answer was recorded and the questionnaire is complete.
    Completed,
}

/// The onboarding state machine: a step index, a completion flag and the
/// working profile.
#[derive(Debug, Clone)]
pub struct Onboarding {
    step: usize,
    completed: bool,
    profile: Profile,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    /// Starts at step 0 with an empty profile.
    pub fn new() -> Self {
        Self::resume(Profile::default())
    }

    /// Starts at step 0 over an existing profile. Answers overwrite keys one
    /// at a time; keys not yet reached keep their prior values.
    pub fn resume(profile: Profile) -> Self {
        Self {
            step: 0,
            completed: false,
            profile,
        }
    }

    /// The question for the current step, or `None` once completed.
    pub fn current_question(&self) -> Option<&'static OnboardingQuestion> {
        if self.completed {
            None
        } else {
            Some(&QUESTIONS[self.step])
        }
    }

    /// Zero-based index of the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True once every step has been answered.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The working profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Consumes the state machine and returns the profile.
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    /// Submits the answer for the current step.
    ///
    /// The answer must be one of the step's fixed options. Submitting past
    /// the terminal state is rejected rather than wrapping around.
    ///
    /// # Returns
    ///
    /// - `Ok(StepOutcome::Advanced)`: Recorded, next question is available
    /// - `Ok(StepOutcome::Completed)`: Recorded, questionnaire finished
    /// - `Err(FinchatError::InvalidInput)`: Already completed, or the answer
    ///   is not among the step's options
    pub fn submit(&mut self, answer: &str) -> Result<StepOutcome> {
        if self.completed {
            return Err(FinchatError::invalid_input(
                "el cuestionario ya fue completado",
            ));
        }

        let question = &QUESTIONS[self.step];
        if !question.options.contains(&answer) {
            return Err(FinchatError::invalid_input(format!(
                "'{answer}' no es una opción válida para {}",
                question.key.as_str()
            )));
        }

        self.profile.set(question.key, answer);

        if self.step + 1 < QUESTIONS.len() {
            self.step += 1;
            Ok(StepOutcome::Advanced)
        } else {
            self.completed = true;
            Ok(StepOutcome::Completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picks the first option of every step in order.
    fn run_to_completion(onboarding: &mut Onboarding) {
        for question in QUESTIONS.iter() {
            let outcome = onboarding.submit(question.options[0]).unwrap();
            if question.key == ProfileKey::DolorPrincipal {
                assert_eq!(outcome, StepOutcome::Completed);
            } else {
                assert_eq!(outcome, StepOutcome::Advanced);
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let onboarding = Onboarding::new();
        assert_eq!(onboarding.step(), 0);
        assert!(!onboarding.is_completed());
        assert!(onboarding.profile().is_empty());
        assert_eq!(
            onboarding.current_question().unwrap().key,
            ProfileKey::Industria
        );
    }

    #[test]
    fn test_full_run_populates_every_key() {
        let mut onboarding = Onboarding::new();
        run_to_completion(&mut onboarding);

        assert!(onboarding.is_completed());
        assert!(onboarding.current_question().is_none());
        assert!(onboarding.profile().is_complete());
        assert_eq!(
            onboarding.profile().entries().count(),
            QUESTIONS.len()
        );
    }

    #[test]
    fn test_submit_past_terminal_state_is_rejected() {
        let mut onboarding = Onboarding::new();
        run_to_completion(&mut onboarding);

        let err = onboarding.submit("Agricultura").unwrap_err();
        assert!(matches!(err, FinchatError::InvalidInput(_)));
        // The profile is untouched by the rejected submission.
        assert!(onboarding.profile().is_complete());
    }

    #[test]
    fn test_invalid_option_is_rejected_without_advancing() {
        let mut onboarding = Onboarding::new();
        let err = onboarding.submit("Pesca industrial").unwrap_err();
        assert!(matches!(err, FinchatError::InvalidInput(_)));
        assert_eq!(onboarding.step(), 0);
        assert!(onboarding.profile().is_empty());
    }

    #[test]
    fn test_resume_keeps_unreached_keys() {
        let mut prior = Profile::default();
        prior.set(ProfileKey::Industria, "Comercio");
        prior.set(ProfileKey::DolorPrincipal, "Deudas");

        let mut onboarding = Onboarding::resume(prior);
        onboarding.submit("Agricultura").unwrap();

        // First key overwritten, last key still holding its prior answer.
        assert_eq!(
            onboarding.profile().get(ProfileKey::Industria),
            Some("Agricultura")
        );
        assert_eq!(
            onboarding.profile().get(ProfileKey::DolorPrincipal),
            Some("Deudas")
        );
    }

    #[test]
    fn test_questions_cover_keys_in_canonical_order() {
        let keys: Vec<_> = QUESTIONS.iter().map(|question| question.key).collect();
        assert_eq!(keys, ProfileKey::ALL.to_vec());
    }
}
