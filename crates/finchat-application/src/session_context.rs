//! Session context use case.
//!
//! [`SessionContext`] owns every piece of per-session mutable state — the
//! logged-in user, the profile, the onboarding run, the chat log and the
//! flattened workbook context — and orchestrates the account store, the
//! prompt builder and the model agent. Nothing here lives in globals; the
//! context is created at startup and passed to whoever drives the session.

use finchat_core::error::{FinchatError, Result};
use finchat_core::onboarding::{Onboarding, OnboardingQuestion, StepOutcome};
use finchat_core::prompt::{self, FINANCIAL_ANALYST_PERSONA, IndustryKnowledge, Persona};
use finchat_core::session::{ChatSession, ChatTurn, MessageRole};
use finchat_core::user::{AccountStore, LoginThrottle, Profile};
use finchat_interaction::ModelAgent;
use std::sync::Arc;

/// Generic credential failure message.
///
/// Deliberately identical for unknown email and wrong password; being more
/// specific would leak which accounts exist.
pub const LOGIN_FAILURE_MESSAGE: &str = "Correo o contraseña incorrectos.";

/// Message shown when the throttle rejects a login attempt.
pub const THROTTLED_MESSAGE: &str =
    "Demasiados intentos fallidos. Espera unos minutos antes de volver a intentarlo.";

/// The session-scoped application context.
pub struct SessionContext {
    store: Arc<dyn AccountStore>,
    agent: Arc<dyn ModelAgent>,
    persona: Persona,
    knowledge: IndustryKnowledge,
    throttle: LoginThrottle,
    current_user: Option<String>,
    profile: Profile,
    onboarding: Option<Onboarding>,
    chat: ChatSession,
    workbook_context: Option<String>,
}

impl SessionContext {
    /// Creates a context with the default persona and knowledge table.
    pub fn new(store: Arc<dyn AccountStore>, agent: Arc<dyn ModelAgent>) -> Self {
        Self {
            store,
            agent,
            persona: FINANCIAL_ANALYST_PERSONA,
            knowledge: IndustryKnowledge::default(),
            throttle: LoginThrottle::default(),
            current_user: None,
            profile: Profile::default(),
            onboarding: None,
            chat: ChatSession::new(),
            workbook_context: None,
        }
    }

    /// Overrides the persona after construction.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    /// Overrides the knowledge table after construction.
    pub fn with_knowledge(mut self, knowledge: IndustryKnowledge) -> Self {
        self.knowledge = knowledge;
        self
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Registers a new account and logs it in with an empty profile.
    pub fn register(&mut self, email: &str, password: &str) -> Result<()> {
        self.store.create(email, password, Profile::default())?;
        self.current_user = Some(email.to_string());
        self.profile = Profile::default();
        tracing::info!(email, "session registered");
        Ok(())
    }

    /// Authenticates and loads the stored profile into the session.
    ///
    /// Failures count against the per-identity throttle and surface one
    /// generic `Auth` message.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        if !self.throttle.check(email) {
            return Err(FinchatError::auth(THROTTLED_MESSAGE));
        }

        match self.store.authenticate(email, password)? {
            Some(profile) => {
                self.throttle.record_success(email);
                self.current_user = Some(email.to_string());
                self.profile = profile;
                tracing::info!(email, "session logged in");
                Ok(())
            }
            None => {
                self.throttle.record_failure(email);
                Err(FinchatError::auth(LOGIN_FAILURE_MESSAGE))
            }
        }
    }

    /// The logged-in email, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// The session's profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // ========================================================================
    // Onboarding
    // ========================================================================

    /// Starts (or restarts) the onboarding questionnaire over the current
    /// profile and returns the first question.
    pub fn begin_onboarding(&mut self) -> &'static OnboardingQuestion {
        let onboarding = Onboarding::resume(self.profile.clone());
        self.onboarding = Some(onboarding);
        // A fresh run always has a current question.
        self.onboarding
            .as_ref()
            .and_then(Onboarding::current_question)
            .expect("fresh onboarding has a first question")
    }

    /// The active onboarding question, if a run is in progress.
    pub fn onboarding_question(&self) -> Option<&'static OnboardingQuestion> {
        self.onboarding.as_ref().and_then(Onboarding::current_question)
    }

    /// Submits the answer for the current onboarding step.
    ///
    /// On completion the profile becomes the session profile and, when a
    /// user is logged in, is persisted through the account store.
    pub fn submit_onboarding_answer(&mut self, answer: &str) -> Result<StepOutcome> {
        let onboarding = self
            .onboarding
            .as_mut()
            .ok_or_else(|| FinchatError::invalid_input("no hay un cuestionario en curso"))?;

        let outcome = onboarding.submit(answer)?;

        if outcome == StepOutcome::Completed {
            let onboarding = self.onboarding.take().expect("onboarding is active");
            self.profile = onboarding.into_profile();
            if let Some(email) = &self.current_user {
                self.store.set_profile(email, self.profile.clone())?;
            }
            tracing::info!("onboarding completed");
        }

        Ok(outcome)
    }

    // ========================================================================
    // Workbook context
    // ========================================================================

    /// Replaces the flattened spreadsheet context. Regenerated fresh on every
    /// upload; never cached across files.
    pub fn set_workbook_context(&mut self, context: impl Into<String>) {
        self.workbook_context = Some(context.into());
    }

    /// Drops the current spreadsheet context.
    pub fn clear_workbook_context(&mut self) {
        self.workbook_context = None;
    }

    /// True when a spreadsheet context is loaded.
    pub fn has_workbook_context(&self) -> bool {
        self.workbook_context.is_some()
    }

    // ========================================================================
    // Chat
    // ========================================================================

    /// Asks one question: builds the prompt, calls the model, appends both
    /// turns to the chat log and returns the reply text.
    ///
    /// A failed model call never fails the session: the error text becomes
    /// the assistant's turn, mirroring what the user sees.
    pub async fn ask(&mut self, question: &str) -> String {
        let built = prompt::build(
            &self.persona,
            &self.knowledge,
            &self.profile,
            self.workbook_context.as_deref(),
            question,
        );

        let reply = match self.agent.generate(&built).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "model call failed");
                format!("Error generando respuesta: {e}")
            }
        };

        self.chat.append(MessageRole::User, question);
        self.chat.append(MessageRole::Assistant, reply.clone());
        reply
    }

    /// The full ordered chat history.
    pub fn history(&self) -> &[ChatTurn] {
        self.chat.history()
    }

    /// Empties the chat log.
    pub fn clear_chat(&mut self) {
        self.chat.clear();
    }
}
