//! Expert Router: picks the persona prompt for a request and runs it through the LLM.
//!
//! Flow: parse expert id → validate → build prompt → ChatCompleter::complete → wrap envelope.
//!
//! Validation failures short-circuit before any upstream call. LLM failures are
//! caught per expert and reported inside the envelope; nothing here returns `Err`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::experts::models::{ExpertKind, JobContext, ResultEnvelope, RoutingError};
use crate::experts::prompts::{
    build_cover_letter_prompt, build_interview_prompt, build_resume_prompt,
};
use crate::llm_client::{ChatCompleter, ChatMessage, DEFAULT_TEMPERATURE};

#[derive(Clone)]
pub struct ExpertRouter {
    llm: Arc<dyn ChatCompleter>,
}

impl ExpertRouter {
    pub fn new(llm: Arc<dyn ChatCompleter>) -> Self {
        Self { llm }
    }

    /// Routes a request whose expert is still the raw form value.
    pub async fn route_request(
        &self,
        input_text: &str,
        expert: &str,
        job: &JobContext,
    ) -> ResultEnvelope {
        match expert.parse::<ExpertKind>() {
            Ok(kind) => self.route(input_text, kind, job).await,
            Err(e) => {
                warn!("Rejected request: {e}");
                e.into()
            }
        }
    }

    pub async fn route(
        &self,
        input_text: &str,
        expert: ExpertKind,
        job: &JobContext,
    ) -> ResultEnvelope {
        match self.dispatch(input_text, expert, job).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Routing to {expert} stopped before dispatch: {e}");
                e.into()
            }
        }
    }

    async fn dispatch(
        &self,
        input_text: &str,
        expert: ExpertKind,
        job: &JobContext,
    ) -> Result<ResultEnvelope, RoutingError> {
        if input_text.trim().is_empty() {
            return Err(RoutingError::Failed("input text is empty".to_string()));
        }

        let prompt = match expert {
            ExpertKind::Resume => build_resume_prompt(input_text, job),
            ExpertKind::CoverLetter => {
                let job_title = job.job_title().ok_or(RoutingError::MissingJobTitle)?;
                build_cover_letter_prompt(input_text, job_title, job)
            }
            ExpertKind::Interview => build_interview_prompt(input_text, job),
        };

        info!(
            "Dispatching to {} (input_chars={}, job_title={})",
            expert.display_name(),
            input_text.chars().count(),
            job.job_title().is_some()
        );

        Ok(self.run_expert(expert, prompt).await)
    }

    async fn run_expert(&self, expert: ExpertKind, prompt: String) -> ResultEnvelope {
        let messages = [ChatMessage::user(prompt)];

        let envelope = match self.llm.complete(&messages, DEFAULT_TEMPERATURE).await {
            Ok(result) => ResultEnvelope::Success { expert, result },
            Err(e) => ResultEnvelope::Failure {
                expert,
                error: e.to_string(),
            },
        };

        if !envelope.is_success() {
            warn!("{} failed: {:?}", expert.display_name(), envelope);
        }
        envelope
    }
}
