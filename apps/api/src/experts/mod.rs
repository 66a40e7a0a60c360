// Expert routing: three resume personas behind one router.
// All LLM calls go through llm_client::ChatCompleter, never direct provider calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod router;

pub use models::{ExpertKind, JobContext, ResultEnvelope};
pub use router::ExpertRouter;
