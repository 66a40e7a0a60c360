use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three expert personas a request can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertKind {
    Resume,
    CoverLetter,
    Interview,
}

impl ExpertKind {
    pub const ALL: [ExpertKind; 3] = [
        ExpertKind::Resume,
        ExpertKind::CoverLetter,
        ExpertKind::Interview,
    ];

    /// Wire identifier used in the `expert` form field.
    pub fn id(self) -> &'static str {
        match self {
            ExpertKind::Resume => "resume",
            ExpertKind::CoverLetter => "cover_letter",
            ExpertKind::Interview => "interview",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ExpertKind::Resume => "ResumeDoctor",
            ExpertKind::CoverLetter => "CoverLetterWriter",
            ExpertKind::Interview => "InterviewCoach",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExpertKind::Resume => "Rewrites and enhances resumes for better impact",
            ExpertKind::CoverLetter => "Creates job-specific cover letters",
            ExpertKind::Interview => "Generates tailored interview questions and prep",
        }
    }
}

impl fmt::Display for ExpertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExpertKind {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpertKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| RoutingError::UnknownExpert(s.to_string()))
    }
}

/// Failures detected before (or instead of) an expert call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("Unknown expert: {0}. Available: resume, cover_letter, interview")]
    UnknownExpert(String),

    #[error("Job title is required for cover letter generation")]
    MissingJobTitle,

    #[error("Expert routing failed: {0}")]
    Failed(String),
}

/// Optional job metadata attached to a request. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobContext {
    job_title: Option<String>,
    job_description: Option<String>,
}

impl JobContext {
    pub fn new(job_title: Option<String>, job_description: Option<String>) -> Self {
        Self {
            job_title: job_title.filter(|t| !t.trim().is_empty()),
            job_description: job_description.filter(|d| !d.trim().is_empty()),
        }
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn job_description(&self) -> Option<&str> {
        self.job_description.as_deref()
    }
}

/// Outcome of routing one request.
///
/// Serialized to the shapes the frontend consumes:
/// - `Success`  → `{"expert", "result", "status": "success"}`
/// - `Failure`  → `{"expert", "error", "status": "error"}`
/// - `Rejected` → `{"error"}` (nothing was dispatched)
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEnvelope {
    Success { expert: ExpertKind, result: String },
    Failure { expert: ExpertKind, error: String },
    Rejected { error: String },
}

impl ResultEnvelope {
    pub fn is_success(&self) -> bool {
        matches!(self, ResultEnvelope::Success { .. })
    }
}

impl From<RoutingError> for ResultEnvelope {
    fn from(e: RoutingError) -> Self {
        ResultEnvelope::Rejected {
            error: e.to_string(),
        }
    }
}

impl Serialize for ResultEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResultEnvelope::Success { expert, result } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("expert", expert.display_name())?;
                map.serialize_entry("result", result)?;
                map.serialize_entry("status", "success")?;
                map.end()
            }
            ResultEnvelope::Failure { expert, error } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("expert", expert.display_name())?;
                map.serialize_entry("error", error)?;
                map.serialize_entry("status", "error")?;
                map.end()
            }
            ResultEnvelope::Rejected { error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}
