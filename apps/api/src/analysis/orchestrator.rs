//! Analysis Orchestrator: runs the pipeline once per job, in catalog order.
//!
//! Flow per job: build_prompt → invoke → sanitize → decode.
//!
//! Jobs are processed one at a time. A decode failure becomes a fallback entry
//! and the batch continues; an invocation failure aborts the whole batch and
//! discards results already produced.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::analysis::decoder::{decode, AnalysisOutcome};
use crate::analysis::invoker::ModelInvoker;
use crate::analysis::prompt_builder::{build_prompt, MatchRequest};
use crate::analysis::sanitizer::sanitize;
use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::analysis::AnalysisResult;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;

/// Drives the per-job pipeline against an injected model capability.
#[derive(Clone)]
pub struct Analyzer {
    invoker: Arc<dyn ModelInvoker>,
}

impl Analyzer {
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self { invoker }
    }

    /// Returns one result per job, `results[i]` belonging to `jobs[i]`.
    pub async fn analyze(
        &self,
        resume: &ResumeRecord,
        jobs: &[JobPosting],
    ) -> Result<Vec<AnalysisResult>, AppError> {
        let mut results = Vec::with_capacity(jobs.len());
        let mut fallbacks = 0usize;

        for (index, job) in jobs.iter().enumerate() {
            info!(
                "Analyzing job {}/{}: id={} title={:?}",
                index + 1,
                jobs.len(),
                job.id,
                job.title
            );

            let outcome = self
                .analyze_one(MatchRequest { resume, job })
                .await
                .map_err(|e| {
                    error!("Model invocation failed for job {}: {e}", job.id);
                    AppError::Llm(format!("Analysis failed for job {}: {e}", job.id))
                })?;

            let is_fallback = outcome.is_fallback();
            let result = outcome.into_result();
            if is_fallback {
                fallbacks += 1;
                warn!("Unparseable model output for job {}: {}", job.id, result.summary);
            }

            results.push(result);
        }

        info!(
            "Analysis complete: {} results ({} fallbacks)",
            results.len(),
            fallbacks
        );

        Ok(results)
    }

    async fn analyze_one(&self, request: MatchRequest<'_>) -> Result<AnalysisOutcome, LlmError> {
        let prompt = build_prompt(&request);
        let raw = self.invoker.invoke(&prompt).await?;

        debug!(
            "Model returned {} chars for job {}",
            raw.as_deref().map_or(0, str::len),
            request.job.id
        );

        let candidate = sanitize(raw.as_deref());
        Ok(decode(&candidate))
    }
}
