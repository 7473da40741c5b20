//! Multi-model snippet generation
//!
//! Fans out the generation prompt to every generator model in roster order,
//! captures per-model failures without aborting the run, then asks the
//! combiner model to merge the candidates. A combiner failure falls back to
//! the first successful candidate.

use snipforge_core::Snippet;

use crate::client::OpenRouterClient;
use crate::config::ModelRoster;
use crate::errors::Result;
use crate::prompts::{build_combiner_prompt, build_generation_prompt, GenerationInputs};

/// Sampling settings for candidate generation
const GENERATION_TEMPERATURE: f32 = 0.7;
/// Sampling settings for combining; lower for a steadier merge
const COMBINER_TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 2000;

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub snippet_name: String,
    pub context: String,
    pub similar_snippets: Vec<Snippet>,
    pub rubric_content: Option<String>,
}

/// One model's slot in the run
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    /// Model display name
    pub model: String,
    /// Candidate content, or the captured error placeholder
    pub content: String,
    /// Whether the model produced real content
    pub succeeded: bool,
}

/// Result of a full generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// Every generator's slot, in roster order
    pub responses: Vec<ModelResponse>,
    /// Combined final content (or the fallback candidate)
    pub final_content: String,
}

/// Generate snippet content using every roster model and combine the results
///
/// Models run sequentially in roster order; a failed model's slot records
/// `"Error generating with {name}"` and the run continues.
pub async fn generate_snippet(
    client: &OpenRouterClient,
    roster: &ModelRoster,
    request: &GenerationRequest,
) -> Result<GenerationOutcome> {
    let inputs = GenerationInputs {
        snippet_name: &request.snippet_name,
        context: &request.context,
        similar_snippets: &request.similar_snippets,
        rubric_content: request.rubric_content.as_deref(),
    };
    let generation_prompt = build_generation_prompt(&inputs);

    let mut responses = Vec::with_capacity(roster.generators.len());
    for model in &roster.generators {
        tracing::info!(model = %model.name, snippet = %request.snippet_name, "generating candidate");

        match client
            .complete(
                &model.id,
                generation_prompt.clone(),
                GENERATION_TEMPERATURE,
                MAX_TOKENS,
            )
            .await
        {
            Ok(content) => responses.push(ModelResponse {
                model: model.name.clone(),
                content,
                succeeded: true,
            }),
            Err(e) => {
                tracing::warn!(model = %model.name, error = %e, "candidate generation failed");
                responses.push(ModelResponse {
                    model: model.name.clone(),
                    content: format!("Error generating with {}", model.name),
                    succeeded: false,
                });
            }
        }
    }

    let combiner_prompt = build_combiner_prompt(
        &request.snippet_name,
        &request.context,
        &responses,
        request.rubric_content.as_deref(),
    );

    tracing::info!(model = %roster.combiner.name, "combining candidates");

    let final_content = match client
        .complete(
            &roster.combiner.id,
            combiner_prompt,
            COMBINER_TEMPERATURE,
            MAX_TOKENS,
        )
        .await
    {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, "combiner failed, falling back to first candidate");
            fallback_content(&responses)
        }
    };

    Ok(GenerationOutcome {
        responses,
        final_content,
    })
}

/// First successful candidate, else a fixed failure marker
fn fallback_content(responses: &[ModelResponse]) -> String {
    responses
        .iter()
        .find(|r| r.succeeded)
        .map(|r| r.content.clone())
        .unwrap_or_else(|| "Failed to generate snippet".to_string())
}
