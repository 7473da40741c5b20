//! Prompt builders for snippet generation
//!
//! The generation prompt asks one model for a candidate snippet; the
//! combiner prompt asks a final model to merge the candidates. Both carry
//! the optional evaluation rubric when one was uploaded.

use snipforge_core::Snippet;

use crate::generate::ModelResponse;

/// Inputs for one snippet generation run
#[derive(Debug, Clone)]
pub struct GenerationInputs<'a> {
    /// Name of the snippet being created
    pub snippet_name: &'a str,
    /// Free-form user context / requirements
    pub context: &'a str,
    /// Similar snippets offered as reference material
    pub similar_snippets: &'a [Snippet],
    /// Cleaned rubric text, when a rubric was uploaded
    pub rubric_content: Option<&'a str>,
}

/// Build the prompt asking one model for a candidate snippet
pub fn build_generation_prompt(inputs: &GenerationInputs<'_>) -> String {
    let mut prompt = format!(
        "You are creating a prompt snippet called \"{}\".\n\nUser Context/Requirements:\n{}\n\n",
        inputs.snippet_name, inputs.context
    );

    if let Some(rubric) = inputs.rubric_content {
        prompt.push_str(&format!("Evaluation Rubric/Guidelines:\n{rubric}\n\n"));
    }

    if !inputs.similar_snippets.is_empty() {
        prompt.push_str("Here are some similar snippets for reference:\n\n");

        for snippet in inputs.similar_snippets {
            prompt.push_str(&format!("Snippet: {}\n", snippet.name));
            if let Some(description) = &snippet.description {
                prompt.push_str(&format!("Description: {description}\n"));
            }
            prompt.push_str(&format!("Content:\n{}\n\n---\n\n", snippet.content));
        }
    }

    let rubric_clause = if inputs.rubric_content.is_some() {
        ", evaluation rubric,"
    } else {
        ""
    };
    prompt.push_str(&format!(
        "Based on the context{} and similar snippets (if provided), create a high-quality prompt snippet for \"{}\". \n\nThe snippet should:\n1. Be clear, specific, and reusable\n2. Follow a similar structure to the reference snippets if applicable\n3. Be self-contained but work well when composed with other snippets\n4. Avoid redundancy with existing snippets\n",
        rubric_clause, inputs.snippet_name
    ));

    if inputs.rubric_content.is_some() {
        prompt.push_str(
            "5. Align with the evaluation criteria and guidelines provided in the rubric\n6. Address all key points and requirements mentioned in the rubric\n",
        );
    }

    prompt.push_str("\nProvide only the snippet content, without any additional explanation.");

    prompt
}

/// Build the prompt asking the combiner model to merge candidate versions
pub fn build_combiner_prompt(
    snippet_name: &str,
    context: &str,
    responses: &[ModelResponse],
    rubric_content: Option<&str>,
) -> String {
    let mut prompt = format!(
        "You are combining multiple AI-generated versions of a prompt snippet called \"{snippet_name}\".\n\nOriginal Context: {context}\n\n"
    );

    if let Some(rubric) = rubric_content {
        prompt.push_str(&format!("Evaluation Rubric/Guidelines:\n{rubric}\n\n"));
    }

    prompt.push_str("Here are the different versions:\n\n");

    for response in responses {
        prompt.push_str(&format!(
            "=== Version from {} ===\n{}\n\n",
            response.model, response.content
        ));
    }

    prompt.push_str(
        "Please analyze these versions and create a final, optimized version that:\n1. Combines the best elements from each version\n2. Maintains consistency and clarity\n3. Removes any redundancy\n4. Ensures the snippet is self-contained and reusable\n",
    );

    if rubric_content.is_some() {
        prompt.push_str(
            "5. Strictly adheres to all evaluation criteria and guidelines in the rubric\n6. Prioritizes rubric requirements when there are conflicts between versions\n",
        );
    }

    prompt.push_str("\nProvide only the final snippet content, without any additional explanation.");

    prompt
}
