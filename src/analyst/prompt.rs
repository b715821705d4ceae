//! Prompt shaping around the model call.

/// Report layout the model is asked to follow. `{question}` is replaced with
/// the user's question.
pub const DATA_ANALYSIS_TEMPLATE: &str = "\
You are a data analyst, provide an explanation for the following analyst question:
Question: {question}
format of response should look like this:

1. Executive Summary (2-3 sentences)
    Clear, direct answer to the question without any disclaimers.

2. Key Metrics (table or bullet points)
    Metric Value

3. Insight & Interpretation
    Short paragraph explaining what the metrics mean in business terms.

4. Recommendations
    Action 1
    Action 2
";

/// Wrap a question in the report template. Surrounding whitespace is dropped.
pub fn format_analysis_prompt(question: &str) -> String {
    DATA_ANALYSIS_TEMPLATE.replace("{question}", question.trim())
}

/// Remove a code fence wrapping the whole answer (```` ```markdown ... ``` ````,
/// ```` ```json ... ``` ````). Fenced blocks inside the answer are kept.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed.to_string();
    };
    // Opening line may carry a language tag.
    let body = match body.split_once('\n') {
        Some((tag, inner)) if !tag.trim().contains(char::is_whitespace) => inner,
        _ => body,
    };
    body.trim().to_string()
}
