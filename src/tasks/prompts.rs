//! Prompt templates for the four task kinds.
//!
//! Each template is a fixed instruction skeleton with the task payload
//! interpolated verbatim. Document text is not delimited or escaped, so
//! instructions embedded in a document can leak into the prompt; known
//! limitation of the upstream contract, kept as-is.

use super::TaskRequest;

/// Build the full prompt for a task. Pure and deterministic.
pub fn build(task: &TaskRequest) -> String {
    match task {
        TaskRequest::Summarize { text, language } => format!(
            "Summarize the following legal text into structured sections with headings in {}:\n\
             1. Parties\n2. Purpose\n3. Rent & Deposit\n4. Responsibilities\n5. Termination\n6. Consequences\n\
             Keep each point short and clear. Do not use asterisks or markdown.\n\n{}",
            language, text
        ),
        TaskRequest::Risks { text } => format!(
            "Identify risky or unfavorable clauses in this legal text. \
             Highlight financial liability, one-sided obligations, penalties, or vague terms. \
             Return them as a list of risks with short explanations.\n\n{}",
            text
        ),
        TaskRequest::Qa { text, question } => format!(
            "Based on this legal text, answer the question:\n\
             Question: {}\n\n\
             Text:\n{}\n\n\
             Give a clear, concise legal answer. Quote the relevant clause if possible.",
            question, text
        ),
        TaskRequest::Compare { text_a, text_b } => format!(
            "Compare these two contracts. Highlight differences in: Parties, Rent, Termination clauses, \
             Responsibilities, and Liabilities. Show only key changes, not full text.\n\n\
             Contract A:\n{}\n\nContract B:\n{}",
            text_a, text_b
        ),
    }
}
