//! Task pipeline: validate, build prompt, generate.

use std::sync::Arc;

use tracing::{debug, info};

use crate::llm::TextGenerator;

use super::{prompts, TaskError, TaskRequest};

/// Runs analysis tasks against a generation backend.
///
/// Stateless between requests; cheap to clone into handler state.
#[derive(Clone)]
pub struct TaskRunner {
    generator: Arc<dyn TextGenerator>,
}

impl TaskRunner {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run a task to completion, returning the raw generated text.
    ///
    /// Validation failures short-circuit before any prompt is built or any
    /// call reaches the generation backend.
    pub async fn run(&self, task: &TaskRequest) -> Result<String, TaskError> {
        task.validate()?;

        let prompt = prompts::build(task);
        debug!(
            task = task.response_key(),
            model = task.model(),
            prompt_chars = prompt.len(),
            "Dispatching generation request"
        );

        let text = self.generator.generate(task.model(), &prompt).await?;
        info!(task = task.response_key(), chars = text.len(), "Task completed");
        Ok(text)
    }
}
