//! Rest-area info orchestration
//!
//! Wraps a single generative-text call: builds the menu/address prompt for
//! a rest-area name and relays the provider's answer verbatim.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::GenerativeTextPort;

/// Transient `/get_info` request payload
#[derive(Debug, Clone, Deserialize)]
pub struct InfoQuery {
    /// Rest-area name to look up
    pub name: String,
}

/// Orchestrates the info flow
pub struct InfoService {
    generator: Arc<dyn GenerativeTextPort>,
}

impl std::fmt::Debug for InfoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoService").finish_non_exhaustive()
    }
}

impl InfoService {
    /// Create a new info service over the given port
    #[must_use]
    pub fn new(generator: Arc<dyn GenerativeTextPort>) -> Self {
        Self { generator }
    }

    /// Describe a rest area by name.
    ///
    /// The name is embedded into a fixed prompt asking for the facility's
    /// two representative menu items, plain text only. The answer is
    /// returned verbatim, without parsing or structuring.
    #[instrument(skip(self))]
    pub async fn describe(&self, rest_area_name: &str) -> Result<String, ApplicationError> {
        let prompt = build_prompt(rest_area_name);
        debug!(%prompt, "Submitting rest-area info prompt");

        let answer = self.generator.generate(&prompt).await?;
        debug!(answer_len = answer.len(), "Received rest-area info");

        Ok(answer)
    }
}

/// Build the fixed info prompt for a rest-area name
fn build_prompt(rest_area_name: &str) -> String {
    format!(
        "Find the highway rest area named \"{rest_area_name}\" and list exactly \
         two menu items it actually sells, each followed by a one-line plain \
         description. No markdown, no bold, no extra commentary."
    )
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::ports::MockGenerativeTextPort;

    #[tokio::test]
    async fn prompt_embeds_rest_area_name() {
        let mut generator = MockGenerativeTextPort::new();
        generator
            .expect_generate()
            .with(function(|prompt: &str| {
                prompt.contains("Anseong Rest Area") && prompt.contains("two menu items")
            }))
            .return_once(|_| Ok("Sotteok sotteok\nA skewer of rice cake and sausage.".to_string()));

        let service = InfoService::new(Arc::new(generator));
        let info = service.describe("Anseong Rest Area").await.expect("info");

        assert!(info.starts_with("Sotteok sotteok"));
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let mut generator = MockGenerativeTextPort::new();
        generator
            .expect_generate()
            .return_once(|_| Err(ApplicationError::InfoUnavailable("no candidates".to_string())));

        let service = InfoService::new(Arc::new(generator));
        let err = service.describe("Anseong Rest Area").await.expect_err("fails");

        assert!(matches!(err, ApplicationError::InfoUnavailable(_)));
    }

    #[tokio::test]
    async fn empty_name_is_not_validated() {
        // The contract forwards whatever name the client sent.
        let mut generator = MockGenerativeTextPort::new();
        generator
            .expect_generate()
            .return_once(|_| Ok("No such facility.".to_string()));

        let service = InfoService::new(Arc::new(generator));
        assert!(service.describe("").await.is_ok());
    }
}
