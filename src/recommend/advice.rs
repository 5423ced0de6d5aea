//! Best-effort advice enrichment.
//!
//! Wraps the LLM provider with a strict time budget and a mandatory
//! fallback: on any failure the static mapping explanation is used, so the
//! recommendation flow can never block or surface an enrichment error.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::AdvisorConfig;
use crate::error::LlmError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::profile::UserProfile;
use crate::recommend::Recommendation;

/// Result of an enrichment attempt. Either way there is advice text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
    /// The provider produced usable text within the budget.
    Enriched(String),
    /// The static explanation, after a failure or timeout.
    Fallback(String),
}

impl AdviceOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Enriched(text) | Self::Fallback(text) => text,
        }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, Self::Enriched(_))
    }
}

/// An outcome tagged with the session generation it was requested under.
/// Sessions discard outcomes from superseded generations.
#[derive(Debug, Clone)]
pub struct TaggedAdvice {
    pub generation: u64,
    pub outcome: AdviceOutcome,
}

/// Generates natural-language advice for resolved recommendations, plus
/// scope-limited free chat replies.
pub struct AdviceGenerator {
    llm: Arc<dyn LlmProvider>,
    agent_name: String,
    brand_name: String,
    timeout: Duration,
}

impl AdviceGenerator {
    pub fn new(llm: Arc<dyn LlmProvider>, config: &AdvisorConfig) -> Self {
        Self {
            llm,
            agent_name: config.agent_name.clone(),
            brand_name: config.brand_name.clone(),
            timeout: config.enrichment_timeout,
        }
    }

    /// Request a short rationale for the recommendation. Never fails:
    /// timeout, transport errors, and empty completions all degrade to the
    /// static explanation.
    pub async fn advise(&self, recommendation: &Recommendation) -> AdviceOutcome {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(self.advice_system_prompt(&recommendation.issue_label)),
            ChatMessage::user(profile_summary(recommendation)),
        ]);

        match tokio::time::timeout(self.timeout, self.llm.complete(request)).await {
            Ok(Ok(response)) => {
                debug!(model = %self.llm.model_name(), "advice enrichment succeeded");
                AdviceOutcome::Enriched(response.content)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "advice enrichment failed, using static explanation");
                AdviceOutcome::Fallback(recommendation.explanation.clone())
            }
            Err(_) => {
                warn!(
                    budget_ms = self.timeout.as_millis() as u64,
                    "advice enrichment timed out, using static explanation"
                );
                AdviceOutcome::Fallback(recommendation.explanation.clone())
            }
        }
    }

    /// [`advise`](Self::advise) tagged with the generation the session had
    /// when the request was launched.
    pub async fn advise_tagged(
        &self,
        generation: u64,
        recommendation: &Recommendation,
    ) -> TaggedAdvice {
        TaggedAdvice {
            generation,
            outcome: self.advise(recommendation).await,
        }
    }

    /// Answer a free-form question within the advisor's scope. Unlike
    /// enrichment this has no canned fallback; callers map the error to a
    /// generic failure message.
    pub async fn chat_reply(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(self.chat_system_prompt(context)),
            ChatMessage::user(message),
        ])
        .with_max_tokens(100);

        let response = tokio::time::timeout(self.timeout, self.llm.complete(request))
            .await
            .map_err(|_| LlmError::Timeout {
                provider: self.llm.model_name().to_string(),
                budget: self.timeout,
            })??;
        Ok(response.content)
    }

    fn advice_system_prompt(&self, issue_label: &str) -> String {
        format!(
            "You are {agent}, the friendly AI oral care advisor for {brand}, an eco-friendly \
             sustainable dental care brand.\n\n\
             Your job is to explain WHY the recommended products will help the user's \
             specific oral issue. Be warm, reassuring, and educational.\n\n\
             Guidelines:\n\
             - Focus on the user's PRIMARY issue: {issue}\n\
             - Explain how the recommended products address their specific concern\n\
             - Mention the sustainable/eco-friendly aspect naturally\n\
             - Keep it to 2-3 sentences max\n\
             - Be confident but not medical - you're a wellness advisor, not a dentist\n\
             - If severity is high, gently suggest consulting a dentist for persistent issues\n\n\
             Do NOT list product names - just give caring, personalized advice.",
            agent = self.agent_name,
            brand = self.brand_name,
            issue = issue_label,
        )
    }

    fn chat_system_prompt(&self, context: Option<&str>) -> String {
        format!(
            "You are {agent}, the friendly AI oral care assistant for {brand} - a \
             sustainable dental care brand.\n\n\
             You ONLY help with these 4 oral issues:\n\
             1. Tooth Sensitivity\n\
             2. Plaque Buildup\n\
             3. Oral Ulcers / Mouth Sores\n\
             4. Bad Breath\n\n\
             If asked about other dental issues (whitening, cavities, gum disease, etc.), \
             politely explain that {brand} focuses on these 4 common daily concerns and \
             suggest consulting a dentist for other issues.\n\n\
             Keep responses brief (1-2 sentences), warm, and helpful. Emphasize \
             sustainability and natural ingredients when relevant.\n\n\
             Current context: {context}",
            agent = self.agent_name,
            brand = self.brand_name,
            context = context.unwrap_or("General conversation"),
        )
    }
}

/// Grounding context for the enrichment call: issue, raw answers, the
/// chosen products' rationale, and the base explanation.
fn profile_summary(recommendation: &Recommendation) -> String {
    let profile: &UserProfile = &recommendation.profile;
    let answer = |id: &str| profile.answer(id).unwrap_or("Not specified").to_string();
    format!(
        "User's Primary Oral Issue: {issue}\n\
         Frequency: {frequency}\n\
         Trigger: {trigger}\n\
         Severity: {severity}\n\n\
         Recommended Products:\n\
         - Toothpaste: {paste} ({paste_why})\n\
         - Toothbrush: {brush} ({brush_why})\n\n\
         Base explanation: {explanation}",
        issue = recommendation.issue_label,
        frequency = answer("q2"),
        trigger = answer("q3"),
        severity = answer("q4"),
        paste = recommendation.toothpaste.name,
        paste_why = recommendation.toothpaste.why_it_works,
        brush = recommendation.toothbrush.name,
        brush_why = recommendation.toothbrush.why_it_works,
        explanation = recommendation.explanation,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::catalog::Catalog;
    use crate::llm::{CompletionRequest, CompletionResponse};
    use crate::recommend::Resolver;

    struct StaticProvider(&'static str);

    #[async_trait]
    impl LlmProvider for StaticProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                content: self.0.to_string(),
                input_tokens: 0,
                output_tokens: 0,
            })
        }

        fn model_name(&self) -> &str {
            "static-test"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::RequestFailed {
                provider: "test".to_string(),
                reason: "connection refused".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "failing-test"
        }
    }

    struct StalledProvider;

    #[async_trait]
    impl LlmProvider for StalledProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!("sleep outlives every test timeout")
        }

        fn model_name(&self) -> &str {
            "stalled-test"
        }
    }

    fn recommendation() -> Recommendation {
        let resolver = Resolver::new(Arc::new(Catalog::verident())).unwrap();
        resolver.resolve("plaque", &UserProfile::default())
    }

    fn generator(llm: Arc<dyn LlmProvider>, timeout: Duration) -> AdviceGenerator {
        let config = AdvisorConfig {
            enrichment_timeout: timeout,
            ..AdvisorConfig::default()
        };
        AdviceGenerator::new(llm, &config)
    }

    #[tokio::test]
    async fn successful_completion_is_enriched() {
        let generator = generator(
            Arc::new(StaticProvider("Zinc fights the biofilm at its source.")),
            Duration::from_secs(1),
        );
        let outcome = generator.advise(&recommendation()).await;
        assert!(outcome.is_enriched());
        assert_eq!(outcome.text(), "Zinc fights the biofilm at its source.");
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_explanation() {
        let generator = generator(Arc::new(FailingProvider), Duration::from_secs(1));
        let rec = recommendation();
        let outcome = generator.advise(&rec).await;
        assert!(!outcome.is_enriched());
        assert_eq!(outcome.text(), rec.explanation);
        assert!(!outcome.text().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_falls_back_to_explanation() {
        let generator = generator(Arc::new(StalledProvider), Duration::from_millis(50));
        let rec = recommendation();
        let outcome = generator.advise(&rec).await;
        assert_eq!(outcome, AdviceOutcome::Fallback(rec.explanation.clone()));
    }

    #[tokio::test(start_paused = true)]
    async fn chat_reply_times_out_with_typed_error() {
        let generator = generator(Arc::new(StalledProvider), Duration::from_millis(50));
        let result = generator.chat_reply("what is plaque?", None).await;
        assert!(matches!(result, Err(LlmError::Timeout { .. })));
    }

    #[tokio::test]
    async fn tagged_outcome_carries_generation() {
        let generator = generator(Arc::new(FailingProvider), Duration::from_secs(1));
        let tagged = generator.advise_tagged(7, &recommendation()).await;
        assert_eq!(tagged.generation, 7);
    }

    #[test]
    fn summary_includes_grounding_context() {
        let mut rec = recommendation();
        rec.profile.record_answer("q2", "daily");
        let summary = profile_summary(&rec);
        assert!(summary.contains("Plaque Buildup"));
        assert!(summary.contains("Frequency: daily"));
        assert!(summary.contains("Trigger: Not specified"));
        assert!(summary.contains(&rec.toothpaste.why_it_works));
        assert!(summary.contains(&rec.explanation));
    }
}
