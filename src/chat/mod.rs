//! Chat session orchestration.
//!
//! A session owns one questionnaire engine, the message transcript, and the
//! resolved recommendation once the questionnaire completes. Sessions are
//! single-owner; concurrent sessions each get their own.

pub mod cli;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::{Catalog, Question};
use crate::classifier::identify_primary_issue;
use crate::error::{CatalogError, SessionError};
use crate::questionnaire::{QuestionnaireEngine, SubmittedAnswer};
use crate::recommend::{Recommendation, Resolver, TaggedAdvice};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Assistant,
    User,
}

/// How a message should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain conversational text.
    Text,
    /// A question whose answer options should be offered.
    Options,
    /// The resolved recommendation card.
    Recommendation,
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: MessageRole, kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

/// A guided advisory conversation.
pub struct ChatSession {
    catalog: Arc<Catalog>,
    engine: QuestionnaireEngine,
    resolver: Resolver,
    messages: Vec<Message>,
    recommendation: Option<Recommendation>,
}

impl ChatSession {
    /// Open a session: validates the catalog, greets, and asks the first
    /// question.
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, CatalogError> {
        let resolver = Resolver::new(Arc::clone(&catalog))?;
        let engine = QuestionnaireEngine::new(Arc::clone(&catalog));
        let mut session = Self {
            catalog,
            engine,
            resolver,
            messages: Vec::new(),
            recommendation: None,
        };
        session.push_greeting();
        session.push_current_question();
        Ok(session)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Answer the current question by option id. Appends the user's choice,
    /// the category acknowledgement, and the next question (if any) to the
    /// transcript.
    pub fn answer(&mut self, option_id: &str) -> Result<SubmittedAnswer, SessionError> {
        let submitted = self.engine.submit_answer(option_id)?;

        self.push(MessageRole::User, MessageKind::Text, &submitted.option_label);
        if let Some(transition) = &submitted.transition {
            self.push(MessageRole::Assistant, MessageKind::Text, transition);
        }
        if !submitted.complete {
            self.push_current_question();
        }
        Ok(submitted)
    }

    /// Classify the completed profile and resolve the recommendation. The
    /// result carries the static explanation as advice until enrichment
    /// replaces it via [`apply_advice`](Self::apply_advice).
    pub fn classify_and_resolve(&mut self) -> Result<&Recommendation, SessionError> {
        if !self.engine.is_complete() {
            return Err(SessionError::Incomplete {
                answered: self.engine.current_step(),
                total: self.engine.total_steps(),
            });
        }

        let primary_issue = identify_primary_issue(self.engine.profile());
        info!(issue = %primary_issue, "questionnaire complete, resolving recommendation");
        let recommendation = self.resolver.resolve(&primary_issue, self.engine.profile());

        self.messages.push(Message::new(
            MessageRole::Assistant,
            MessageKind::Recommendation,
            recommendation.explanation.clone(),
        ));
        Ok(self.recommendation.insert(recommendation))
    }

    /// Apply an enrichment outcome. Outcomes tagged with a superseded
    /// generation are dropped; returns whether the advice was applied.
    pub fn apply_advice(&mut self, advice: TaggedAdvice) -> bool {
        if advice.generation != self.engine.generation() {
            debug!(
                tagged = advice.generation,
                current = self.engine.generation(),
                "discarding stale advice"
            );
            return false;
        }
        match self.recommendation.as_mut() {
            Some(recommendation) => {
                recommendation.advice = advice.outcome.text().to_string();
                true
            }
            None => false,
        }
    }

    /// Start over: clears the transcript and recommendation, resets the
    /// questionnaire, and greets again. In-flight enrichment for the old
    /// run will be dropped by its stale generation tag.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.messages.clear();
        self.recommendation = None;
        self.push_greeting();
        self.push_current_question();
    }

    fn push(&mut self, role: MessageRole, kind: MessageKind, content: &str) {
        self.messages.push(Message::new(role, kind, content));
    }

    fn push_greeting(&mut self) {
        if let Some(greeting) = self.catalog.greetings.choose(&mut rand::thread_rng()) {
            let greeting = greeting.clone();
            self.push(MessageRole::Assistant, MessageKind::Text, &greeting);
        }
    }

    fn push_current_question(&mut self) {
        if let Some(question) = self.engine.current_question() {
            let text = question.text.clone();
            self.push(MessageRole::Assistant, MessageKind::Options, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::AdviceOutcome;

    fn session() -> ChatSession {
        ChatSession::new(Arc::new(Catalog::verident())).unwrap()
    }

    fn complete(session: &mut ChatSession, options: [&str; 5]) {
        for option in options {
            session.answer(option).unwrap();
        }
    }

    #[test]
    fn opens_with_greeting_and_first_question() {
        let session = session();
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, MessageRole::Assistant);
        assert_eq!(session.messages()[1].kind, MessageKind::Options);
        assert_eq!(session.current_question().unwrap().id, "q1");
    }

    #[test]
    fn answer_appends_choice_transition_and_next_question() {
        let mut session = session();
        let before = session.messages().len();
        session.answer("q1-a").unwrap();
        let tail = &session.messages()[before..];
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[0].role, MessageRole::User);
        assert_eq!(tail[1].kind, MessageKind::Text);
        assert_eq!(tail[2].kind, MessageKind::Options);
    }

    #[test]
    fn resolve_before_completion_is_rejected() {
        let mut session = session();
        session.answer("q1-a").unwrap();
        assert!(matches!(
            session.classify_and_resolve(),
            Err(SessionError::Incomplete {
                answered: 1,
                total: 5
            })
        ));
    }

    #[test]
    fn completed_session_resolves_primary_issue() {
        let mut session = session();
        complete(&mut session, ["q1-c", "q2-a", "q3-d", "q4-b", "q5-a"]);
        let recommendation = session.classify_and_resolve().unwrap();
        assert_eq!(recommendation.primary_issue, "ulcers");
        assert_eq!(recommendation.toothpaste.id, "tp-ulcers");
        assert_eq!(
            session.messages().last().unwrap().kind,
            MessageKind::Recommendation
        );
    }

    #[test]
    fn advice_with_current_generation_is_applied() {
        let mut session = session();
        complete(&mut session, ["q1-a", "q2-a", "q3-a", "q4-a", "q5-a"]);
        session.classify_and_resolve().unwrap();
        let applied = session.apply_advice(TaggedAdvice {
            generation: session.generation(),
            outcome: AdviceOutcome::Enriched("Fresh advice.".to_string()),
        });
        assert!(applied);
        assert_eq!(session.recommendation().unwrap().advice, "Fresh advice.");
    }

    #[test]
    fn stale_advice_is_discarded_after_reset() {
        let mut session = session();
        complete(&mut session, ["q1-a", "q2-a", "q3-a", "q4-a", "q5-a"]);
        session.classify_and_resolve().unwrap();
        let stale_generation = session.generation();
        session.reset();
        let applied = session.apply_advice(TaggedAdvice {
            generation: stale_generation,
            outcome: AdviceOutcome::Enriched("Too late.".to_string()),
        });
        assert!(!applied);
        assert!(session.recommendation().is_none());
    }

    #[test]
    fn reset_restarts_the_transcript() {
        let mut session = session();
        complete(&mut session, ["q1-b", "q2-b", "q3-b", "q4-b", "q5-b"]);
        session.classify_and_resolve().unwrap();
        session.reset();
        assert_eq!(session.messages().len(), 2);
        assert!(!session.is_complete());
        assert_eq!(session.current_question().unwrap().id, "q1");
    }
}
