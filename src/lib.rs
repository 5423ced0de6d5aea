//! Care Assist — a guided oral-care advisor.
//!
//! A five-question questionnaire scores the user's profile, a classifier
//! picks the primary issue, and a resolver maps it to a toothpaste and
//! toothbrush pair. An LLM enriches the advice text on a best-effort,
//! time-bounded basis; the static explanation always stands in when it
//! cannot.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod classifier;
pub mod config;
pub mod error;
pub mod llm;
pub mod profile;
pub mod questionnaire;
pub mod recommend;
pub mod routes;
