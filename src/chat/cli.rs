//! CLI channel — stdin/stdout guided questionnaire for local use.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::catalog::{Catalog, Question};
use crate::chat::ChatSession;
use crate::error::Result;
use crate::recommend::{AdviceGenerator, Recommendation};

/// Run the advisor conversation on stdin/stdout until EOF or `/quit`.
///
/// The questionnaire is answered by option number. After the
/// recommendation, free-form text goes to the scope-limited chat; at any
/// point `/restart` starts the questionnaire over.
pub async fn run(catalog: Arc<Catalog>, advice: Arc<AdviceGenerator>) -> Result<()> {
    let mut session = ChatSession::new(Arc::clone(&catalog))?;

    for message in session.messages() {
        println!("{}\n", message.content);
    }
    if let Some(question) = session.current_question() {
        print_options(question);
    }

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");
    loop {
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };

        let input = line.trim();
        if input.is_empty() {
            eprint!("> ");
            continue;
        }
        match input {
            "/quit" | "/exit" => break,
            "/restart" => {
                session.reset();
                for message in session.messages() {
                    println!("\n{}", message.content);
                }
                if let Some(question) = session.current_question() {
                    print_options(question);
                }
                eprint!("> ");
                continue;
            }
            _ => {}
        }

        if let Some(question) = session.current_question() {
            let Some(option_id) = pick_option(question, input) else {
                println!("Please answer with a number between 1 and {}.", question.options.len());
                eprint!("> ");
                continue;
            };
            // Validated against the current question, so this cannot fail.
            let submitted = session.answer(&option_id)?;
            if let Some(transition) = &submitted.transition {
                println!("\n{transition}\n");
            }
            if submitted.complete {
                let generation = session.generation();
                let recommendation = session.classify_and_resolve()?.clone();
                let tagged = advice.advise_tagged(generation, &recommendation).await;
                session.apply_advice(tagged);
                if let Some(recommendation) = session.recommendation() {
                    print_recommendation(recommendation);
                }
                println!("Ask me anything about these products, or /restart to begin again.");
            } else if let Some(next) = session.current_question() {
                println!("{}", next.text);
                print_options(next);
            }
        } else {
            let context = session
                .recommendation()
                .map(|r| format!("User was recommended products for {}", r.issue_label));
            match advice.chat_reply(input, context.as_deref()).await {
                Ok(reply) => println!("\n{reply}\n"),
                Err(e) => {
                    tracing::warn!(error = %e, "chat reply failed");
                    println!("\nSorry, I couldn't answer that right now. Try again in a moment.\n");
                }
            }
        }
        eprint!("> ");
    }

    Ok(())
}

fn print_options(question: &Question) {
    for (index, option) in question.options.iter().enumerate() {
        println!("  {}. {} {}", index + 1, option.emoji, option.label);
    }
    println!();
}

fn pick_option(question: &Question, input: &str) -> Option<String> {
    let number: usize = input.parse().ok()?;
    question
        .options
        .get(number.checked_sub(1)?)
        .map(|option| option.id.clone())
}

fn print_recommendation(recommendation: &Recommendation) {
    println!("--- Your personalized routine ({}) ---", recommendation.issue_label);
    for product in [&recommendation.toothpaste, &recommendation.toothbrush] {
        println!("  {} — {} ({}/5)", product.name, product.price, product.rating);
        println!("    {}", product.why_it_works);
    }
    if let Some(alt) = &recommendation.alternatives.toothpaste {
        println!("  Also consider: {} — {}", alt.name, alt.price);
    }
    if let Some(alt) = &recommendation.alternatives.toothbrush {
        println!("  Also consider: {} — {}", alt.name, alt.price);
    }
    println!("\n{}\n", recommendation.advice);
    println!("{}\n", recommendation.disclaimer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_numbers_map_to_ids() {
        let catalog = Catalog::verident();
        let question = catalog.question_at(0).unwrap();
        assert_eq!(pick_option(question, "1").as_deref(), Some("q1-a"));
        assert_eq!(pick_option(question, "4").as_deref(), Some("q1-d"));
        assert_eq!(pick_option(question, "0"), None);
        assert_eq!(pick_option(question, "9"), None);
        assert_eq!(pick_option(question, "two"), None);
    }
}
