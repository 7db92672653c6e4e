//! Response provider seam and the simulated assistant
//!
//! The engine only ever talks to a [`ResponseProvider`]. The shipped
//! implementation, [`SimulatedAssistant`], waits a fixed delay and composes
//! a canned reply from the prompt and project context; a real backend slots
//! in by implementing the same trait.

use std::time::Duration;

use workbench_core::prelude::*;
use workbench_core::{ExchangeId, MessageId};

use crate::config::AssistantSettings;
use crate::project::ProjectState;

/// Workspace context sent along with a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyContext {
    pub project: String,
    pub framework: String,
    pub page: String,
    pub route: String,
    pub components: Vec<String>,
}

impl ReplyContext {
    pub fn from_project(project: &ProjectState) -> Self {
        let page = project.active_page();
        Self {
            project: project.name.clone(),
            framework: project.framework.clone(),
            page: page.name.clone(),
            route: page.route.clone(),
            components: page.components.clone(),
        }
    }
}

/// A request for one assistant reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub exchange: ExchangeId,
    /// Placeholder message the reply will replace
    pub placeholder: MessageId,
    pub prompt: String,
    pub context: ReplyContext,
}

/// Produces assistant replies.
///
/// Implement [`ResponseProvider`] (the `Send` variant) for providers that run
/// on the tokio runtime; the local variant comes for free.
#[trait_variant::make(ResponseProvider: Send)]
pub trait LocalResponseProvider {
    /// Reply text for `request`, or an error that fails the exchange
    async fn respond(&self, request: &AssistantRequest) -> Result<String>;
}

/// Canned replies after a fixed latency
#[derive(Debug, Clone)]
pub struct SimulatedAssistant {
    delay: Duration,
}

impl SimulatedAssistant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_settings(settings: &AssistantSettings) -> Self {
        Self::new(Duration::from_millis(settings.reply_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAssistant {
    fn default() -> Self {
        Self::from_settings(&AssistantSettings::default())
    }
}

impl ResponseProvider for SimulatedAssistant {
    async fn respond(&self, request: &AssistantRequest) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        trace!("Simulated reply ready for {}", request.exchange);
        Ok(compose_reply(request))
    }
}

// ─────────────────────────────────────────────────────────────────
// Reply synthesis
// ─────────────────────────────────────────────────────────────────

/// Topics the simulated assistant has templates for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTopic {
    Forms,
    Layout,
    Components,
    Styling,
    General,
}

const TOPIC_KEYWORDS: &[(ReplyTopic, &[&str])] = &[
    (
        ReplyTopic::Forms,
        &["form", "input", "field", "validation", "submit", "login", "signup"],
    ),
    (
        ReplyTopic::Layout,
        &["layout", "grid", "flex", "column", "responsive", "sidebar", "split"],
    ),
    (
        ReplyTopic::Styling,
        &["style", "styling", "color", "colour", "css", "theme", "tailwind", "font"],
    ),
    (
        ReplyTopic::Components,
        &["component", "header", "navigation", "nav", "hero", "button", "footer", "card"],
    ),
];

/// First topic whose keywords appear in the prompt
pub fn classify_prompt(prompt: &str) -> ReplyTopic {
    let lowered = prompt.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            words
                .iter()
                .any(|w| keywords.iter().any(|k| w == k || w.strip_suffix('s') == Some(k)))
        })
        .map_or(ReplyTopic::General, |(topic, _)| *topic)
}

/// Build the simulated reply for a request
pub fn compose_reply(request: &AssistantRequest) -> String {
    let ctx = &request.context;
    let page = &ctx.page;
    let framework = &ctx.framework;

    match classify_prompt(&request.prompt) {
        ReplyTopic::Forms => format!(
            "I can help you with the {page} page. For a form in {framework}, keep each \
             field's value in component state, validate on submit, and show errors next \
             to the field they belong to. Want me to scaffold the fields?"
        ),
        ReplyTopic::Layout => format!(
            "I can help you with the {page} page. A flex column with a max-width container \
             works well here; switch to a grid at wider breakpoints so {route} stays \
             readable on small screens.",
            route = ctx.route
        ),
        ReplyTopic::Components => {
            let existing = if ctx.components.is_empty() {
                "no components yet".to_string()
            } else {
                ctx.components.join(", ")
            };
            format!(
                "I can help you with the {page} page. It currently has {existing}. Add \
                 pieces from the Components tab and I'll suggest the {framework} props \
                 each one needs."
            )
        }
        ReplyTopic::Styling => format!(
            "I can help you with the {page} page. Start from a small palette and a type \
             scale, then apply them through utility classes so every {framework} \
             component in {project} stays consistent.",
            project = ctx.project
        ),
        ReplyTopic::General => {
            format!("I can help you with the {page} page. What would you like to know?")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectSettings;

    fn request(prompt: &str) -> AssistantRequest {
        let project = ProjectState::new(&ProjectSettings::default());
        AssistantRequest {
            exchange: ExchangeId(0),
            placeholder: MessageId(1),
            prompt: prompt.to_string(),
            context: ReplyContext::from_project(&project),
        }
    }

    #[test]
    fn test_classify_prompt() {
        assert_eq!(classify_prompt("build a form"), ReplyTopic::Forms);
        assert_eq!(classify_prompt("Make it RESPONSIVE"), ReplyTopic::Layout);
        assert_eq!(classify_prompt("add some buttons"), ReplyTopic::Components);
        assert_eq!(classify_prompt("change the colors"), ReplyTopic::Styling);
        assert_eq!(classify_prompt("hello"), ReplyTopic::General);
        // Substrings don't count as keywords
        assert_eq!(classify_prompt("transformation"), ReplyTopic::General);
    }

    #[test]
    fn test_general_reply_names_page() {
        assert_eq!(
            compose_reply(&request("hi")),
            "I can help you with the Home page. What would you like to know?"
        );
    }

    #[test]
    fn test_topic_replies_mention_context() {
        let reply = compose_reply(&request("build a form"));
        assert!(reply.contains("Home page"));
        assert!(reply.contains("react"));

        let reply = compose_reply(&request("which component next?"));
        assert!(reply.contains("no components yet"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_assistant_waits_for_delay() {
        let assistant = SimulatedAssistant::new(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        let reply = ResponseProvider::respond(&assistant, &request("hi"))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert!(reply.starts_with("I can help you with the Home page"));
    }
}
