//! Scripted response selection
//!
//! Maps a user message plus the conversation so far to one canned reply by
//! walking an ordered rule table. The first rule that matches wins, so the
//! declaration order of [`portfolio_rules`] is observable behavior.

mod rules;

#[cfg(test)]
mod proptests;

pub use rules::{portfolio_rules, FALLBACK_RESPONSE};

use crate::session::ConversationHistory;

/// A disjunction of lowercase keyword substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet(pub &'static [&'static str]);

impl KeywordSet {
    /// True if any keyword occurs anywhere in `text`.
    ///
    /// `text` must already be case-folded. Containment is raw substring
    /// search, so "hi" matches inside "this".
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|keyword| text.contains(keyword))
    }
}

/// Which canned reply a rule produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    // Contextual follow-ups
    ExperienceLocation,
    ProgrammingLanguages,
    RecentProjects,
    ContactMethod,
    // General topics
    Greeting,
    Experience,
    Skills,
    Projects,
    Contact,
    Cv,
    Thanks,
    Identity,
    Purpose,
    Education,
    Hobbies,
    Services,
    Achievements,
    Gallery,
    Testimonials,
    Showcase,
    Website,
    FinalYearProject,
    Linux,
    DevOps,
    Cloud,
    Databases,
    Security,
    Networking,
    /// Nothing matched
    Fallback,
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    /// Must match the most recent user turn, if present
    pub context: Option<KeywordSet>,
    /// Must match the current message
    pub trigger: KeywordSet,
    pub response: &'static str,
}

impl Rule {
    /// A rule keyed on the current message only.
    pub const fn general(
        topic: Topic,
        trigger: &'static [&'static str],
        response: &'static str,
    ) -> Self {
        Self {
            topic,
            context: None,
            trigger: KeywordSet(trigger),
            response,
        }
    }

    /// A rule keyed on both the previous user turn and the current message.
    pub const fn contextual(
        topic: Topic,
        context: &'static [&'static str],
        trigger: &'static [&'static str],
        response: &'static str,
    ) -> Self {
        Self {
            topic,
            context: Some(KeywordSet(context)),
            trigger: KeywordSet(trigger),
            response,
        }
    }

    fn matches(&self, last_user_text: &str, message: &str) -> bool {
        let context_ok = self
            .context
            .map_or(true, |context| context.matches(last_user_text));
        context_ok && self.trigger.matches(message)
    }
}

/// Ordered rule table with a mandatory catch-all.
///
/// Evaluation is a total function: every input yields exactly one reply.
#[derive(Debug, Clone)]
pub struct ResponseDispatcher {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl Default for ResponseDispatcher {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl ResponseDispatcher {
    pub fn new(rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// The pinned portfolio table.
    pub fn portfolio() -> Self {
        Self::new(portfolio_rules(), FALLBACK_RESPONSE)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Select the reply for `message` given the prior conversation.
    pub fn select_response(&self, message: &str, history: &ConversationHistory) -> &'static str {
        self.evaluate(message, history)
            .map_or(self.fallback, |rule| rule.response)
    }

    /// Name the rule that would answer `message`.
    pub fn classify(&self, message: &str, history: &ConversationHistory) -> Topic {
        self.evaluate(message, history)
            .map_or(Topic::Fallback, |rule| rule.topic)
    }

    fn evaluate(&self, message: &str, history: &ConversationHistory) -> Option<&Rule> {
        let message = normalize(message);
        let last_user_text = history.last_user_text();

        let matched = self
            .rules
            .iter()
            .find(|rule| rule.matches(&last_user_text, &message));

        tracing::debug!(
            topic = ?matched.map(|rule| rule.topic),
            contextual = matched.is_some_and(|rule| rule.context.is_some()),
            "Dispatched scripted reply"
        );

        matched
    }
}

/// Case-fold and trim a raw user message.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}
