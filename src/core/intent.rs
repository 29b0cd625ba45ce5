//! Intent Table
//!
//! Ordered rules mapping normalized commands to intents. The first rule
//! whose matcher accepts the command wins, so the table order is the
//! priority order. Several triggers are substrings of longer commands,
//! which is why the fallback sits last.

use super::text_normalizer::NormalizedCommand;
use tracing::debug;

/// Supported request categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    DateTime,
    Weather,
    SystemInfo,
    Lookup,
    News,
    Search,
    MainServer,
    Exit,
    Unrecognized,
}

impl IntentKind {
    pub fn name(&self) -> &'static str {
        match self {
            IntentKind::DateTime => "current_date_time",
            IntentKind::Weather => "current_weather",
            IntentKind::SystemInfo => "system_information",
            IntentKind::Lookup => "look_up",
            IntentKind::News => "news_headlines",
            IntentKind::Search => "search",
            IntentKind::MainServer => "access_main_server",
            IntentKind::Exit => "exit_protocol",
            IntentKind::Unrecognized => "unrecognized",
        }
    }
}

/// How a trigger phrase is located in the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Command starts with the phrase
    Prefix(&'static str),
    /// Phrase appears anywhere in the command
    Contains(&'static str),
    /// Accepts every command
    Always,
}

impl Matcher {
    /// Byte offset just past the matched phrase, if it matches
    fn match_end(&self, text: &str) -> Option<usize> {
        match self {
            Matcher::Prefix(phrase) => text.starts_with(phrase).then_some(phrase.len()),
            Matcher::Contains(phrase) => text.find(phrase).map(|idx| idx + phrase.len()),
            Matcher::Always => Some(0),
        }
    }
}

/// What an intent pulls out of the command besides its identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    None,
    /// Everything after the matched phrase, trimmed
    Remainder,
}

/// One row of the intent table
#[derive(Debug, Clone, Copy)]
pub struct Intent {
    pub kind: IntentKind,
    pub matcher: Matcher,
    pub parameter: Parameter,
}

impl Intent {
    const fn new(kind: IntentKind, matcher: Matcher, parameter: Parameter) -> Self {
        Self {
            kind,
            matcher,
            parameter,
        }
    }

    /// Try this rule against `text`
    pub fn try_match(&self, text: &str) -> Option<Classification> {
        let end = self.matcher.match_end(text)?;
        let argument = match self.parameter {
            Parameter::None => None,
            Parameter::Remainder => Some(text[end..].trim().to_string()),
        };
        Some(Classification {
            kind: self.kind,
            argument,
        })
    }
}

/// Reserved rule applied when nothing else matches
pub const FALLBACK: Intent = Intent::new(IntentKind::Unrecognized, Matcher::Always, Parameter::None);

/// Priority-ordered intent table
pub const INTENTS: &[Intent] = &[
    Intent::new(
        IntentKind::DateTime,
        Matcher::Prefix("current date and time"),
        Parameter::None,
    ),
    Intent::new(
        IntentKind::Weather,
        Matcher::Prefix("current weather update"),
        Parameter::None,
    ),
    Intent::new(
        IntentKind::SystemInfo,
        Matcher::Contains("system information"),
        Parameter::None,
    ),
    Intent::new(
        IntentKind::Lookup,
        Matcher::Contains("look up "),
        Parameter::Remainder,
    ),
    Intent::new(
        IntentKind::News,
        Matcher::Contains("news headlines"),
        Parameter::None,
    ),
    Intent::new(
        IntentKind::Search,
        Matcher::Prefix("search"),
        Parameter::Remainder,
    ),
    Intent::new(
        IntentKind::MainServer,
        Matcher::Contains("access main server"),
        Parameter::None,
    ),
    Intent::new(
        IntentKind::Exit,
        Matcher::Contains("exit protocol"),
        Parameter::None,
    ),
    FALLBACK,
];

/// Outcome of classifying one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: IntentKind,
    /// Topic or query extracted by the rule, if it takes one
    pub argument: Option<String>,
}

/// Resolve a command against the intent table. Never fails.
pub fn classify(command: &NormalizedCommand) -> Classification {
    let text = command.as_str();
    let classification = INTENTS
        .iter()
        .find_map(|intent| intent.try_match(text))
        .unwrap_or(Classification {
            kind: IntentKind::Unrecognized,
            argument: None,
        });

    debug!(
        "🎯 '{}' -> {} {:?}",
        text,
        classification.kind.name(),
        classification.argument
    );
    classification
}
