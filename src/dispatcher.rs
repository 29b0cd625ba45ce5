//! Intent Dispatcher
//!
//! Routes a classified command to its handler. Handlers call the service
//! adapters and hand raw results to the renderer.

use crate::config::Config;
use crate::core::{classify, Classification, IntentKind, NormalizedCommand};
use crate::render::{render, RenderedResponse, Reply, TERMINATING};
use crate::services::browser::search_url;
use crate::services::Services;
use tracing::info;

/// What the session loop should do next
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Speak the response and keep listening
    Respond(RenderedResponse),
    /// Speak the acknowledgment and end the session
    Exit(RenderedResponse),
}

pub struct Dispatcher {
    services: Services,
    search_engine_url: String,
    server_url: String,
}

impl Dispatcher {
    pub fn new(services: Services, config: &Config) -> Self {
        Self {
            services,
            search_engine_url: config.search.engine_url.clone(),
            server_url: config.server.url.clone(),
        }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Classify, run the handler and render its output
    pub async fn classify_and_dispatch(&self, command: &NormalizedCommand) -> Dispatch {
        let classification = classify(command);
        info!("🎯 Intent: {}", classification.kind.name());

        match self.handle(classification).await {
            Some(reply) => Dispatch::Respond(render(&reply)),
            None => Dispatch::Exit(RenderedResponse(TERMINATING.to_string())),
        }
    }

    /// Run the handler for one intent. `None` is the exit signal.
    pub async fn handle(&self, classification: Classification) -> Option<Reply> {
        let argument = classification.argument.unwrap_or_default();

        let reply = match classification.kind {
            IntentKind::DateTime => Reply::DateTime {
                location: self.services.clock.location().to_string(),
                formatted: self.services.clock.fetch(),
            },
            IntentKind::Weather => Reply::Weather(self.services.weather.fetch().await),
            IntentKind::SystemInfo => Reply::SystemInfo(self.services.inventory.fetch().await),
            IntentKind::Lookup => {
                Reply::Lookup(self.services.encyclopedia.fetch(&argument).await)
            }
            IntentKind::News => Reply::News(self.services.news.fetch().await),
            IntentKind::Search => {
                let url = search_url(&self.search_engine_url, &argument);
                info!("🔎 Searching for '{}'", argument);
                self.services.browser.open(&url);
                Reply::SearchLaunched
            }
            IntentKind::MainServer => {
                self.services.browser.open(&self.server_url);
                Reply::ServerLaunched
            }
            IntentKind::Exit => return None,
            IntentKind::Unrecognized => Reply::Unrecognized,
        };

        Some(reply)
    }
}
