//! Request adapter: query string in, HTTP-shaped response out.

use crate::cache::{CachePolicy, NO_STORE};
use crate::source::StatsSource;
use serde::Serialize;
use statcard_core::{CacheConfig, CardOptions, parse_query};
use statcard_render::{CardKind, RenderOptions, render_card};

pub const CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl CardResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON body of a failed card request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct Responder {
    pub render: RenderOptions,
    pub cache: CacheConfig,
}

impl Responder {
    pub fn respond(
        &self,
        source: &dyn StatsSource,
        kind: CardKind,
        query: &str,
        deployment_cache_seconds: Option<&str>,
    ) -> CardResponse {
        let params = parse_query(query);
        let options = CardOptions::from_query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let rendered = source
            .fetch(kind)
            .map_err(|err| err.to_string())
            .and_then(|stats| {
                render_card(kind, &stats, &options, &self.render).map_err(|err| err.to_string())
            });

        match rendered {
            Ok(svg) => {
                let policy = CachePolicy::from_request(
                    params.get("cache").is_some_and(|v| v == "clear"),
                    params.get("cache_seconds").map(String::as_str),
                    deployment_cache_seconds,
                    &self.cache,
                );
                let mut headers = vec![("Content-Type", CONTENT_TYPE.to_string())];
                headers.extend(policy.headers(&self.cache));
                CardResponse {
                    status: 200,
                    headers,
                    body: svg,
                }
            }
            Err(message) => {
                tracing::error!(card = kind.name(), %message, "card request failed");
                let body = ErrorBody {
                    error: "Something went wrong",
                    message: &message,
                };
                CardResponse {
                    status: 500,
                    headers: vec![
                        ("Content-Type", CONTENT_TYPE.to_string()),
                        ("Cache-Control", NO_STORE.to_string()),
                    ],
                    body: serde_json::to_string(&body).unwrap_or_default(),
                }
            }
        }
    }
}

/// [`Responder::respond`] with default render and cache settings.
pub fn respond(
    source: &dyn StatsSource,
    kind: CardKind,
    query: &str,
    deployment_cache_seconds: Option<&str>,
) -> CardResponse {
    Responder::default().respond(source, kind, query, deployment_cache_seconds)
}
