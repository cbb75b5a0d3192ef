use std::{fmt, str::FromStr};

use serde_json::{Map, Value};

use crate::error::InvalidMode;

/// The analysis a submission is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Code,
    Phishing,
    Web,
}

/// How the value under a route's response key is turned into display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// Shown as-is when it is a string.
    Text,
    /// Always pretty-printed as JSON.
    Json,
}

/// Everything that differs between modes, in one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeRoute {
    pub field_id: &'static str,
    pub endpoint: &'static str,
    pub request_key: &'static str,
    pub response_key: &'static str,
    pub response_shape: ResponseShape,
    pub prompt: &'static str,
}

const CODE_ROUTE: ModeRoute = ModeRoute {
    field_id: "codeInput",
    endpoint: "/analyze",
    request_key: "code",
    response_key: "analysis",
    response_shape: ResponseShape::Text,
    prompt: "Please paste some code first.",
};

const PHISHING_ROUTE: ModeRoute = ModeRoute {
    field_id: "phishingInput",
    endpoint: "/phishing-check",
    request_key: "message",
    response_key: "result",
    response_shape: ResponseShape::Text,
    prompt: "Please paste the email or message.",
};

const WEB_ROUTE: ModeRoute = ModeRoute {
    field_id: "webInput",
    endpoint: "/scan-web",
    request_key: "url",
    response_key: "alerts",
    response_shape: ResponseShape::Json,
    prompt: "Please enter a website URL.",
};

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Code, Mode::Phishing, Mode::Web];

    pub fn route(self) -> &'static ModeRoute {
        match self {
            Mode::Code => &CODE_ROUTE,
            Mode::Phishing => &PHISHING_ROUTE,
            Mode::Web => &WEB_ROUTE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Code => "code",
            Mode::Phishing => "phishing",
            Mode::Web => "web",
        }
    }
}

impl ModeRoute {
    /// The endpoint path without its leading slash, so it resolves relative
    /// to a base URL that carries a path prefix.
    pub fn relative_endpoint(&self) -> &'static str {
        self.endpoint.trim_start_matches('/')
    }

    /// `{<request_key>: <input>}`
    pub fn request_body(&self, input: &str) -> Value {
        let mut body = Map::new();
        body.insert(self.request_key.to_owned(), Value::String(input.to_owned()));
        Value::Object(body)
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Mode::Code),
            "phishing" => Ok(Mode::Phishing),
            "web" => Ok(Mode::Web),
            other => Err(InvalidMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
