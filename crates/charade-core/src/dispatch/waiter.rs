//! LIFO waiter stack: the most recently registered match wins.

use crate::matching::{extract_path_params, extract_query_params, is_match};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Response produced by a waiter action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub data: Value,
    pub status_code: u16,
    pub headers: Option<HashMap<String, String>>,
}

impl Response {
    pub fn new(status_code: u16, data: Value) -> Self {
        Self {
            data,
            status_code,
            headers: None,
        }
    }
}

/// A simulated request emitted against the stack.
///
/// `query`, `body` and `route` start empty; [`WaiterStack::emit`] hands the
/// action an enhanced copy with the bags filled in and never touches the
/// request it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub method: String,
    pub query: HashMap<String, String>,
    pub body: Value,
    pub route: HashMap<String, String>,
}

impl Request {
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            query: HashMap::new(),
            body: Value::Null,
            route: HashMap::new(),
        }
    }
}

/// Outcome category of an emitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Done,
    NetworkError,
    Timeout,
}

/// Outcome of [`WaiterStack::emit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResult {
    pub status: RequestStatus,
    pub response: Option<Response>,
}

impl RequestResult {
    fn done(response: Response) -> Self {
        Self {
            status: RequestStatus::Done,
            response: Some(response),
        }
    }

    /// Canned timeout result.
    pub fn timeout() -> Self {
        Self {
            status: RequestStatus::Timeout,
            response: None,
        }
    }

    /// Canned network-error result.
    pub fn network_error() -> Self {
        Self {
            status: RequestStatus::NetworkError,
            response: None,
        }
    }

    /// Canned result for a request no waiter answered.
    pub fn not_found() -> Self {
        Self {
            status: RequestStatus::Done,
            response: Some(Response::new(404, Value::Null)),
        }
    }
}

/// What a waiter does once it matches.
pub enum WaiterAction {
    /// Invoke the callback on the enhanced request
    Respond(Box<dyn Fn(&Request) -> Response>),
    /// Simulate a timed-out request
    Timeout,
    /// Simulate a transport failure
    NetworkError,
}

impl WaiterAction {
    pub fn respond(action: impl Fn(&Request) -> Response + 'static) -> Self {
        WaiterAction::Respond(Box::new(action))
    }
}

impl fmt::Debug for WaiterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaiterAction::Respond(_) => f.write_str("Respond(..)"),
            WaiterAction::Timeout => f.write_str("Timeout"),
            WaiterAction::NetworkError => f.write_str("NetworkError"),
        }
    }
}

/// Registration payload for [`WaiterStack::observe`].
#[derive(Debug)]
pub struct WaiterConfig {
    pub url: String,
    pub method: String,
    pub action: WaiterAction,
    /// Unset means consumable
    pub consumable: Option<bool>,
}

impl WaiterConfig {
    pub fn new(
        url: impl Into<String>,
        method: impl Into<String>,
        action: WaiterAction,
    ) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            action,
            consumable: None,
        }
    }

    /// A non-consumable waiter answers any number of matching requests.
    pub fn consumable(mut self, consumable: bool) -> Self {
        self.consumable = Some(consumable);
        self
    }
}

#[derive(Debug)]
struct Waiter {
    url: String,
    method: String,
    consumable: bool,
    action: WaiterAction,
}

/// Build the request copy handed to an action: URL arguments overlaid by
/// the request's explicit query fields, path captures from the waiter's
/// template, and the body carried through for anything but a GET.
fn enhance_request(request: &Request, template: &str) -> Request {
    let mut query = extract_query_params(&request.url);
    query.extend(request.query.clone());

    Request {
        url: request.url.clone(),
        method: request.method.clone(),
        query,
        body: if request.method != "GET" {
            request.body.clone()
        } else {
            Value::Null
        },
        route: extract_path_params(template, &request.url),
    }
}

/// The waiter stack.
///
/// Waiters are checked most-recently-registered first, and a consumable
/// waiter is dropped after answering once. Method comparison is exact,
/// unlike the route registry's case-insensitive discipline.
#[derive(Debug, Default)]
pub struct WaiterStack {
    waiters: Vec<Waiter>,
}

impl WaiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a waiter onto the stack. `consumable` defaults to true.
    pub fn observe(&mut self, config: WaiterConfig) -> &mut Self {
        let waiter = Waiter {
            url: config.url,
            method: config.method,
            consumable: config.consumable.unwrap_or(true),
            action: config.action,
        };
        self.waiters.insert(0, waiter);
        self
    }

    /// Number of waiters still registered.
    pub fn len(&self) -> usize {
        self.waiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiters.is_empty()
    }

    /// Forward `request` to the most recently registered matching waiter.
    ///
    /// A matched consumable waiter is removed afterwards: that exact
    /// instance, whatever else shares its url and method. Without any match
    /// the canned not-found result comes back.
    pub fn emit(&mut self, request: &Request) -> RequestResult {
        let matched = self
            .waiters
            .iter()
            .position(|waiter| {
                is_match(&waiter.url, &request.url) && waiter.method == request.method
            });
        let Some(index) = matched else {
            return RequestResult::not_found();
        };

        let waiter = &self.waiters[index];
        let result = match &waiter.action {
            WaiterAction::Respond(action) => {
                let enhanced = enhance_request(request, &waiter.url);
                RequestResult::done(action(&enhanced))
            }
            WaiterAction::Timeout => RequestResult::timeout(),
            WaiterAction::NetworkError => RequestResult::network_error(),
        };

        if waiter.consumable {
            self.waiters.remove(index);
        }
        result
    }
}
