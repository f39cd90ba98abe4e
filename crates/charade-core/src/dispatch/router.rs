//! Append-ordered route registry: first matching route wins.

use crate::matching::{extract_path_params, extract_query_params, is_match};
use crate::storage::Registry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Response produced by a route controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub data: Value,
    pub status: u16,
    pub status_text: String,
    /// Defaults to an empty map
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Response {
    pub fn new(status: u16, status_text: impl Into<String>, data: Value) -> Self {
        Self {
            data,
            status,
            status_text: status_text.into(),
            headers: HashMap::new(),
        }
    }
}

/// Parameter bag handed to controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// URL query arguments overlaid by the explicit body params
    pub query: HashMap<String, String>,
    /// Body data; null for GET requests
    pub body: Value,
    /// Path captures from the matched template
    pub route: HashMap<String, String>,
}

/// Per-call options handed to controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub method: String,
    /// Token produced by the route's authenticate hook, if any
    pub token: Option<String>,
}

/// Body of a simulated request: explicit query params plus payload data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub params: HashMap<String, String>,
    pub data: Value,
}

type RunFn = Box<dyn Fn(&Params, &Options, &mut Registry) -> Response>;
type AuthenticateFn = Box<dyn Fn(&Params, &Options) -> Option<String>>;

/// A route's behavior: a `run` function producing the response, optionally
/// gated by an `authenticate` hook.
///
/// The hook only decides whether a token is populated in [`Options`]: a
/// `None` result never blocks the call, which proceeds unauthenticated.
pub struct Controller {
    run: RunFn,
    authenticate: Option<AuthenticateFn>,
}

impl Controller {
    pub fn new(run: impl Fn(&Params, &Options, &mut Registry) -> Response + 'static) -> Self {
        Self {
            run: Box::new(run),
            authenticate: None,
        }
    }

    pub fn with_authenticate(
        mut self,
        hook: impl Fn(&Params, &Options) -> Option<String> + 'static,
    ) -> Self {
        self.authenticate = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("authenticate", &self.authenticate.is_some())
            .finish_non_exhaustive()
    }
}

/// A registered expectation: URL template, accepted methods, controller.
#[derive(Debug)]
pub struct Route {
    pub template: String,
    pub methods: Vec<String>,
    pub controller: Controller,
}

impl Route {
    pub fn new<I, S>(template: impl Into<String>, methods: I, controller: Controller) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template: template.into(),
            methods: methods.into_iter().map(Into::into).collect(),
            controller,
        }
    }
}

/// Failure channel of [`Router::fetch`].
///
/// Both variants carry the response they stand for. Routing misses and
/// error-status answers are data, not crashes: handing realistic failure
/// responses back to the code under test is the point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// No registered route matched the URL and method
    #[error("no route matched: {}", .0.status_text)]
    NotFound(Response),
    /// The controller answered with an error status
    #[error("controller answered with status {}", .0.status)]
    Controller(Response),
}

impl DispatchError {
    /// The response this failure carries.
    pub fn response(&self) -> &Response {
        match self {
            DispatchError::NotFound(response) | DispatchError::Controller(response) => response,
        }
    }

    pub fn into_response(self) -> Response {
        match self {
            DispatchError::NotFound(response) | DispatchError::Controller(response) => response,
        }
    }
}

/// The route registry and dispatcher.
///
/// Routes are scanned in registration order and the first match wins. The
/// registry owns the fixture [`Registry`]; controllers receive it as an
/// explicit parameter, so all state lives in this instance and nothing is
/// process-global.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    not_found: Response,
    pub storage: Registry,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            not_found: Response::new(404, "Route not found.", json!({})),
            storage: Registry::new(),
        }
    }

    /// Register a route. Registration order is match order.
    pub fn add_route(&mut self, route: Route) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Replace the response returned when no route matches.
    pub fn set_not_found_response(&mut self, response: Response) -> &mut Self {
        self.not_found = response;
        self
    }

    /// Simulate a client request.
    ///
    /// The first route whose template matches the URL and whose method set
    /// contains `method` (compared case-insensitively) handles the call.
    /// Resolution is immediate; the async surface only mimics a client.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NotFound`] when nothing matches,
    /// [`DispatchError::Controller`] when the controller answers with a
    /// status of 400 or above; both carry the response.
    pub async fn fetch(
        &mut self,
        url: &str,
        method: &str,
        body: RequestBody,
    ) -> Result<Response, DispatchError> {
        let matched = self.routes.iter().position(|route| {
            is_match(&route.template, url)
                && route.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
        });
        let Some(index) = matched else {
            return Err(DispatchError::NotFound(self.not_found.clone()));
        };
        let route = &self.routes[index];

        let mut query = extract_query_params(url);
        query.extend(body.params);
        let params = Params {
            query,
            // Anything but a GET carries its body data through.
            body: if method != "GET" { body.data } else { Value::Null },
            route: extract_path_params(&route.template, url),
        };

        let mut options = Options {
            method: method.to_owned(),
            token: None,
        };
        if let Some(authenticate) = &route.controller.authenticate {
            // A missing token is not a hard stop: the call proceeds
            // unauthenticated.
            options.token = authenticate(&params, &options);
        }

        let response = (route.controller.run)(&params, &options, &mut self.storage);
        if response.status >= 400 {
            return Err(DispatchError::Controller(response));
        }
        Ok(response)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
