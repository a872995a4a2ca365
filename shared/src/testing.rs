//! Scripted transport for unit tests.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    error::ApiError,
    http::{HttpRequest, HttpResponse, HttpTransport},
};

struct Scripted {
    gate: Option<Rc<Notify>>,
    result: Result<HttpResponse, ApiError>,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn push(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Scripted {
            gate: None,
            result: Ok(response),
        });
    }

    pub(crate) fn push_error(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Scripted {
            gate: None,
            result: Err(error),
        });
    }

    /// Queue `response` for the next request, released only once `gate`
    /// is notified. Later requests take later entries meanwhile.
    pub(crate) fn push_gated(&self, gate: Rc<Notify>, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Scripted {
            gate: Some(gate),
            result: Ok(response),
        });
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| {
                let without_base = request
                    .url
                    .split_once("://")
                    .and_then(|(_, rest)| rest.split_once("/api"))
                    .map(|(_, rest)| rest)
                    .unwrap_or(request.url.as_str());
                format!("{} {}", request.method.as_str(), without_base)
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();
        let Some(scripted) = next else {
            return Err(ApiError::Network("no scripted response".to_string()));
        };
        if let Some(gate) = scripted.gate {
            gate.notified().await;
        }
        scripted.result
    }
}

pub(crate) fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: body.as_bytes().to_vec(),
    }
}
