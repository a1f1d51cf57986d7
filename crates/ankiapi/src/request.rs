//! Internal request and response envelopes for the AnkiConnect protocol.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The request format expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<'a, T> {
    /// The action to perform.
    pub action: &'a str,
    /// The protocol version the client was built with.
    pub version: u8,
    /// Optional parameters for the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<T>,
}

impl<'a, T> Envelope<'a, T> {
    /// Create a new request with parameters.
    pub fn new(action: &'a str, version: u8, params: T) -> Self {
        Self {
            action,
            version,
            params: Some(params),
        }
    }

    /// Create a new request without parameters.
    pub fn without_params(action: &'a str, version: u8) -> Envelope<'a, ()> {
        Envelope {
            action,
            version,
            params: None,
        }
    }
}

/// The response format returned by AnkiConnect.
#[derive(Debug, Deserialize)]
pub(crate) struct Reply<T> {
    /// The result of the action, if successful.
    pub result: Option<T>,
    /// The error message, if the action failed.
    pub error: Option<String>,
}

impl<T> Reply<T> {
    /// Turn the envelope into the action's result.
    ///
    /// A non-null `error` wins over any result that came with it.
    pub fn into_result(self) -> Result<T> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(Error::Remote(err)),
            (Some(result), None) => Ok(result),
            (None, None) => Err(Error::EmptyResponse),
        }
    }
}
