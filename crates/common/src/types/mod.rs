use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `{ "message": ... }` body shared by every non-2xx JSON response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Payload of `GET /`: a running banner plus the route table.
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}
