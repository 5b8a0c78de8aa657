use crate::error::{GradelensError, Result};
use serde_json::Value;

/// The fixed profile query: one user with counters, transactions, progress
/// and result records. The endpoint scopes `user` to the bearer token.
pub const PROFILE_QUERY: &str = r#"
{
  user {
    id
    login
    totalUp
    totalDown
    transactions {
      id
      type
      amount
      createdAt
      path
      object { id name type }
    }
    progresses {
      id
      grade
      createdAt
      path
      object { id name type }
    }
    results {
      id
      grade
      createdAt
      path
      object { id name type }
    }
  }
}
"#;

/// Client for the platform's GraphQL endpoint.
///
/// One request per render cycle; the token is passed through as supplied and
/// never decoded or stored here.
pub struct ApiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// POST the profile query and return the raw payload.
    pub fn fetch_profile(&self, token: &str) -> Result<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&serde_json::json!({ "query": PROFILE_QUERY }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GradelensError::Api(format!(
                "endpoint returned HTTP {status}"
            )));
        }

        let body: Value = response.json()?;

        // GraphQL reports query failures as a 200 with an `errors` array.
        if let Some(message) = first_graphql_error(&body) {
            return Err(GradelensError::Api(message));
        }

        Ok(body)
    }
}

fn first_graphql_error(body: &Value) -> Option<String> {
    let errors = body.get("errors")?.as_array()?;
    let first = errors.first()?;
    let message = first
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown GraphQL error");
    Some(message.to_string())
}
