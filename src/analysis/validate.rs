use crate::error::{GradelensError, Result};
use crate::models::snapshot::RawSnapshot;
use serde_json::Value;

/// Validate the raw GraphQL payload and decode it into a snapshot.
///
/// Only the first entry of the `user` collection is considered; the endpoint
/// is single-tenant per token.
pub fn validate_response(raw: &Value) -> Result<RawSnapshot> {
    let data = raw
        .get("data")
        .ok_or_else(|| GradelensError::MalformedResponse("missing top-level `data` field".to_string()))?;

    let users = data
        .get("user")
        .and_then(Value::as_array)
        .ok_or_else(|| GradelensError::MalformedResponse("missing `user` collection".to_string()))?;

    let user = users
        .first()
        .ok_or_else(|| GradelensError::MalformedResponse("empty `user` collection".to_string()))?;

    if user.get("id").and_then(Value::as_i64).is_none() {
        return Err(GradelensError::MalformedResponse(
            "user record is missing `id`".to_string(),
        ));
    }
    if user.get("login").and_then(Value::as_str).is_none() {
        return Err(GradelensError::MalformedResponse(
            "user record is missing `login`".to_string(),
        ));
    }

    serde_json::from_value(user.clone())
        .map_err(|e| GradelensError::MalformedResponse(format!("user record failed to decode: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_user() -> Value {
        json!({
            "id": 7,
            "login": "jdoe",
            "totalUp": 500_000,
            "totalDown": 250_000
        })
    }

    #[test]
    fn accepts_minimal_well_formed_response() {
        let raw = json!({ "data": { "user": [minimal_user()] } });
        let snapshot = validate_response(&raw).expect("validate");

        assert_eq!(snapshot.id, 7);
        assert_eq!(snapshot.login, "jdoe");
        assert_eq!(snapshot.total_up, 500_000);
        assert!(snapshot.transactions.is_empty());
    }

    #[test]
    fn rejects_missing_data_field() {
        let raw = json!({ "user": [minimal_user()] });
        let err = validate_response(&raw).unwrap_err();
        assert!(err.to_string().contains("data"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_missing_user_collection() {
        let raw = json!({ "data": {} });
        assert!(validate_response(&raw).is_err());
    }

    #[test]
    fn rejects_empty_user_collection() {
        let raw = json!({ "data": { "user": [] } });
        let err = validate_response(&raw).unwrap_err();
        assert!(err.to_string().contains("empty"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_user_without_id_or_login() {
        let raw = json!({ "data": { "user": [{ "login": "jdoe" }] } });
        assert!(validate_response(&raw).is_err());

        let raw = json!({ "data": { "user": [{ "id": 7 }] } });
        assert!(validate_response(&raw).is_err());
    }

    #[test]
    fn considers_only_the_first_user_entry() {
        let raw = json!({
            "data": { "user": [minimal_user(), { "id": 8, "login": "other" }] }
        });
        let snapshot = validate_response(&raw).expect("validate");
        assert_eq!(snapshot.login, "jdoe");
    }

    #[test]
    fn does_not_mutate_input() {
        let raw = json!({ "data": { "user": [minimal_user()] } });
        let before = raw.clone();
        let _ = validate_response(&raw).expect("validate");
        assert_eq!(raw, before);
    }
}
