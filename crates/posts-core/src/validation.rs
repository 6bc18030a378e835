//! Request validation for post payloads and path ids.
//!
//! Every field is checked independently and all failures are reported at
//! once, joined with `"; "`, so a client can fix a payload in one round trip.

use serde_json::{Map, Number, Value};

use crate::domain::{NewPost, PostPatch};
use crate::error::DomainError;

const MESSAGE_SEPARATOR: &str = "; ";

/// Validate a create payload. `title`, `body` and `user_id` are required.
pub fn validate_create(payload: &Value) -> Result<NewPost, DomainError> {
    let obj = as_object(payload)?;
    let mut errors = Vec::new();

    let title = required(title_field(obj), "title", &mut errors);
    let body = required(string_field(obj, "body"), "body", &mut errors);
    let user_id = required(user_id_field(obj), "user_id", &mut errors);

    match (title, body, user_id) {
        (Some(title), Some(body), Some(user_id)) if errors.is_empty() => Ok(NewPost {
            title,
            body,
            user_id,
        }),
        _ => Err(reject(payload, errors)),
    }
}

/// Validate an update payload. Every field is optional; `null` counts as absent.
pub fn validate_update(payload: &Value) -> Result<PostPatch, DomainError> {
    let obj = as_object(payload)?;
    let mut errors = Vec::new();

    let title = optional(title_field(obj), &mut errors);
    let body = optional(string_field(obj, "body"), &mut errors);
    let user_id = optional(user_id_field(obj), &mut errors);

    if !errors.is_empty() {
        return Err(reject(payload, errors));
    }

    Ok(PostPatch {
        title,
        body,
        user_id,
    })
}

/// Validate an id path segment.
pub fn validate_id(raw: &str) -> Result<i32, DomainError> {
    raw.trim().parse::<i32>().map_err(|_| {
        tracing::warn!(id = %raw, "Rejected post id");
        DomainError::Validation("id must be an integer".to_string())
    })
}

/// Outcome of looking up one field: absent (or null), present, or mistyped.
enum Field<T> {
    Absent,
    Present(T),
    Invalid(String),
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, DomainError> {
    payload.as_object().ok_or_else(|| {
        reject(
            payload,
            vec!["request body must be a JSON object".to_string()],
        )
    })
}

fn string_field(obj: &Map<String, Value>, name: &str) -> Field<String> {
    match obj.get(name) {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::String(s)) => Field::Present(s.clone()),
        Some(_) => Field::Invalid(format!("{name} must be a string")),
    }
}

/// `title` must be a string of at least one character.
fn title_field(obj: &Map<String, Value>) -> Field<String> {
    match string_field(obj, "title") {
        Field::Present(title) if title.is_empty() => {
            Field::Invalid("title must not be empty".to_string())
        }
        other => other,
    }
}

/// `user_id`, falling back to the legacy `userId` key.
fn user_id_field(obj: &Map<String, Value>) -> Field<i32> {
    let value = match obj.get("user_id") {
        None | Some(Value::Null) => obj.get("userId"),
        found => found,
    };

    match value {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::Number(n)) => integral(n)
            .map(Field::Present)
            .unwrap_or_else(|| Field::Invalid("user_id must be an integer".to_string())),
        Some(_) => Field::Invalid("user_id must be an integer".to_string()),
    }
}

/// Integral JSON numbers that fit in an `i32`, including float spellings like `1.0`.
fn integral(n: &Number) -> Option<i32> {
    if let Some(n) = n.as_i64() {
        return i32::try_from(n).ok();
    }

    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
        .map(|f| f as i32)
}

fn required<T>(field: Field<T>, name: &str, errors: &mut Vec<String>) -> Option<T> {
    match field {
        Field::Present(value) => Some(value),
        Field::Absent => {
            errors.push(format!("{name} is required"));
            None
        }
        Field::Invalid(message) => {
            errors.push(message);
            None
        }
    }
}

fn optional<T>(field: Field<T>, errors: &mut Vec<String>) -> Option<T> {
    match field {
        Field::Present(value) => Some(value),
        Field::Absent => None,
        Field::Invalid(message) => {
            errors.push(message);
            None
        }
    }
}

fn reject(payload: &Value, errors: Vec<String>) -> DomainError {
    let message = errors.join(MESSAGE_SEPARATOR);
    tracing::warn!(%payload, errors = %message, "Rejected post payload");
    DomainError::Validation(message)
}
