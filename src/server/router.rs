//! Request routing
//!
//! Maps a method, URL and raw body onto the API handlers and renders the
//! result as a status code plus optional JSON body. Nothing here touches a
//! socket, so the whole HTTP surface can be exercised in tests.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tiny_http::Method;

use crate::api::{
    ApiError, ErrorCode, ErrorEnvelope, QuestionDraft, QuizRequest, SearchRequest, TriviaApi,
};

/// A rendered response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// JSON body, absent for 204 responses
    pub body: Option<String>,
}

impl HttpReply {
    fn json<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(e) => Self::error(&ApiError::internal(e)),
        }
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// Render an error as its envelope
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        let envelope = ErrorEnvelope::from(error);
        let body = serde_json::to_string(&envelope).unwrap_or_else(|_| {
            format!(
                r#"{{"status":{},"success":false,"message":"{}"}}"#,
                envelope.status,
                ErrorCode::Internal.default_message()
            )
        });
        Self {
            status: envelope.status,
            body: Some(body),
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Route a request and render the outcome
///
/// Any panic raised while handling the request is caught here and rendered
/// as a 500 envelope.
pub fn dispatch(api: &TriviaApi, method: &Method, url: &str, body: &str) -> HttpReply {
    log::debug!("{method} {url}");
    let outcome = catch_unwind(AssertUnwindSafe(|| route(api, method, url, body)));
    let reply = match outcome {
        Ok(Ok(reply)) => reply,
        Ok(Err(error)) => HttpReply::error(&error),
        Err(_) => HttpReply::error(&ApiError::internal(format!(
            "panic while handling {method} {url}"
        ))),
    };

    // HEAD answers like GET without the body
    if *method == Method::Head {
        return HttpReply {
            body: None,
            ..reply
        };
    }
    reply
}

const fn is_read(method: &Method) -> bool {
    matches!(method, Method::Get | Method::Head)
}

/// Strip the `/api/v1` or `/api` prefix, requiring it to end on a segment boundary
fn strip_api_prefix(path: &str) -> Option<&str> {
    ["/api/v1", "/api"].into_iter().find_map(|prefix| {
        path.strip_prefix(prefix)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

fn route(api: &TriviaApi, method: &Method, url: &str, body: &str) -> Result<HttpReply, ApiError> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    // Supports both /api/v1/... (versioned) and /api/... (unversioned)
    let api_path =
        strip_api_prefix(path).ok_or_else(|| ApiError::from_code(ErrorCode::NotFound))?;

    let segments: Vec<&str> = api_path.trim_matches('/').split('/').collect();
    let page = page_param(query);

    let allowed: &str = match segments.as_slice() {
        ["categories"] => match method {
            m if is_read(m) => return Ok(HttpReply::json(200, &api.list_categories(page)?)),
            _ => "GET, HEAD",
        },
        ["categories", id] => {
            let id = id_segment(id)?;
            match method {
                m if is_read(m) => return Ok(HttpReply::json(200, &api.get_category(id)?)),
                _ => "GET, HEAD",
            }
        },
        ["categories", id, "questions"] => {
            let id = id_segment(id)?;
            match method {
                m if is_read(m) => {
                    return Ok(HttpReply::json(200, &api.category_questions(id, page)?));
                },
                _ => "GET, HEAD",
            }
        },
        ["questions"] => match method {
            m if is_read(m) => return Ok(HttpReply::json(200, &api.list_questions(page)?)),
            Method::Post => {
                let draft = read_json::<QuestionDraft>(body)?.unwrap_or_default();
                return Ok(HttpReply::json(201, &api.create_question(draft)?));
            },
            _ => "GET, HEAD, POST",
        },
        ["questions", "search-term"] => match method {
            Method::Post => {
                let request = read_json::<SearchRequest>(body)?;
                return Ok(HttpReply::json(200, &api.search_questions(request.as_ref(), page)?));
            },
            _ => "POST",
        },
        ["questions", "quizzes"] => match method {
            Method::Post => {
                let request = read_json::<QuizRequest>(body)?.unwrap_or_default();
                return Ok(HttpReply::json(200, &api.next_quiz_question(&request)?));
            },
            _ => "POST",
        },
        ["questions", id] => {
            let id = id_segment(id)?;
            match method {
                m if is_read(m) => return Ok(HttpReply::json(200, &api.get_question(id)?)),
                Method::Delete => {
                    api.delete_question(id)?;
                    return Ok(HttpReply::no_content());
                },
                _ => "GET, HEAD, DELETE",
            }
        },
        _ => {
            return Err(ApiError::not_found(format!(
                "API endpoint not found: {method} {api_path}"
            )));
        },
    };

    // Known route, unsupported verb
    if *method == Method::Options {
        return Ok(HttpReply::no_content());
    }
    log::debug!("{method} not allowed on {api_path} (allowed: {allowed})");
    Err(ApiError::method_not_allowed(method))
}

// =============================================================================
// INPUT PARSING
// =============================================================================

/// Read the `page` query parameter, defaulting to 1 when absent or not an integer
///
/// The value is percent-decoded before parsing, so `page=%32` is page 2.
#[must_use]
pub fn page_param(query: &str) -> i64 {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
}

fn id_segment(segment: &str) -> Result<i64, ApiError> {
    segment
        .parse()
        .map_err(|_| ApiError::from_code(ErrorCode::NotFound))
}

/// Parse a JSON body; an empty body or a literal `null` yields `None`
fn read_json<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}
