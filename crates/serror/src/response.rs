//! Bridge to the `http` crate types. Enabled with `feature = "http"`.

use std::sync::OnceLock;

use http::header::CONTENT_TYPE;
use http::{Method, Response, StatusCode, Uri};
use regex::Regex;
use serde_json::Value;

use crate::{kinds, Kind, Opt};

const JSON_CONTENT: &str = r"(?i:(application|text)/(json|.*\+json|json\-.*)(;|$))";

fn is_json_content(content_type: &str) -> bool {
    static CHECK: OnceLock<Option<Regex>> = OnceLock::new();
    CHECK
        .get_or_init(|| Regex::new(JSON_CONTENT).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(content_type))
}

impl From<StatusCode> for Kind {
    fn from(status: StatusCode) -> Self {
        kinds::from_status(status.as_u16())
    }
}

impl Kind {
    /// The kind's status as an [`http::StatusCode`], `None` when the kind
    /// carries no valid status.
    pub fn http_status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }
}

impl Opt {
    /// Describe a failed outbound HTTP call.
    ///
    /// Sets the kind from the response status, the text to
    /// `[METHOD] /path?query: 404 Not Found` and the data to the response
    /// body. A JSON body is kept as JSON when the content type says so,
    /// anything else is kept as a string.
    ///
    /// The request path goes into the text rather than the op since it may
    /// carry entity ids.
    pub fn response<B>(method: &Method, uri: &Uri, resp: &Response<B>) -> Opt
    where
        B: AsRef<[u8]>,
    {
        let status = resp.status();
        let request_uri = uri.path_and_query().map_or("/", |pq| pq.as_str());
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };

        let body = resp.body().as_ref();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let json = if is_json_content(content_type) {
            serde_json::from_slice::<Value>(body).ok()
        } else {
            None
        };
        let data = json.unwrap_or_else(|| Value::String(String::from_utf8_lossy(body).into_owned()));

        Opt::Options(vec![
            Opt::Kind(Kind::from(status)),
            Opt::Text(format!("[{}] {}: {}", method, request_uri, status_line)),
            Opt::Data(data),
        ])
    }
}
