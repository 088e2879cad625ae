use crate::routes::Route;

/// HTTP status codes this server produces.
///
/// Route dispatch only ever answers with success or not-found; malformed
/// requests are dropped without any response at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Code and reason joined as they appear on the wire and in the request
    /// log, e.g. `200 OK`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Every response carries `Connection: close` and deliberately no
/// `Content-Length`: the connection close delimits the body, exactly as the
/// reference behavior does. Built once per request, discarded after writing.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    /// 200 OK carrying a matched route's content and content type.
    pub fn ok(route: &Route) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: route.content_type.clone(),
            body: route.content.as_bytes().to_vec(),
        }
    }

    /// 404 Not Found with the fixed plain-text body.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/plain".to_string(),
            body: b"Not Found".to_vec(),
        }
    }
}
