use axum::http::StatusCode;

/// A semantic result a handler can report, each with a fixed status code and default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ok,
    Created,
    BadRequest,
    AccessDenied,
    Forbidden,
    NotFound,
    NotAllowed,
    NotAcceptable,
    ReqTimeout,
    Conflict,
    UnsupportedMedia,
    UnprocessableEntity,
    TooManyRequests,
    ServerError,
}

impl Outcome {
    pub const ALL: [Outcome; 14] = [
        Outcome::Ok,
        Outcome::Created,
        Outcome::BadRequest,
        Outcome::AccessDenied,
        Outcome::Forbidden,
        Outcome::NotFound,
        Outcome::NotAllowed,
        Outcome::NotAcceptable,
        Outcome::ReqTimeout,
        Outcome::Conflict,
        Outcome::UnsupportedMedia,
        Outcome::UnprocessableEntity,
        Outcome::TooManyRequests,
        Outcome::ServerError,
    ];

    pub fn status_code(self) -> StatusCode {
        match self {
            Outcome::Ok => StatusCode::OK,
            Outcome::Created => StatusCode::CREATED,
            Outcome::BadRequest => StatusCode::BAD_REQUEST,
            Outcome::AccessDenied => StatusCode::UNAUTHORIZED,
            Outcome::Forbidden => StatusCode::FORBIDDEN,
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::NotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Outcome::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Outcome::ReqTimeout => StatusCode::REQUEST_TIMEOUT,
            Outcome::Conflict => StatusCode::CONFLICT,
            Outcome::UnsupportedMedia => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Outcome::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Outcome::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Outcome::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Outcome::Ok => "Success",
            Outcome::Created => "Resource created successfully",
            Outcome::BadRequest => "Bad Request",
            Outcome::AccessDenied => "Access Denied",
            Outcome::Forbidden => "Forbidden",
            Outcome::NotFound => "Not Found",
            Outcome::NotAllowed => "Method Not Allowed",
            Outcome::NotAcceptable => "Not Acceptable",
            Outcome::ReqTimeout => "Request Timeout",
            Outcome::Conflict => "Conflict",
            Outcome::UnsupportedMedia => "Unsupported Media Type",
            Outcome::UnprocessableEntity => "Unprocessable Entity",
            Outcome::TooManyRequests => "Too Many Requests",
            Outcome::ServerError => "Internal Server Error",
        }
    }

    /// Anything outside the 2xx class is reported with `err: true`.
    pub fn is_error(self) -> bool {
        !self.status_code().is_success()
    }

    /// Whether writing this outcome should also stop the rest of the handler chain.
    pub fn aborts_chain(self) -> bool {
        matches!(self, Outcome::AccessDenied)
    }
}
