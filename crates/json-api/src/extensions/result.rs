//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

pub(crate) trait ResultExt<T> {
    /// Log the error with `context` and answer with a bare 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn error_becomes_internal_server_error() {
        let result: Result<(), &str> = Err("header value contained a newline");

        assert!(
            result
                .or_500("failed to set location header")
                .is_err_and(|error| error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "errors should map to a 500"
        );
    }

    #[test]
    fn ok_value_passes_through() {
        let result: Result<u8, &str> = Ok(7);

        assert!(
            matches!(result.or_500("unused"), Ok(7)),
            "ok values should be returned unchanged"
        );
    }
}
