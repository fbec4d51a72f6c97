use crate::server::error::{request::RequestError, AppError};


/// Unwraps the business outcome of a rejected service call.
fn rejection<T: std::fmt::Debug>(result: Result<T, AppError>) -> RequestError {
    match result {
        Err(AppError::RequestErr(err)) => err,
        other => panic!("expected request error, got {:?}", other),
    }
}
