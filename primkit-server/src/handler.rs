//! Request handler for primkit-server

use primkit_core::{numeric, text, MathError, Number, Request, Response};
use tracing::{debug, info, warn};

pub struct Handler;

impl Handler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, request: &Request) -> Response {
        debug!(method = request.method(), "handling request");

        match request {
            Request::Sum { values } => self.handle_sum(values),
            Request::Mean { values } => {
                let value = Number::Float(numeric::mean_numbers(values));
                debug!(count = values.len(), "mean = {}", value);
                Response::Number { value }
            }
            Request::Factorial { n } => self.handle_factorial(*n),
            Request::IsPrime { n } => Response::Bool {
                result: numeric::is_prime(*n),
            },
            Request::ToUpper { text } => Response::text(text::to_upper(text)),
            Request::ToLower { text } => Response::text(text::to_lower(text)),
            Request::Trim { text } => Response::text(text::trim(text)),
            Request::Split { text, delimiter } => Response::Parts {
                parts: text::split(text, *delimiter),
            },
            Request::IsPalindrome { text } => Response::Bool {
                result: text::is_palindrome(text),
            },
            Request::Shutdown => {
                info!("Shutdown requested");
                Response::success()
            }
        }
    }

    fn handle_sum(&self, values: &[Number]) -> Response {
        match numeric::sum_numbers(values) {
            Ok(value) => {
                debug!(count = values.len(), "sum = {} ({})", value, value.type_name());
                Response::Number { value }
            }
            Err(e) => Self::math_error(&e),
        }
    }

    fn handle_factorial(&self, n: i64) -> Response {
        match numeric::factorial(n) {
            Ok(factorial) => Response::Factorial { factorial },
            Err(e) => Self::math_error(&e),
        }
    }

    fn math_error(err: &MathError) -> Response {
        warn!(kind = err.kind(), "{}", err);
        Response::from_math_error(err)
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
