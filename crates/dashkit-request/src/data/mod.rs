//! Immutable request configuration.

mod options;

pub use options::{ErrorHandler, Payload, RequestOptions, SuccessHandler};

use std::fmt;
use std::str::FromStr;

use crate::error::MethodParseError;

/// HTTP methods the dashboard issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether form payloads ride in the request body; for the body-less
    /// methods they ride as a query string instead.
    pub fn carries_body(self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "head" => Ok(Method::Head),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "patch" => Ok(Method::Patch),
            "delete" => Ok(Method::Delete),
            _ => Err(MethodParseError(s.to_string())),
        }
    }
}

/// One dispatch handed to a transport: everything needed to issue the
/// network call, nothing about UI feedback or completion delivery.
#[derive(Debug)]
pub struct Call<'a> {
    pub url: &'a str,
    pub method: Method,
    pub payload: Option<&'a Payload>,
    pub content_type: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn test_method_defaults_to_get() {
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
    }

    #[test]
    fn test_unknown_method_is_an_error() {
        assert!("fetch".parse::<Method>().is_err());
    }

    #[test]
    fn test_body_less_methods() {
        assert!(!Method::Get.carries_body());
        assert!(!Method::Head.carries_body());
        assert!(Method::Post.carries_body());
    }
}
