//! Per-request context
//!
//! Everything a controller may read about the incoming request is carried
//! here and passed down explicitly.

use crate::routing::Method;

/// Request information threaded from the front controller to the actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    /// Raw query string without the leading `?`
    pub query: Option<String>,
    pub is_head: bool,
}

impl RequestContext {
    /// Build a context from a method and a request target such as
    /// `/article/storytellers-legacy?p=2`
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (target, None),
        };
        Self {
            method,
            path: path.to_string(),
            query,
            is_head: method == Method::Head,
        }
    }

    /// First decoded value of query parameter `name`
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Method used to look up routes; `HEAD` is served by `GET` routes
    pub fn lookup_method(&self) -> Method {
        if self.is_head {
            Method::Get
        } else {
            self.method
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_query() {
        let ctx = RequestContext::new(Method::Get, "/article/storytellers-legacy?p=2");
        assert_eq!(ctx.path, "/article/storytellers-legacy");
        assert_eq!(ctx.query.as_deref(), Some("p=2"));
        assert!(!ctx.is_head);

        let ctx = RequestContext::new(Method::Get, "/articles");
        assert_eq!(ctx.query, None);
    }

    #[test]
    fn test_query_param_decoding() {
        let ctx = RequestContext::new(Method::Get, "/page/about?view=full&p=%203&name=a+b");
        assert_eq!(ctx.query_param("view").as_deref(), Some("full"));
        assert_eq!(ctx.query_param("p").as_deref(), Some(" 3"));
        assert_eq!(ctx.query_param("name").as_deref(), Some("a b"));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn test_query_param_first_value_wins() {
        let ctx = RequestContext::new(Method::Get, "/?p=1&p=2");
        assert_eq!(ctx.query_param("p").as_deref(), Some("1"));
    }

    #[test]
    fn test_head_uses_get_routes() {
        let ctx = RequestContext::new(Method::Head, "/articles");
        assert!(ctx.is_head);
        assert_eq!(ctx.lookup_method(), Method::Get);
        assert_eq!(RequestContext::new(Method::Post, "/").lookup_method(), Method::Post);
    }
}
