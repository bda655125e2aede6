//! Front controller
//!
//! Entry point for HTTP request processing: body size and method checks,
//! route matching, controller dispatch and access logging.

use crate::config::AppState;
use crate::controller::{self, Reply};
use crate::handler::RequestContext;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{Method, RouteError};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Outcome of routing one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub reply: Reply,
    /// Matched handler as `Namespace::Controller::action`
    pub handler: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    let response = respond(&req, &target, &state, &mut entry);

    if state.config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }
    Ok(response)
}

fn respond(
    req: &Request<hyper::body::Incoming>,
    target: &str,
    state: &AppState,
    entry: &mut AccessLogEntry,
) -> Response<Full<Bytes>> {
    // 1. Check body size
    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return resp;
    }

    // 2. Check HTTP method
    let method = match req.method().as_str().parse::<Method>() {
        Ok(method) => method,
        Err(e) => {
            logger::log_warning(&format!("Method not allowed: {e}"));
            return http::build_405_response();
        }
    };

    // 3. Route and dispatch
    let ctx = RequestContext::new(method, target);
    let routed = route_request(&ctx, state);

    entry.body_bytes = body_bytes_sent(&ctx, &routed.reply.body);
    entry.handler = routed.handler;
    http::build_html_response(
        routed.reply.status,
        routed.reply.body,
        ctx.is_head,
        &state.config.http.server_name,
    )
}

/// Match `ctx` against the route table and run the matched action.
///
/// An unmatched request renders the 404 page.
pub fn route_request(ctx: &RequestContext, state: &AppState) -> Routed {
    let method = ctx.lookup_method();
    match state.router.match_route(method, &ctx.path) {
        Ok(matched) => {
            let handler = matched.route.handler_ref.to_string();
            logger::log_route_matched(method.as_str(), &ctx.path, &handler);
            Routed {
                reply: controller::dispatch(*matched.handler(), &matched.params, ctx, state),
                handler: Some(handler),
            }
        }
        Err(RouteError::NoRouteMatch { method, path }) => {
            logger::log_no_route(method.as_str(), &path);
            Routed {
                reply: Reply::not_found(),
                handler: None,
            }
        }
        Err(e) => {
            logger::log_error(&format!("Routing failed: {e}"));
            Routed {
                reply: Reply::not_found(),
                handler: None,
            }
        }
    }
}

/// Bytes actually written for `body`; `HEAD` responses carry none
fn body_bytes_sent(ctx: &RequestContext, body: &str) -> usize {
    if ctx.is_head {
        0
    } else {
        body.len()
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_09 {
        "0.9"
    } else if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else if version == hyper::Version::HTTP_3 {
        "3"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::ContentStore;
    use crate::routes::default_routes;
    use crate::routing::{RouteTable, Router, RouterOptions};

    const STORE: &str = r#"
        [[content]]
        id = 7
        kind = "article"
        status = "published"
        title = "Storytellers Legacy"
        alias = "storytellers-legacy"
        body = "<p>Chapter one</p><!-- pagebreak --><p>Chapter two</p>"
    "#;

    fn state_with(options: RouterOptions) -> AppState {
        let config = Config::load_from("/nonexistent/paged-cms-config").unwrap();
        let router = Router::new(RouteTable::build(&default_routes()).unwrap(), options);
        AppState::new(&config, router, ContentStore::from_toml(STORE).unwrap())
    }

    fn state() -> AppState {
        state_with(RouterOptions::default())
    }

    #[test]
    fn test_end_to_end_second_page() {
        let ctx = RequestContext::new(Method::Get, "/article/storytellers-legacy?p=2");
        let routed = route_request(&ctx, &state());
        assert_eq!(routed.reply.status, 200);
        assert_eq!(routed.handler.as_deref(), Some("Public::Articles::show"));
        assert!(routed.reply.body.contains("<p>Chapter two</p>"));
        assert!(routed.reply.body.contains("Page 2 of 2"));
    }

    #[test]
    fn test_unmatched_path_is_404() {
        let ctx = RequestContext::new(Method::Get, "/nowhere/at/all");
        let routed = route_request(&ctx, &state());
        assert_eq!(routed.reply.status, 404);
        assert_eq!(routed.handler, None);
    }

    #[test]
    fn test_wrong_method_is_404() {
        let ctx = RequestContext::new(Method::Delete, "/articles");
        assert_eq!(route_request(&ctx, &state()).reply.status, 404);
    }

    #[test]
    fn test_head_is_served_by_get_routes() {
        let ctx = RequestContext::new(Method::Head, "/article/storytellers-legacy");
        let routed = route_request(&ctx, &state());
        assert_eq!(routed.reply.status, 200);
        assert!(routed.reply.body.contains("Chapter one"));
    }

    #[test]
    fn test_router_switches_apply() {
        let strict = state_with(RouterOptions {
            case_sensitive: true,
            trailing_slash: false,
        });
        let ctx = RequestContext::new(Method::Get, "/Articles");
        assert_eq!(route_request(&ctx, &strict).reply.status, 404);
        assert_eq!(route_request(&ctx, &state()).reply.status, 200);

        let ctx = RequestContext::new(Method::Get, "/articles/");
        assert_eq!(route_request(&ctx, &state()).reply.status, 200);
        let significant = state_with(RouterOptions {
            case_sensitive: false,
            trailing_slash: true,
        });
        assert_eq!(route_request(&ctx, &significant).reply.status, 404);
    }

    #[test]
    fn test_head_logs_no_body_bytes() {
        let head = RequestContext::new(Method::Head, "/articles");
        let get = RequestContext::new(Method::Get, "/articles");
        assert_eq!(body_bytes_sent(&head, "<p>listing</p>"), 0);
        assert_eq!(body_bytes_sent(&get, "<p>listing</p>"), 14);
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(hyper::Version::HTTP_11), "1.1");
        assert_eq!(version_label(hyper::Version::HTTP_10), "1.0");
    }
}
