//! Logger module
//!
//! Server lifecycle, routing and access logging. Lines go through the
//! global writer once [`init`] has run and fall back to stdout/stderr
//! before that.

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::Level;

use crate::config::Config;
use std::net::SocketAddr;

/// Install the global writer from `config`. Call once at startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config.logging.level.parse()?;
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: Level) -> bool {
    writer::get().map_or(level <= Level::Info, |w| level <= w.level())
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn log_debug(message: &str) {
    if enabled(Level::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&format!(
        "Routing: case_sensitive={} trailing_slash={}",
        config.routing.case_sensitive, config.routing.trailing_slash
    ));
    write_info("======================================\n");
}

pub fn log_route_table_built(count: usize, manifest: Option<&str>) {
    match manifest {
        Some(path) => write_info(&format!("[Routes] {count} routes loaded from {path}")),
        None => write_info(&format!("[Routes] {count} built-in routes registered")),
    }
}

pub fn log_duplicate_route(method: &str, pattern: &str) {
    log_warning(&format!(
        "[Routes] {method} {pattern} is registered more than once; the first registration wins"
    ));
}

pub fn log_content_loaded(count: usize, path: &str) {
    write_info(&format!("[Content] {count} records loaded from {path}"));
}

pub fn log_route_matched(method: &str, path: &str, handler: &str) {
    log_debug(&format!("[Route] {method} {path} -> {handler}"));
}

pub fn log_no_route(method: &str, path: &str) {
    log_debug(&format!("[Route] no route for {method} {path}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_connection_limit(max: u64) {
    log_warning(&format!("[Connection] Limit of {max} reached, rejecting"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if enabled(Level::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("\n[Shutdown] {reason}, no longer accepting connections"));
}
