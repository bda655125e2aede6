//! A small content site: a grouped route table, a first-match router and
//! page-break pagination of rich-text bodies, served over hyper.

pub mod config;
pub mod content;
pub mod controller;
pub mod handler;
pub mod http;
pub mod logger;
pub mod pagination;
pub mod routes;
pub mod routing;
pub mod server;
pub mod view;
