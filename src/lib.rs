//! Portfolio assistant
//!
//! Two independent ways to answer visitors' questions about a portfolio:
//! a scripted rule table evaluated locally ([`dispatcher`]), and an HTTP
//! proxy that forwards the conversation to a generative model ([`api`]).

pub mod api;
pub mod assistant;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod knowledge;
pub mod llm;
pub mod render;
pub mod session;
