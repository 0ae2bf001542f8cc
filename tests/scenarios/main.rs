//! Scenario-based tests for blog-writer

#[path = "../helpers.rs"]
mod helpers;

mod edge_cases;
mod failure_handling;
mod prompt_flow;
mod success_chain;
