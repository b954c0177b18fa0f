//! Scaffolding results.
//!
//! Generation itself lives outside this workspace; these types describe
//! what a generator reports back.

mod project;

pub use project::GeneratedProject;
