//! Usage: Infrastructure adapters (filesystem paths, persistence, network probing).

pub(crate) mod app_paths;
pub(crate) mod reachability;
pub(crate) mod settings;
