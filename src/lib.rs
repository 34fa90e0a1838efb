//! Curator library - skill library housekeeping for AI coding assistants.
//!
//! This crate provides the core functionality for triaging an indexed skill
//! library, migrating skill directories into a categorized tree, and keeping
//! assistant tool directories pointed at one canonical skills location.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod links;
pub mod migrate;
pub mod triage;
