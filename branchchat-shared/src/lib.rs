//! Shared wire and data models for the BranchChat client.

pub mod models;
