//! Core module - Contains the classification engine and its collaborators
//!
//! This module provides:
//! - Error taxonomy with exit codes
//! - Data model (classes, policies, frequency tables, report)
//! - Byte classification and counting
//! - Repetition-policy selection
//! - File reading
//! - Report assembly and rendering

pub mod classify;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod report;
pub mod select;
