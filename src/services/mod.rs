// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod activity_manager;
pub mod report;


pub use activity_manager::ActivityManager;

pub use report::{analysis_excerpt, render_report, report_file_name, ANALYSIS_EXCERPT_CHARS};
