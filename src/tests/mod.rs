// Test modules for llm-request-guard crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Test helper utilities
pub mod helpers;

pub mod request;
