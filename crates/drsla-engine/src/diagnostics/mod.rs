// Diagnostics module - SLA rule evaluation for protection groups
// Pure business logic: no I/O, one clock reading per analysis

pub mod analyzer;
pub mod classifier;
pub mod registry;
pub mod result;
pub mod summary;

pub use analyzer::{Analyzer, analyze_protection_group, analyze_protection_group_at};
pub use classifier::{ErrorClassifier, RegexClassifier};
pub use registry::{ErrorDefinition, all_definitions, definition};
pub use result::{DiagnosticContext, DiagnosticResult};
pub use summary::{DiagnosticSummary, GroupHealth, GroupReport};
