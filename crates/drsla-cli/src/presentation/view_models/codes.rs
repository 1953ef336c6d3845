use drsla_engine::ErrorDefinition;
use serde::Serialize;
use std::fmt;

use crate::presentation::style;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CodeListViewModel {
    pub definitions: Vec<&'static ErrorDefinition>,
}

impl fmt::Display for CodeListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.definitions.is_empty() {
            return writeln!(f, "No error codes match.");
        }

        let width = self
            .definitions
            .iter()
            .map(|d| d.code.as_str().len())
            .max()
            .unwrap_or(0);

        for def in &self.definitions {
            let severity = format!("{:<8}", def.severity.to_string());
            writeln!(
                f,
                "{:<width$}  {}  {:<14}  {}",
                def.code.as_str(),
                style::severity(def.severity, &severity),
                def.category.to_string(),
                def.title,
                width = width
            )?;
        }
        Ok(())
    }
}
