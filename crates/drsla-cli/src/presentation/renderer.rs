use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

use super::style;
use super::view_models::CommandResultViewModel;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        let json_mode = format == OutputFormat::Json;
        if !json_mode {
            style::init();
        }
        Self { json_mode }
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", result.content);
        Ok(())
    }
}
