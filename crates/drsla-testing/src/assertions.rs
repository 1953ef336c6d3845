//! Custom assertions over the CLI's JSON output.
//!
//! Every JSON payload is wrapped as `{ "content": ... }`; for `analyze` the
//! content is an array of group reports.

use anyhow::{Context, Result};
use serde_json::Value;

fn reports(json: &Value) -> Result<&Vec<Value>> {
    json["content"]
        .as_array()
        .context("Expected 'content' array in JSON")
}

fn report<'a>(json: &'a Value, group_name: &str) -> Result<&'a Value> {
    reports(json)?
        .iter()
        .find(|r| r["groupName"] == group_name)
        .with_context(|| format!("No report for group {}", group_name))
}

/// Assert that the analysis covers `expected` groups.
pub fn assert_group_count(json: &Value, expected: usize) -> Result<()> {
    let count = reports(json)?.len();
    if count != expected {
        anyhow::bail!("Expected {} group reports, got {}", expected, count);
    }
    Ok(())
}

/// Error codes reported for `group_name`, in ranked order.
pub fn group_codes(json: &Value, group_name: &str) -> Result<Vec<String>> {
    let diagnostics = report(json, group_name)?["diagnostics"]
        .as_array()
        .with_context(|| format!("Group {} has no diagnostics array", group_name))?;

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| {
            d["errorCode"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Diagnostic {} missing errorCode", i))
        })
        .collect()
}

/// Assert the exact ranked code list of one group.
pub fn assert_group_codes(json: &Value, group_name: &str, expected: &[&str]) -> Result<()> {
    let codes = group_codes(json, group_name)?;
    if codes != expected {
        anyhow::bail!(
            "Group {} reported {:?} but expected {:?}",
            group_name,
            codes,
            expected
        );
    }
    Ok(())
}

/// Assert the health badge of one group.
pub fn assert_group_health(json: &Value, group_name: &str, expected: &str) -> Result<()> {
    let health = report(json, group_name)?["health"]
        .as_str()
        .with_context(|| format!("Group {} missing health", group_name))?;

    if health != expected {
        anyhow::bail!(
            "Group {} has health {} but expected {}",
            group_name,
            health,
            expected
        );
    }
    Ok(())
}
