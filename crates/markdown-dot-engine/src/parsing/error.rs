/// Raised while building a custom rule set.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        source: regex::Error,
    },
    #[error("Pattern for rule '{rule}' has no named group '{group}'")]
    MissingGroup { rule: String, group: String },
    #[error("Block rule '{0}' has no opening pattern")]
    NoOpening(String),
}

/// Compiles `pattern`, naming `rule` in the error.
pub(crate) fn compile(rule: &str, pattern: &str) -> Result<regex::Regex, RuleError> {
    regex::Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        rule: rule.to_string(),
        source,
    })
}

/// Fails unless `re` declares a capture group called `group`.
pub(crate) fn require_group(
    rule: &str,
    re: &regex::Regex,
    group: &str,
) -> Result<(), RuleError> {
    if re.capture_names().flatten().any(|name| name == group) {
        Ok(())
    } else {
        Err(RuleError::MissingGroup {
            rule: rule.to_string(),
            group: group.to_string(),
        })
    }
}
