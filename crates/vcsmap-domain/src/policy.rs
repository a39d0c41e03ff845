/// What to emit when a rule replaces a repository attached by an earlier rule.
///
/// Never changes the outcome: the last attached repository always wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    Silent,
    #[default]
    Debug,
    Warn,
}

/// What the resolution pass does when a rule fails for one dependency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleErrorPolicy {
    /// Stop the pass and return the error.
    #[default]
    Abort,
    /// Record the failure for that dependency and keep going.
    Skip,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub on_overwrite: OverwritePolicy,
    pub on_rule_error: RuleErrorPolicy,
}
