use crate::error::RuleError;
use crate::mapping::VcsMapping;
use crate::policy::{EffectiveConfig, RuleErrorPolicy};
use crate::report::{MappingOutcome, ResolutionReport, Substitution};
use crate::rules::RuleChain;
use tracing::{debug, warn};
use vcsmap_types::{ComponentSelector, ids};

/// Run `chain` once for every requested selector and decide how each one is resolved.
///
/// Each selector gets a fresh [`VcsMapping`]; nothing carries over between dependencies.
pub fn resolve<I>(
    requests: I,
    chain: &RuleChain,
    cfg: &EffectiveConfig,
) -> Result<ResolutionReport, RuleError>
where
    I: IntoIterator<Item = ComponentSelector>,
{
    let mut outcomes = Vec::new();

    for requested in requests {
        let mut mapping = VcsMapping::from_selector(requested);

        let substitution = match chain.apply(&mut mapping, cfg) {
            Ok(()) => substitution_for(&mapping),
            Err(err) => match cfg.on_rule_error {
                RuleErrorPolicy::Abort => return Err(err),
                RuleErrorPolicy::Skip => {
                    warn!(
                        code = ids::CODE_INVALID_ARGUMENT,
                        rule = %err.rule,
                        requested = %err.requested,
                        error = %err.source,
                        "mapping rule failed; recording failure and continuing"
                    );
                    Substitution::Failed {
                        rule: err.rule,
                        message: err.source.to_string(),
                    }
                }
            },
        };

        debug!(
            requested = %mapping.requested(),
            outcome = substitution.code(),
            "vcs mapping decided"
        );

        let (requested, _, _) = mapping.into_parts();
        outcomes.push(MappingOutcome {
            requested,
            substitution,
        });
    }

    Ok(ResolutionReport::new(outcomes))
}

/// Read the final binding of an evaluated mapping.
pub fn substitution_for(mapping: &VcsMapping) -> Substitution {
    match mapping.repository() {
        Some(spec) => Substitution::Source(spec.clone()),
        None => Substitution::Artifact,
    }
}
