//! Layered variable resolution.
//!
//! Probes, in order: process environment, the target's deploy vars, the
//! target's build vars, then the same-named target in the local rc file
//! (deploy vars, build vars, auth info). The first non-empty value wins.
//! Every absence branch yields the single sentinel `None`.

use crate::core::config::{self, LocalConfig, Target};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::env;

/// The layer a variable was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableSource {
    Environment,
    TargetDeployVars,
    TargetBuildVars,
    RcDeployVars,
    RcBuildVars,
    RcAuthInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVariable {
    pub value: String,
    pub source: VariableSource,
}

/// Resolve a variable through the full chain, loading the rc file lazily.
///
/// The rc file is only read (and only then parsed) after the environment
/// and in-memory target layers have missed.
pub fn get_variable(name: &str, target: Option<&Target>) -> Result<Option<ResolvedVariable>> {
    if let Some(resolved) = resolve(name, target, None) {
        return Ok(Some(resolved));
    }

    let Some(target) = target else {
        return Ok(None);
    };
    let Some(rc) = config::load_local_config()? else {
        return Ok(None);
    };
    Ok(resolve_rc(name, target, &rc))
}

/// Resolution chain with the rc file supplied by the caller.
pub fn resolve(
    name: &str,
    target: Option<&Target>,
    rc: Option<&LocalConfig>,
) -> Option<ResolvedVariable> {
    if let Ok(value) = env::var(name) {
        if !value.is_empty() {
            return Some(ResolvedVariable {
                value,
                source: VariableSource::Environment,
            });
        }
    }

    let target = target?;

    if let Some(value) = lookup(target.tgt_deploy_vars.as_ref(), name) {
        return Some(ResolvedVariable {
            value,
            source: VariableSource::TargetDeployVars,
        });
    }
    if let Some(value) = lookup(target.tgt_build_vars.as_ref(), name) {
        return Some(ResolvedVariable {
            value,
            source: VariableSource::TargetBuildVars,
        });
    }

    resolve_rc(name, target, rc?)
}

fn resolve_rc(name: &str, target: &Target, rc: &LocalConfig) -> Option<ResolvedVariable> {
    let rc_target = rc.find_target(&target.name)?;

    if let Some(value) = lookup(rc_target.tgt_deploy_vars.as_ref(), name) {
        return Some(ResolvedVariable {
            value,
            source: VariableSource::RcDeployVars,
        });
    }
    if let Some(value) = lookup(rc_target.tgt_build_vars.as_ref(), name) {
        return Some(ResolvedVariable {
            value,
            source: VariableSource::RcBuildVars,
        });
    }
    lookup(rc_target.auth_info.as_ref(), name).map(|value| ResolvedVariable {
        value,
        source: VariableSource::RcAuthInfo,
    })
}

fn lookup(vars: Option<&HashMap<String, String>>, name: &str) -> Option<String> {
    vars.and_then(|m| m.get(name))
        .filter(|v| !v.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn target(name: &str) -> Target {
        Target {
            name: name.to_string(),
            ..Target::default()
        }
    }

    #[test]
    fn environment_wins_over_target_values() {
        // Unique name so parallel tests cannot collide.
        env::set_var("SASCLI_TEST_ENV_WINS", "from-env");
        let mut t = target("viya");
        t.tgt_deploy_vars = vars(&[("SASCLI_TEST_ENV_WINS", "from-target")]);

        let resolved = resolve("SASCLI_TEST_ENV_WINS", Some(&t), None).unwrap();
        assert_eq!(resolved.value, "from-env");
        assert_eq!(resolved.source, VariableSource::Environment);
    }

    #[test]
    fn target_deploy_vars_win_over_build_vars() {
        let mut t = target("viya");
        t.tgt_deploy_vars = vars(&[("KEY", "deploy")]);
        t.tgt_build_vars = vars(&[("KEY", "build")]);

        let resolved = resolve("KEY", Some(&t), None).unwrap();
        assert_eq!(resolved.value, "deploy");
        assert_eq!(resolved.source, VariableSource::TargetDeployVars);
    }

    #[test]
    fn falls_back_to_rc_target_layers_in_order() {
        let t = target("viya");

        let mut rc_target = target("viya");
        rc_target.tgt_deploy_vars = vars(&[("KEY", "rc-deploy")]);
        rc_target.tgt_build_vars = vars(&[("KEY", "rc-build"), ("BKEY", "rc-build")]);
        rc_target.auth_info = vars(&[
            ("KEY", "rc-auth"),
            ("BKEY", "rc-auth"),
            ("TOKEN", "rc-token"),
        ]);
        let rc = LocalConfig {
            targets: vec![rc_target],
        };

        let resolved = resolve("KEY", Some(&t), Some(&rc)).unwrap();
        assert_eq!(resolved.value, "rc-deploy");
        assert_eq!(resolved.source, VariableSource::RcDeployVars);

        let resolved = resolve("BKEY", Some(&t), Some(&rc)).unwrap();
        assert_eq!(resolved.value, "rc-build");
        assert_eq!(resolved.source, VariableSource::RcBuildVars);

        let resolved = resolve("TOKEN", Some(&t), Some(&rc)).unwrap();
        assert_eq!(resolved.value, "rc-token");
        assert_eq!(resolved.source, VariableSource::RcAuthInfo);
    }

    // Single test so SASCLI_RC is never mutated from two tests at once.
    #[test]
    fn rc_file_is_only_read_after_memory_layers_miss() {
        use std::io::Write;

        let mut corrupt = tempfile::NamedTempFile::new().unwrap();
        write!(corrupt, "{{ not json").unwrap();
        env::set_var("SASCLI_RC", corrupt.path());

        // Environment layer wins without the rc file ever being parsed.
        env::set_var("SASCLI_TEST_LAZY_RC", "from-env");
        let resolved = get_variable("SASCLI_TEST_LAZY_RC", Some(&target("viya")))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.value, "from-env");
        assert_eq!(resolved.source, VariableSource::Environment);
        env::remove_var("SASCLI_TEST_LAZY_RC");

        // Same for the in-memory target layers.
        let mut t = target("viya");
        t.tgt_deploy_vars = vars(&[("SASCLI_TEST_LAZY_RC_DEPLOY", "from-target")]);
        let resolved = get_variable("SASCLI_TEST_LAZY_RC_DEPLOY", Some(&t))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.source, VariableSource::TargetDeployVars);

        // Once those layers miss, the rc file is consulted for real.
        let mut valid = tempfile::NamedTempFile::new().unwrap();
        write!(
            valid,
            r#"{{ "targets": [ {{ "name": "viya", "tgtDeployVars": {{ "SASCLI_TEST_LAZY_RC_ONLY": "from-rc" }} }} ] }}"#
        )
        .unwrap();
        env::set_var("SASCLI_RC", valid.path());

        let resolved = get_variable("SASCLI_TEST_LAZY_RC_ONLY", Some(&target("viya")))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.value, "from-rc");
        assert_eq!(resolved.source, VariableSource::RcDeployVars);

        // A corrupt rc file still surfaces once it genuinely has to be read.
        env::set_var("SASCLI_RC", corrupt.path());
        let err = get_variable("SASCLI_TEST_LAZY_RC_ONLY", Some(&target("viya"))).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");

        env::remove_var("SASCLI_RC");
    }

    #[test]
    fn rc_target_is_matched_by_name() {
        let t = target("viya");

        let mut other = target("other");
        other.auth_info = vars(&[("KEY", "wrong-target")]);
        let rc = LocalConfig {
            targets: vec![other],
        };

        assert!(resolve("KEY", Some(&t), Some(&rc)).is_none());
    }

    #[test]
    fn empty_values_are_treated_as_absent() {
        let mut t = target("viya");
        t.tgt_deploy_vars = vars(&[("KEY", "")]);
        t.tgt_build_vars = vars(&[("KEY", "build")]);

        let resolved = resolve("KEY", Some(&t), None).unwrap();
        assert_eq!(resolved.value, "build");
    }

    #[test]
    fn absent_everywhere_yields_none() {
        assert!(resolve("SASCLI_TEST_DEFINITELY_UNSET", None, None).is_none());
        assert!(resolve("SASCLI_TEST_DEFINITELY_UNSET", Some(&target("viya")), None).is_none());
    }
}
