//! Global platform counters.

use serde::{Deserialize, Deserializer, Serialize};

use crate::RunId;

/// Snapshot of the global platform state returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub plugins: u64,
    pub agents: u64,
    pub skills: u64,
    pub orchestrators: u64,

    /// Display name of the active execution plan.
    pub active_plan_name: String,

    /// Run currently executing the plan. Empty strings and `null` both mean
    /// there is no active run.
    #[serde(default, deserialize_with = "non_empty_run_id")]
    pub active_run_id: Option<RunId>,
}

impl Stats {
    /// Create stats with no active run.
    pub fn new(plugins: u64, agents: u64, skills: u64, orchestrators: u64) -> Self {
        Self {
            plugins,
            agents,
            skills,
            orchestrators,
            active_plan_name: String::new(),
            active_run_id: None,
        }
    }

    /// Builder method to set the active plan and its run.
    pub fn with_active_run(
        mut self,
        plan_name: impl Into<String>,
        run_id: impl Into<RunId>,
    ) -> Self {
        self.active_plan_name = plan_name.into();
        self.active_run_id = Some(run_id.into());
        self
    }
}

fn non_empty_run_id<'de, D>(deserializer: D) -> Result<Option<RunId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<RunId>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_payload() {
        let json = r#"{
            "plugins": 42, "agents": 18, "skills": 127, "orchestrators": 9,
            "activePlanName": "Production Deployment Pipeline",
            "activeRunId": "run_abc123"
        }"#;
        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.plugins, 42);
        assert_eq!(stats.orchestrators, 9);
        assert_eq!(stats.active_run_id, Some(RunId::new("run_abc123")));
    }

    #[test]
    fn test_missing_null_or_empty_run_id_means_no_run() {
        for tail in [r#""#, r#", "activeRunId": null"#, r#", "activeRunId": """#] {
            let json = format!(
                r#"{{"plugins":0,"agents":0,"skills":0,"orchestrators":0,"activePlanName":""{}}}"#,
                tail
            );
            let stats: Stats = serde_json::from_str(&json).unwrap();
            assert_eq!(stats.active_run_id, None, "payload: {}", json);
        }
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        let json = r#"{"plugins":-1,"agents":0,"skills":0,"orchestrators":0,"activePlanName":""}"#;
        assert!(serde_json::from_str::<Stats>(json).is_err());
    }
}
