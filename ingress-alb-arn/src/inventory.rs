use crate::error::AttemptFailure;
use crate::process::run_command;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, clap::Args)]
#[group(skip)]
pub struct Config {
    /// AWS CLI executable
    #[arg(long, env = "ALB_ARN_AWS", default_value = "aws")]
    pub aws: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerStateCode {
    Active,
    Provisioning,
    ActiveImpaired,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerState {
    pub code: LoadBalancerStateCode,
}

/// One entry of `elbv2 describe-load-balancers`, reduced to what we match on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerRecord {
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    pub state: LoadBalancerState,
    pub load_balancer_arn: String,
}

impl LoadBalancerRecord {
    pub fn is_active(&self) -> bool {
        self.state.code == LoadBalancerStateCode::Active
    }
}

pub fn decode_inventory(output: &str) -> Result<Vec<LoadBalancerRecord>, AttemptFailure> {
    serde_json::from_str(output).map_err(AttemptFailure::InventoryDecode)
}

#[async_trait]
pub trait LoadBalancerInventory {
    /// Every load balancer visible to `profile`, in the order the provider
    /// returns them.
    async fn load_balancers(&self, profile: &str)
        -> Result<Vec<LoadBalancerRecord>, AttemptFailure>;
}

pub struct AwsCli {
    program: String,
    timeout: Option<Duration>,
}

impl AwsCli {
    pub fn new(config: &Config, timeout: Option<Duration>) -> Self {
        Self {
            program: config.aws.clone(),
            timeout,
        }
    }
}

#[async_trait]
impl LoadBalancerInventory for AwsCli {
    async fn load_balancers(
        &self,
        profile: &str,
    ) -> Result<Vec<LoadBalancerRecord>, AttemptFailure> {
        let output = run_command(
            &self.program,
            [
                "elbv2",
                "describe-load-balancers",
                "--profile",
                profile,
                "--query",
                "LoadBalancers[*]",
                "--output",
                "json",
            ],
            self.timeout,
        )
        .await
        .map_err(AttemptFailure::InventoryQuery)?;

        decode_inventory(&output)
    }
}
