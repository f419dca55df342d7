use crate::cluster::{IngressHostnameLookup, IngressRef};
use crate::error::{AttemptFailure, LookupError};
use crate::inventory::{LoadBalancerInventory, LoadBalancerRecord};
use crate::kubeconfig::KubeconfigHandle;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, clap::Args)]
#[group(skip)]
pub struct Config {
    /// Total correlation attempts before giving up
    #[arg(
        long,
        env = "ALB_ARN_ATTEMPTS",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub attempts: u32,

    /// Fixed delay between failed attempts
    #[arg(long, env = "ALB_ARN_RETRY_INTERVAL", default_value = "1s")]
    pub retry_interval: humantime::Duration,
}

/// ARN on success, otherwise the reason this attempt should be retried.
pub type AttemptOutcome = Result<String, AttemptFailure>;

/// First active record whose DNS name is exactly `hostname`, in inventory order.
pub fn select_load_balancer<'a>(
    records: &'a [LoadBalancerRecord],
    hostname: &str,
) -> Option<&'a LoadBalancerRecord> {
    records
        .iter()
        .find(|record| record.dns_name == hostname && record.is_active())
}

/// Matches the hostname a cluster reports for its ingress against the cloud
/// provider's load balancers. Both sides settle on their own schedule, so
/// every attempt fetches both afresh.
pub struct Correlator<'a, L, I> {
    lookup: &'a L,
    inventory: &'a I,
    ingress: IngressRef,
    policy: Config,
}

impl<'a, L, I> Correlator<'a, L, I>
where
    L: IngressHostnameLookup,
    I: LoadBalancerInventory,
{
    pub fn new(lookup: &'a L, inventory: &'a I, ingress: IngressRef, policy: Config) -> Self {
        Self {
            lookup,
            inventory,
            ingress,
            policy,
        }
    }

    pub async fn attempt(&self, kubeconfig: &KubeconfigHandle, profile: &str) -> AttemptOutcome {
        let hostname = self
            .lookup
            .ingress_hostname(kubeconfig, &self.ingress)
            .await?;
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return Err(AttemptFailure::EmptyHostname);
        }
        debug!(hostname, "ingress hostname");

        let records = self.inventory.load_balancers(profile).await?;
        debug!(count = records.len(), "load balancers listed");

        select_load_balancer(&records, hostname)
            .map(|record| record.load_balancer_arn.clone())
            .ok_or_else(|| AttemptFailure::NoActiveMatch(hostname.to_owned()))
    }

    #[tracing::instrument(skip_all, fields(kubeconfig = %kubeconfig, profile = %profile))]
    pub async fn resolve(
        &self,
        kubeconfig: &KubeconfigHandle,
        profile: &str,
    ) -> Result<String, LookupError> {
        let attempts = self.policy.attempts.max(1);

        tryhard::retry_fn(|| self.attempt(kubeconfig, profile))
            .retries(attempts - 1)
            .fixed_backoff(*self.policy.retry_interval)
            .on_retry(
                |attempt: u32, next_delay: Option<Duration>, failure: &AttemptFailure| {
                    warn!(attempt, ?next_delay, "attempt failed: {failure}");
                    std::future::ready(())
                },
            )
            .await
            .map_err(|last| LookupError::Exhausted { attempts, last })
    }
}
