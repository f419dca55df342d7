pub mod cluster;
pub mod config;
pub mod correlator;
pub mod error;
pub mod input;
pub mod inventory;
pub mod kubeconfig;
pub mod output;
mod process;

pub use crate::cluster::{IngressHostnameLookup, IngressRef, Kubectl};
pub use crate::config::Config;
pub use crate::correlator::Correlator;
pub use crate::error::{AttemptFailure, CommandError, LookupError};
pub use crate::input::{KubeconfigSource, RequestConfig};
pub use crate::inventory::{AwsCli, LoadBalancerInventory, LoadBalancerRecord};
pub use crate::kubeconfig::KubeconfigHandle;
pub use crate::output::ResolutionOutput;

use tokio::io::AsyncRead;
use tracing::info;

/// Resolves the kubeconfig for `request` and correlates until an ARN turns up
/// or the retry policy runs out.
pub async fn resolve_request<L, I>(
    config: &Config,
    request: &RequestConfig,
    lookup: &L,
    inventory: &I,
) -> Result<ResolutionOutput, LookupError>
where
    L: IngressHostnameLookup,
    I: LoadBalancerInventory,
{
    let kubeconfig = kubeconfig::resolve(&config.kubeconfig, &request.kubeconfig).await?;

    let correlator = Correlator::new(
        lookup,
        inventory,
        config.cluster.ingress(),
        config.retry.clone(),
    );
    let load_balancer_arn = correlator
        .resolve(&kubeconfig, &request.credentials_profile)
        .await?;
    info!(arn = %load_balancer_arn, "resolved load balancer");

    Ok(ResolutionOutput { load_balancer_arn })
}

/// Reads the request from `input` and resolves it. Input problems surface
/// before either collaborator is touched.
pub async fn run<R, L, I>(
    config: &Config,
    input: R,
    lookup: &L,
    inventory: &I,
) -> Result<ResolutionOutput, LookupError>
where
    R: AsyncRead + Unpin,
    L: IngressHostnameLookup,
    I: LoadBalancerInventory,
{
    let request = RequestConfig::read_from(input).await?;
    resolve_request(config, &request, lookup, inventory).await
}
