use crate::error::AttemptFailure;
use crate::kubeconfig::KubeconfigHandle;
use crate::process::run_command;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::time::Duration;

const HOSTNAME_JSONPATH: &str = "jsonpath={.status.loadBalancer.ingress[*].hostname}";

#[derive(Debug, Clone, clap::Args)]
#[group(skip)]
pub struct Config {
    /// kubectl executable
    #[arg(long, env = "ALB_ARN_KUBECTL", default_value = "kubectl")]
    pub kubectl: String,

    #[arg(long, env = "ALB_ARN_INGRESS_NAMESPACE", default_value = "istio-system")]
    pub ingress_namespace: String,

    #[arg(long, env = "ALB_ARN_INGRESS_NAME", default_value = "istio-alb-ingressgateway")]
    pub ingress_name: String,
}

impl Config {
    pub fn ingress(&self) -> IngressRef {
        IngressRef {
            namespace: self.ingress_namespace.clone(),
            name: self.ingress_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressRef {
    pub namespace: String,
    pub name: String,
}

#[async_trait]
pub trait IngressHostnameLookup {
    /// Hostname assigned to the ingress by its load balancer. Empty while the
    /// load balancer is still being provisioned.
    async fn ingress_hostname(
        &self,
        kubeconfig: &KubeconfigHandle,
        ingress: &IngressRef,
    ) -> Result<String, AttemptFailure>;
}

pub struct Kubectl {
    program: String,
    timeout: Option<Duration>,
}

impl Kubectl {
    pub fn new(config: &Config, timeout: Option<Duration>) -> Self {
        Self {
            program: config.kubectl.clone(),
            timeout,
        }
    }
}

#[async_trait]
impl IngressHostnameLookup for Kubectl {
    async fn ingress_hostname(
        &self,
        kubeconfig: &KubeconfigHandle,
        ingress: &IngressRef,
    ) -> Result<String, AttemptFailure> {
        let kubeconfig = kubeconfig.path().as_os_str();
        let args: [&OsStr; 9] = [
            "--kubeconfig".as_ref(),
            kubeconfig,
            "-n".as_ref(),
            ingress.namespace.as_ref(),
            "get".as_ref(),
            "ingress".as_ref(),
            ingress.name.as_ref(),
            "-o".as_ref(),
            HOSTNAME_JSONPATH.as_ref(),
        ];
        run_command(&self.program, args, self.timeout)
            .await
            .map_err(AttemptFailure::HostnameQuery)
    }
}
