use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Resolves the ARN of the load balancer behind the cluster's ingress gateway")]
pub struct Config {
    /// Turn debug logs on
    #[arg(long, env = "ALB_ARN_DEBUG")]
    debug: bool,

    /// Turn debug logs for all crates (not recommended)
    #[arg(long)]
    all_debug: bool,

    /// Give up on a single kubectl/aws invocation after this long
    #[arg(long, env = "ALB_ARN_COMMAND_TIMEOUT")]
    command_timeout: Option<humantime::Duration>,

    #[command(flatten)]
    pub kubeconfig: crate::kubeconfig::Config,

    #[command(flatten)]
    pub cluster: crate::cluster::Config,

    #[command(flatten)]
    pub inventory: crate::inventory::Config,

    #[command(flatten)]
    pub retry: crate::correlator::Config,
}

impl Config {
    pub fn log_level(&self) -> tracing::Level {
        match self.debug {
            true => tracing::Level::DEBUG,
            false => tracing::Level::INFO,
        }
    }

    pub fn all_log_level(&self) -> tracing::Level {
        match self.all_debug {
            true => tracing::Level::DEBUG,
            false => tracing::Level::INFO,
        }
    }

    /// `RUST_LOG`-style directives derived from the debug flags, covering this
    /// library and the binary target that embeds it.
    pub fn log_directives(&self, bin_target: &str) -> String {
        let level = self.log_level();
        format!(
            "{},{}={level},{bin_target}={level}",
            self.all_log_level(),
            env!("CARGO_CRATE_NAME"),
        )
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout.map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;

    #[test]
    fn debug_covers_library_and_binary() {
        let config = Config::parse_from(["get-alb-arn", "--debug"]);
        assert_eq!(
            config.log_directives("get_alb_arn"),
            "INFO,ingress_alb_arn=DEBUG,get_alb_arn=DEBUG"
        );
    }

    #[test]
    fn defaults_to_info() {
        let config = Config::parse_from(["get-alb-arn"]);
        assert_eq!(
            config.log_directives("get_alb_arn"),
            "INFO,ingress_alb_arn=INFO,get_alb_arn=INFO"
        );
        assert_eq!(config.retry.attempts, 100);
        assert_eq!(*config.retry.retry_interval, std::time::Duration::from_secs(1));
        assert_eq!(config.command_timeout(), None);
    }
}
