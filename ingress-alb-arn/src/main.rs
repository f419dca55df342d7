use anyhow::Result;
use clap::Parser;
use ingress_alb_arn::{AwsCli, Config, Kubectl};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    // stdout is reserved for the result
    let directives = config.log_directives(env!("CARGO_CRATE_NAME"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)),
        )
        .init();
    debug!(?config, "starting");

    let kubectl = Kubectl::new(&config.cluster, config.command_timeout());
    let aws = AwsCli::new(&config.inventory, config.command_timeout());

    let output = ingress_alb_arn::run(&config, tokio::io::stdin(), &kubectl, &aws).await?;
    output.write_to(std::io::stdout().lock())
}
