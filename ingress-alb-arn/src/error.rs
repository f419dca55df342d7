use std::path::PathBuf;

/// Failures that end the lookup. Everything except `Exhausted` is raised
/// before any external tool runs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Failed reading input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("Input is not a valid JSON object: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Missing required input field: {0}")]
    MissingField(&'static str),

    #[error("Only one of kubeconfig or config_name may be given")]
    ConflictingKubeconfigSources,

    #[error("Kubeconfig file not found: {}", .0.display())]
    KubeconfigNotFound(PathBuf),

    #[error("Failed writing kubeconfig to {}: {source}", path.display())]
    KubeconfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the program location: {0}")]
    ProgramLocation(#[source] std::io::Error),

    #[error("Gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: AttemptFailure,
    },
}

/// A single correlation attempt that didn't produce an ARN. These are never
/// fatal on their own, they only feed the retry loop.
#[derive(Debug, thiserror::Error)]
pub enum AttemptFailure {
    #[error("Ingress hostname query failed: {0}")]
    HostnameQuery(#[source] CommandError),

    #[error("Ingress has no load balancer hostname yet")]
    EmptyHostname,

    #[error("Load balancer listing failed: {0}")]
    InventoryQuery(#[source] CommandError),

    #[error("Failed decoding load balancer listing: {0}")]
    InventoryDecode(#[source] serde_json::Error),

    #[error("No active load balancer with DNS name {0}")]
    NoActiveMatch(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed running {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {code}: {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("{program} timed out after {timeout:?}")]
    Timeout {
        program: String,
        timeout: std::time::Duration,
    },
}
