use crate::error::LookupError;
use crate::input::KubeconfigSource;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

const SHARED_KUBECONFIG_DIR: &str = "../kubeconfigs";

#[derive(Debug, Clone, clap::Args)]
#[group(skip)]
pub struct Config {
    /// Where inline kubeconfig content is written, relative to the working directory
    #[arg(long, env = "ALB_ARN_INLINE_KUBECONFIG_PATH", default_value = "kube_config.yaml")]
    pub inline_kubeconfig_path: PathBuf,

    /// Directory holding named kubeconfigs, defaults to ../kubeconfigs next to the program
    #[arg(long, env = "ALB_ARN_KUBECONFIG_DIR")]
    pub kubeconfig_dir: Option<PathBuf>,
}

impl Config {
    fn shared_dir(&self) -> Result<PathBuf, LookupError> {
        if let Some(dir) = &self.kubeconfig_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe().map_err(LookupError::ProgramLocation)?;
        let exe_dir = exe.parent().ok_or_else(|| {
            LookupError::ProgramLocation(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })?;
        Ok(exe_dir.join(SHARED_KUBECONFIG_DIR))
    }

    pub fn named_path(&self, name: &str) -> Result<PathBuf, LookupError> {
        Ok(self.shared_dir()?.join(format!("kubeconfig_{name}")))
    }
}

/// Path to a kubeconfig file that exists by the time it is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubeconfigHandle(PathBuf);

impl KubeconfigHandle {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for KubeconfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Inline content always replaces whatever is at the inline path. The file is
/// left behind after the process exits.
pub async fn resolve(
    config: &Config,
    source: &KubeconfigSource,
) -> Result<KubeconfigHandle, LookupError> {
    match source {
        KubeconfigSource::Inline(content) => {
            let path = config.inline_kubeconfig_path.clone();
            debug!(path = %path.display(), "writing inline kubeconfig");
            tokio::fs::write(&path, content)
                .await
                .map_err(|source| LookupError::KubeconfigWrite {
                    path: path.clone(),
                    source,
                })?;
            Ok(KubeconfigHandle(path))
        }
        KubeconfigSource::Named(name) => {
            let path = config.named_path(name)?;
            debug!(path = %path.display(), "using named kubeconfig");
            match tokio::fs::try_exists(&path).await {
                Ok(true) => Ok(KubeconfigHandle(path)),
                _ => Err(LookupError::KubeconfigNotFound(path)),
            }
        }
    }
}
