use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionOutput {
    #[serde(rename = "LoadBalancerArn")]
    pub load_balancer_arn: String,
}

impl ResolutionOutput {
    /// Writes the whole object in one go, nothing is written on failure.
    pub fn write_to<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        let json = serde_json::to_vec(self)?;
        writer.write_all(&json)?;
        writer.flush()?;
        Ok(())
    }
}
