use crate::error::LookupError;
use serde::Deserialize;
use tokio::io::{AsyncRead, AsyncReadExt};

/// The request exactly as it arrives on stdin. Infrastructure tooling passes
/// every value as a string and may add keys we don't care about.
#[derive(Debug, Default, Deserialize)]
struct RawRequest {
    aws_profile: Option<String>,
    kubeconfig: Option<String>,
    config_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KubeconfigSource {
    /// Full kubeconfig document text
    Inline(String),
    /// Logical name of a kubeconfig kept next to the program
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub credentials_profile: String,
    pub kubeconfig: KubeconfigSource,
}

impl RequestConfig {
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        // a derived struct also accepts a positional array, so insist on an object first
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(input)?;
        let raw: RawRequest = serde_json::from_value(object.into())?;

        let credentials_profile =
            non_empty(raw.aws_profile).ok_or(LookupError::MissingField("aws_profile"))?;

        let kubeconfig = match (non_empty(raw.kubeconfig), non_empty(raw.config_name)) {
            (Some(content), None) => KubeconfigSource::Inline(content),
            (None, Some(name)) => KubeconfigSource::Named(name),
            (Some(_), Some(_)) => return Err(LookupError::ConflictingKubeconfigSources),
            (None, None) => return Err(LookupError::MissingField("kubeconfig or config_name")),
        };

        Ok(Self {
            credentials_profile,
            kubeconfig,
        })
    }

    pub async fn read_from<R>(mut reader: R) -> Result<Self, LookupError>
    where
        R: AsyncRead + Unpin,
    {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .await
            .map_err(LookupError::ReadInput)?;
        Self::parse(&input)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_request() {
        let request =
            RequestConfig::parse(r#"{"aws_profile": "prod", "kubeconfig": "apiVersion: v1"}"#)
                .unwrap();
        assert_eq!(request.credentials_profile, "prod");
        assert_eq!(
            request.kubeconfig,
            KubeconfigSource::Inline("apiVersion: v1".to_owned())
        );
    }

    #[test]
    fn named_request_ignores_extra_keys() {
        let request = RequestConfig::parse(
            r#"{"aws_profile": "prod", "config_name": "eks-a", "region": "us-east-1"}"#,
        )
        .unwrap();
        assert_eq!(request.kubeconfig, KubeconfigSource::Named("eks-a".to_owned()));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            RequestConfig::parse("{\"aws_profile\": "),
            Err(LookupError::MalformedInput(_))
        ));
        assert!(matches!(
            RequestConfig::parse("[\"aws_profile\"]"),
            Err(LookupError::MalformedInput(_))
        ));
        assert!(matches!(
            RequestConfig::parse(r#"["prod", "apiVersion: v1", null]"#),
            Err(LookupError::MalformedInput(_))
        ));
    }

    #[test]
    fn missing_profile() {
        assert!(matches!(
            RequestConfig::parse(r#"{"kubeconfig": "apiVersion: v1"}"#),
            Err(LookupError::MissingField("aws_profile"))
        ));
        assert!(matches!(
            RequestConfig::parse(r#"{"aws_profile": "", "kubeconfig": "apiVersion: v1"}"#),
            Err(LookupError::MissingField("aws_profile"))
        ));
    }

    #[test]
    fn missing_kubeconfig_source() {
        assert!(matches!(
            RequestConfig::parse(r#"{"aws_profile": "prod", "kubeconfig": ""}"#),
            Err(LookupError::MissingField(_))
        ));
    }

    #[test]
    fn both_kubeconfig_sources() {
        assert!(matches!(
            RequestConfig::parse(
                r#"{"aws_profile": "prod", "kubeconfig": "apiVersion: v1", "config_name": "eks-a"}"#
            ),
            Err(LookupError::ConflictingKubeconfigSources)
        ));
    }
}
