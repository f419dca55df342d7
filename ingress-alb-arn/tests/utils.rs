#![allow(dead_code)]

use clap::Parser;
use ingress_alb_arn::Config;
use serde_json::json;
use std::path::Path;

pub fn test_config(workdir: &Path, extra_args: &[&str]) -> Config {
    let inline_path = workdir.join("kube_config.yaml");
    let kubeconfig_dir = workdir.join("kubeconfigs");
    let mut args = vec![
        "get-alb-arn".to_owned(),
        "--inline-kubeconfig-path".to_owned(),
        inline_path.display().to_string(),
        "--kubeconfig-dir".to_owned(),
        kubeconfig_dir.display().to_string(),
    ];
    args.extend(extra_args.iter().map(|arg| arg.to_string()));
    Config::parse_from(args)
}

pub fn inline_request(profile: &str, kubeconfig: &str) -> String {
    json!({"aws_profile": profile, "kubeconfig": kubeconfig}).to_string()
}

pub fn named_request(profile: &str, config_name: &str) -> String {
    json!({"aws_profile": profile, "config_name": config_name}).to_string()
}
