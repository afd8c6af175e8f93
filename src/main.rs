use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatcompare::{Commands, Container, ContainerConfig, Router, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "chatcompare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.chatcompare")]
    data_dir: String,

    /// OpenAI-compatible API base URL [env: CHATCOMPARE_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Model id [env: CHATCOMPARE_MODEL]
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Answer locally without calling the API
    #[arg(long, global = true)]
    mock_client: bool,

    /// Keep the API key and settings in memory for this run only
    #[arg(long, global = true)]
    memory_storage: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = expand_tilde(&cli.data_dir);
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("CHATCOMPARE_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let model = cli
        .model
        .or_else(|| std::env::var("CHATCOMPARE_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    debug!("data_dir={} base_url={} model={}", data_dir, base_url, model);

    let container = Container::new(ContainerConfig {
        data_dir,
        base_url,
        model,
        mock_client: cli.mock_client,
        memory_storage: cli.memory_storage,
    })?;
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn chat_accepts_generation_flags() {
        let cli = Cli::try_parse_from([
            "chatcompare",
            "chat",
            "hello",
            "--max-tokens",
            "50",
            "--stop",
            "[END]",
            "--stop",
            "###",
            "--presence-penalty",
            "-0.5",
        ])
        .expect("valid command line");

        match cli.command {
            Commands::Chat { prompt, params } => {
                assert_eq!(prompt, "hello");
                let params = params.to_params();
                assert_eq!(params.max_tokens(), Some(50));
                assert_eq!(params.stop().map(|s| s.len()), Some(2));
                assert_eq!(params.presence_penalty(), Some(-0.5));
                assert_eq!(params.temperature(), None);
            }
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn settings_mode_rejects_unknown_value() {
        let res = Cli::try_parse_from(["chatcompare", "settings", "--mode", "both"]);
        assert!(res.is_err());
    }

    #[test]
    fn reset_conflicts_with_unset() {
        let res = Cli::try_parse_from(["chatcompare", "settings", "--reset", "--unset", "stop"]);
        assert!(res.is_err());
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/data"), "/tmp/data");
    }
}
