use aiplat_core::GatewayConfig;
use aiplat_policy::GuardrailEvaluator;
use aiplat_server::GatewayServer;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aiplat", version, about = "AI Platform guardrail gateway")]
struct Cli {
    /// Log level for the gateway (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP gateway.
    Serve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Override the bind address, e.g. 127.0.0.1:8000
        #[arg(long, env = "AIPLAT_BIND")]
        bind: Option<String>,
    },

    /// Validate the configuration and print the effective settings.
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Evaluate a prompt against the guardrails without starting the server.
    Evaluate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Prompt text to evaluate
        prompt: String,
    },
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Path to the YAML configuration file (defaults are used when omitted)
    #[arg(long, env = "AIPLAT_CONFIG")]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<GatewayConfig> {
        match &self.config {
            Some(path) => GatewayConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Ok(GatewayConfig::default()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.cmd {
        Command::Serve { config, bind } => run_serve(&config, bind).await?,
        Command::Check { config } => run_check(&config)?,
        Command::Evaluate { config, prompt } => run_evaluate(&config, &prompt)?,
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "aiplat={level},aiplat_server={level},aiplat_policy={level},aiplat_audit={level},tower_http={level},warn"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run_serve(args: &ConfigArgs, bind: Option<String>) -> anyhow::Result<()> {
    let mut config = args.load()?;
    if let Some(bind) = bind {
        config.server.bind = bind;
        config.validate()?;
    }

    GatewayServer::new(config).run().await?;
    Ok(())
}

fn run_check(args: &ConfigArgs) -> anyhow::Result<()> {
    let config = args.load()?;
    let rendered = serde_yaml::to_string(&config).context("rendering effective config")?;

    println!("Configuration OK\n");
    print!("{}", rendered);
    Ok(())
}

fn run_evaluate(args: &ConfigArgs, prompt: &str) -> anyhow::Result<()> {
    let config = args.load()?;
    let evaluator = GuardrailEvaluator::new(config.guardrails, config.pricing);
    let evaluation = evaluator.evaluate(prompt);

    let output = json!({
        "allowed": evaluation.allowed(),
        "verdict": evaluation.verdict.kind(),
        "reason": evaluation.reason(),
        "tokens": evaluation.cost.tokens,
        "estimated_cost_usd": evaluation.cost.usd,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
