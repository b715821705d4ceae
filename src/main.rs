use std::sync::Arc;

use clap::{Parser, Subcommand};
use data_analyst::analyst::{Analyst, GeminiClient};
use data_analyst::{config, gateway, secrets};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "data-analyst")]
#[command(about = "Ask a Gemini-backed data analyst and render its markdown answer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (API + UI)
    Serve {
        /// Port to bind to
        #[arg(short, long, env = "DATA_ANALYST_PORT")]
        port: Option<u16>,

        /// Bind address
        #[arg(short, long)]
        bind: Option<String>,

        /// Directory with the built UI bundle
        #[arg(long)]
        ui_dir: Option<String>,
    },

    /// Store the Gemini API key and write a default config if none exists
    Configure,

    /// Send a single prompt and print the answer
    Ask {
        /// Prompt text
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind, ui_dir } => {
            let mut config = config::load()?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(ui_dir) = ui_dir {
                config.server.ui_dir = ui_dir;
            }
            gateway::run(config).await
        }
        Commands::Configure => {
            let key = rpassword::prompt_password("Gemini API key: ")?;
            let key_path = secrets::store_api_key(&key)?;
            println!("stored Gemini API key at {}", key_path.display());

            let config_path = config::config_path();
            if !config_path.exists() {
                config::save_to_path(&config::AnalystConfig::default(), &config_path)?;
                println!("wrote default config to {}", config_path.display());
            }
            Ok(())
        }
        Commands::Ask { prompt } => {
            let config = config::load()?;
            let client = GeminiClient::from_config(&config.gemini)?;
            let analyst = Analyst::new(Arc::new(client));
            println!("{}", analyst.generate_content(&prompt).await);
            Ok(())
        }
    }
}
