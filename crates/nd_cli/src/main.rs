use clap::Parser;
use nd_agents::DigestPipeline;
use nd_core::{Error, Result};
use nd_inference::{create_model, Config};
use nd_search::{HttpFetcher, Retriever, SerperClient};
use nd_web::{create_app, AppState};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "groq", help = "Model to use for inference. Available models: groq (default), dummy")]
    model: String,
    #[arg(long, help = "Override the chat endpoint base URL")]
    model_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print a digest for a single question
    Ask {
        question: String,
    },
    /// Serve the single-input web form
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config {
        api_key: std::env::var("GROQ_API_KEY").ok(),
        model_name: None,
        base_url: cli.model_url.clone(),
    };
    let model = create_model(&cli.model, config)?;
    info!("🧠 Inference model initialized successfully (using {})", model.name());

    let serper_key = std::env::var("SERPER_API_KEY")
        .map_err(|_| Error::Config("SERPER_API_KEY is not set".to_string()))?;
    let retriever = Retriever::new(
        Arc::new(SerperClient::new(serper_key)),
        Arc::new(HttpFetcher::new()),
    );
    info!("🔍 Search provider initialized successfully");

    let pipeline = DigestPipeline::new(model, retriever);

    match cli.command {
        Commands::Ask { question } => {
            let digest = pipeline.run(&question).await?;
            println!("{}", digest.text);
        }
        Commands::Serve { host, port } => {
            let app = create_app(AppState { pipeline }).await;
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🌐 Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
