use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lego-server",
    about = "Simulated news-action data API for the lego dashboard",
    version
)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "LEGO_HOST")]
    host: String,

    /// Port to listen on (0 = OS-assigned)
    #[arg(long, default_value = "8080", env = "LEGO_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(&cli).await {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    lego_server::serve(listener).await
}
