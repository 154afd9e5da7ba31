use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::api;
use folio::config::SiteConfig;
use folio::contact::{LogMailer, Mailer, ResendMailer};
use folio::content::ContentStore;
use folio::scene::{self, Viewport};
use folio::sitemap;
use folio::theme::Theme;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site with an animated background and contact relay")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the site server
    Serve {
        /// Port for HTTP
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Log contact messages instead of sending them
        #[arg(long)]
        dry_run_mail: bool,
    },
    /// Print the sitemap XML to stdout
    Sitemap,
    /// Print a background snapshot SVG to stdout
    Scene {
        #[arg(long, default_value = "1440")]
        width: f64,

        #[arg(long, default_value = "900")]
        height: f64,

        /// light, dark or contrast
        #[arg(long, default_value = "dark")]
        theme: String,

        #[arg(long, default_value = "1")]
        seed: u64,

        /// Animation ticks before the snapshot (0 = reduced motion)
        #[arg(long, default_value = "0")]
        frames: u32,
    },
}

/// Logs go to stderr so the print commands keep stdout clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: SiteConfig, host: &str, port: u16, dry_run_mail: bool) -> anyhow::Result<()> {
    let mailer: Arc<dyn Mailer> = if dry_run_mail {
        tracing::info!("Contact messages will be logged, not sent");
        Arc::new(LogMailer)
    } else {
        if config.email_api_key.is_none() {
            tracing::warn!("RESEND_API_KEY is not set; contact submissions will fail");
        }
        Arc::new(ResendMailer::new(
            config.email_api_url.clone(),
            config.email_api_key.clone(),
        ))
    };

    let app = api::create_router(api::AppState::from_config(&config, mailer));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Portfolio listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = SiteConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve {
            port,
            host,
            dry_run_mail,
        }) => serve(config, &host, port, dry_run_mail).await?,
        Some(Commands::Sitemap) => {
            let store = ContentStore::portfolio();
            let today = chrono::Utc::now().date_naive();
            print!(
                "{}",
                sitemap::to_xml(&sitemap::entries(&store, &config.site_url, today))
            );
        }
        Some(Commands::Scene {
            width,
            height,
            theme,
            seed,
            frames,
        }) => {
            let theme = Theme::from_str(&theme)
                .ok_or_else(|| anyhow::anyhow!("unknown theme {:?}", theme))?;
            println!(
                "{}",
                scene::snapshot_svg(Viewport::new(width, height), theme, seed, frames)
            );
        }
        None => serve(config, "127.0.0.1", 3000, false).await?,
    }

    Ok(())
}
