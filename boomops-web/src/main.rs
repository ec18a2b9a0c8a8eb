//! Boom Ops Portal
//!
//! Session-authenticated CRUD portal over the client collection.

use clap::Parser;
use boomops_web::server::PortalServerBuilder;
use boomops_web::{init_logging, WebConfig};

/// Boom Ops client portal web server
#[derive(Parser)]
#[command(name = "boomops-web")]
#[command(about = "The Boom Ops client portal")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the persisted client document
    #[arg(long)]
    data_file: Option<String>,

    /// Static files directory
    #[arg(long)]
    static_dir: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    std::env::set_var(
        "RUST_LOG",
        format!(
            "boomops_web={},boomops_core={},tower_http=debug",
            args.log_level, args.log_level
        ),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = WebConfig::from_env();

    // Override with command line arguments
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    let server = match PortalServerBuilder::with_config(config).build() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        // Test default values
        let args = Args::parse_from(["boomops-web"]);
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert_eq!(args.log_level, "info");

        // Test custom values
        let args = Args::parse_from([
            "boomops-web",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--data-file",
            "/tmp/clients.json",
        ]);
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(3000));
        assert_eq!(args.data_file.as_deref(), Some("/tmp/clients.json"));
    }
}
