use clap::Parser;
use roaster::core::config::{self, CliOverrides};
use roaster::core::mode::RoastMode;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roaster", about = "Tell it about yourself, get roasted")]
struct Args {
    /// Roast backend base URL (the client posts to <base-url>/api/roast)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Roast mode to start with
    #[arg(short, long, value_enum)]
    mode: Option<RoastMode>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        base_url: args.base_url,
        mode: args.mode,
        log_file: args.log_file,
    };

    // Config is read before the logger exists; a parse error is reported once it does
    let file_config = config::load_config();
    let resolved = config::resolve(file_config.as_ref().unwrap_or(&Default::default()), &cli);

    // File logger: stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Roaster starting up: base_url={}, mode={}",
        resolved.base_url,
        resolved.mode.id()
    );

    roaster::tui::run(resolved)
}
