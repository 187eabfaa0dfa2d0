use clap::Parser;
use serialtest::{app, Invocation};
use tracing_subscriber::EnvFilter;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "serialtest",
    version,
    about = "Serial port test writer.",
    long_about = "Lists available serial devices, or opens one at 125000 baud 8E1 and \
                  transmits single bytes typed as hex. Type quit to exit."
)]
struct Args {
    /// List available serial port devices.
    #[arg(short, long)]
    list: bool,

    /// Serial port device.
    #[arg(short, long, value_name = "DEVICE")]
    serial: Option<String>,
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        Invocation {
            list: args.list,
            device: args.serial,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Keep stdout for the product text; diagnostics and log events go to
    // stderr. Silent unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = app::run(&args.into()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
