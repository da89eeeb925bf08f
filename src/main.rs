use anyhow::Context;
use clap::Parser;

use filterlink::config::DeviceConfig;
use filterlink::constants::DEFAULT_BAUD_RATE;
use filterlink::protocol::Session;
use filterlink::transport::SerialLink;

#[derive(Parser, Debug)]
#[command(name = "filterlink")]
#[command(about = "Streaming digital filter served over a serial link", long_about = None)]
struct Args {
    /// Serial port the host connects through (e.g. /dev/ttyUSB0)
    #[arg(short, long)]
    port: Option<String>,

    /// Serial baud rate
    #[arg(short, long, default_value_t = DEFAULT_BAUD_RATE)]
    baud: u32,

    /// List available serial ports and exit
    #[arg(short, long)]
    list_ports: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if args.list_ports {
        for port in serialport::available_ports()? {
            println!("{}", port.port_name);
        }
        return Ok(());
    }

    let port = args
        .port
        .context("a serial port is required (use --list-ports to discover one)")?;

    let mut config = DeviceConfig::default();
    config.serial.baud_rate = args.baud;

    println!("=== filterlink - streaming digital filter ===");
    println!("Port: {} @ {} baud", port, config.serial.baud_rate);
    println!("Sample rate: {} Hz", config.session.sampling_frequency_hz);
    println!(
        "Coefficients: B={:?} A={:?}",
        config.filter.numerator, config.filter.denominator
    );
    println!();

    let filter = config.filter.build()?;
    println!(
        "Filter: {} (state length {})",
        if filter.is_iir() { "IIR" } else { "FIR" },
        filter.state_len()
    );

    let mut session = Session::new(filter, config.session.clone());

    // One port open per session, mirroring the firmware's begin/end cycle.
    // The link closes when it drops; the next SYNC starts a fresh session.
    loop {
        let mut link = SerialLink::open(&port, config.serial.baud_rate)?;
        session.run(&mut link)?;
    }
}
