use control_plot::plot::parse_cli;
use control_plot::{run, FilePresenter};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match parse_cli() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("invalid arguments: {}", e);
            std::process::exit(2);
        }
    };

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    info!(
        "read data from {} and plot to {}",
        args.csvin.display(),
        args.fout.display()
    );
    let mut presenter = FilePresenter::new(args.fout);
    if let Err(e) = run(&args.csvin, args.delimiter, &args.config, &mut presenter) {
        error!("{}", e);
        std::process::exit(1);
    }
}
