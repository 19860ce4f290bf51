use std::process::ExitCode;

use clap::Parser;
use graphfx::{
    PlotRequest,
    sampler::{DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN, DEFAULT_SAMPLE_COUNT},
};

/// graphfx evaluates a mathematical expression in `x` over a domain and
/// prints the sampled curve.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression in terms of x, e.g. "4x^2 + sin(x)" or "e^(x+1)".
    expression: String,

    /// Lower bound of the domain.
    #[arg(long, default_value_t = DEFAULT_DOMAIN_MIN, allow_negative_numbers = true)]
    min: f64,

    /// Upper bound of the domain.
    #[arg(long, default_value_t = DEFAULT_DOMAIN_MAX, allow_negative_numbers = true)]
    max: f64,

    /// Number of evenly spaced samples, endpoints included.
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Print the curve, or the error report, as JSON.
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let request = PlotRequest::new(args.expression).with_domain(args.min, args.max)
                                                   .with_samples(args.samples);

    match request.run() {
        Ok((_, curve)) => {
            if args.json {
                match serde_json::to_string(&curve) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize the curve: {e}");
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                for point in curve.points() {
                    println!("{}\t{}", point.x, point.y);
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            if args.json {
                match serde_json::to_string(&e.report()) {
                    Ok(json) => println!("{json}"),
                    Err(_) => eprintln!("{e}"),
                }
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        },
    }
}
