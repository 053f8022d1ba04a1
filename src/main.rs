//! BPSK-over-AWGN BER sweep binary
//!
//! Runs the Monte-Carlo estimator over a range of SNR values, prints one
//! report line per point, and renders the simulated vs. theoretical curve to
//! a PNG. Run `ber_sim -h` for the command-line interface.

use std::time::Instant;

use anyhow::Result;
use clap::{crate_name, crate_version, value_parser, Arg, ArgMatches, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ber_sim::{estimator, plot, SimConfig};

fn main() -> Result<()> {
    let timer = Instant::now();
    init_tracing();

    let matches = command_line_parser().get_matches();
    let config = sim_config_from_matches(&matches);
    let mut rng = rng_from_matches(&matches);

    let points = estimator::run(&config, &mut rng)?;
    for point in &points {
        println!(
            "SNR = {} dB, Simulated BER = {:.2e}, Theoretical BER = {:.2e}",
            point.snr_db, point.simulated_ber, point.theoretical_ber
        );
    }

    plot::render_ber_curve(&points, plot_filename_from_matches(&matches))?;

    eprintln!("Elapsed time: {:.3?}", timer.elapsed());
    Ok(())
}

/// Log to stderr so stdout carries only the per-point report lines
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ber_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Returns command line parser.
fn command_line_parser() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about("Estimates BPSK bit error rate over an AWGN channel by Monte-Carlo simulation")
        .arg(num_bits_per_snr())
        .arg(first_snr_db())
        .arg(snr_step_db())
        .arg(num_snr())
        .arg(seed())
        .arg(plot_filename())
}

/// Returns argument for number of bits per SNR point.
fn num_bits_per_snr() -> Arg {
    Arg::new("num_bits_per_snr")
        .short('b')
        .value_parser(value_parser!(u64))
        .default_value("100000")
        .help("Number of bits simulated per SNR point")
}

/// Returns argument for first Eb/No (dB).
fn first_snr_db() -> Arg {
    Arg::new("first_snr_db")
        .short('r')
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value("0.0")
        .help("First Eb/No (dB)")
}

/// Returns argument for Eb/No step (dB).
fn snr_step_db() -> Arg {
    Arg::new("snr_step_db")
        .short('p')
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value("2.0")
        .help("Eb/No step (dB)")
}

/// Returns argument for number of Eb/No values.
fn num_snr() -> Arg {
    Arg::new("num_snr")
        .short('s')
        .value_parser(value_parser!(u32))
        .default_value("7")
        .help("Number of Eb/No values")
}

/// Returns argument for the RNG seed.
fn seed() -> Arg {
    Arg::new("seed")
        .short('d')
        .value_parser(value_parser!(u64))
        .help("RNG seed for a reproducible run (default: from entropy)")
}

/// Returns argument for name of the PNG file for the BER curve.
fn plot_filename() -> Arg {
    Arg::new("plot_filename")
        .short('o')
        .default_value("ber_curve.png")
        .help("Name of PNG file for the BER curve")
}

/// Returns simulation configuration based on command-line arguments.
fn sim_config_from_matches(matches: &ArgMatches) -> SimConfig {
    // OK to unwrap: all of these arguments carry default values.
    let bits_per_point = *matches.get_one("num_bits_per_snr").unwrap();
    let first_snr_db: f64 = *matches.get_one("first_snr_db").unwrap();
    let snr_step_db: f64 = *matches.get_one("snr_step_db").unwrap();
    let num_snr: u32 = *matches.get_one("num_snr").unwrap();
    SimConfig::sweep(bits_per_point, first_snr_db, snr_step_db, num_snr)
}

/// Returns the sweep RNG, seeded from the command line when requested.
fn rng_from_matches(matches: &ArgMatches) -> ChaCha8Rng {
    match matches.get_one::<u64>("seed") {
        Some(&seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Returns name of the PNG file to which the BER curve must be drawn.
fn plot_filename_from_matches(matches: &ArgMatches) -> String {
    // OK to unwrap: the argument has a default value.
    matches
        .get_one::<String>("plot_filename")
        .unwrap()
        .to_string()
}
