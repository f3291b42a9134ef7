//! Print the CIEDE2000 difference between two sRGB colors.

use anyhow::Result;
use chromadelta::{ciede2000_weighted, lab_to_lch, rgb_to_xyz, xyz_to_lab, Lab, Rgb8, Weights};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "deltae")]
#[command(about = "Perceptual (CIEDE2000) difference between two sRGB colors", version)]
struct Cli {
    /// First color as `r,g,b` with channels in [0, 255]
    first: Rgb8,

    /// Second color as `r,g,b` with channels in [0, 255]
    second: Rgb8,

    /// Weighting factors `kl,kc,kh`
    #[arg(long, default_value = "1,1,1")]
    weights: Weights,

    /// Also print XYZ, Lab and LCh of both colors
    #[arg(long)]
    show_lab: bool,

    /// Increase logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "chromadelta=warn",
        1 => "chromadelta=debug",
        _ => "chromadelta=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let first = lab_of(cli.first, cli.show_lab);
    let second = lab_of(cli.second, cli.show_lab);

    let distance = ciede2000_weighted(&first, &second, &cli.weights)?;
    tracing::debug!(first = %cli.first, second = %cli.second, distance, "computed difference");

    println!("{distance}");
    Ok(())
}

fn lab_of(rgb: Rgb8, show: bool) -> Lab {
    let xyz = rgb_to_xyz(rgb);
    let lab = xyz_to_lab(xyz);

    if show {
        println!("{rgb}");
        println!("  {xyz:.6}");
        println!("  {lab:.4}");
        println!("  {}", lab_to_lch(lab));
    }

    lab
}
