use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use subsat::errors::check_semi_major_axis;
use subsat::prelude::*;
use subsat::{error, info, warn};

/// Sub-satellite radius, semi-major axis and mean motion calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mean sub-satellite radius in km
    Radius {
        /// Inclination in degrees
        #[arg(long, short)]
        inclination: f64,

        /// Eccentricity
        #[arg(long, short, default_value = "0")]
        eccentricity: f64,

        /// Argument of perigee in degrees
        #[arg(long, short('w'), default_value = "0")]
        arg_perigee: f64,
    },

    /// Semi-major axis in km
    Sma {
        /// Apogee altitude in km
        #[arg(long)]
        apogee: f64,

        /// Eccentricity
        #[arg(long, short)]
        eccentricity: f64,

        /// Mean sub-satellite radius in km
        #[arg(long, short)]
        radius: f64,

        /// Reject eccentricities outside of [0, 1)
        #[arg(long)]
        checked: bool,
    },

    /// Mean motion in rev/day
    MeanMotion {
        /// Semi-major axis in km
        #[arg(short('a'), long)]
        semi_major_axis: f64,

        /// YAML file describing the central body
        #[arg(long)]
        body: Option<PathBuf>,

        /// Reject non-positive semi-major axes
        #[arg(long)]
        checked: bool,
    },

    /// Radius, semi-major axis and mean motion from the apogee altitude
    Elements {
        /// Inclination in degrees
        #[arg(long, short)]
        inclination: f64,

        /// Eccentricity
        #[arg(long, short)]
        eccentricity: f64,

        /// Argument of perigee in degrees
        #[arg(long, short('w'), default_value = "0")]
        arg_perigee: f64,

        /// Apogee altitude in km
        #[arg(long)]
        apogee: f64,

        /// YAML file describing the central body
        #[arg(long)]
        body: Option<PathBuf>,

        /// Validate inputs and outputs
        #[arg(long)]
        checked: bool,

        /// Print as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a parameter sweep to CSV
    Sweep {
        #[arg(value_enum)]
        kind: SweepKind,

        #[arg(long)]
        from: f64,

        #[arg(long)]
        to: f64,

        #[arg(long, default_value = "100", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        count: usize,

        /// Eccentricity, radius sweeps only
        #[arg(long, short, default_value = "0")]
        eccentricity: f64,

        /// Argument of perigee in degrees, radius sweeps only
        #[arg(long, short('w'), default_value = "0")]
        arg_perigee: f64,

        /// YAML file describing the central body, mean motion sweeps only
        #[arg(long)]
        body: Option<PathBuf>,

        #[arg(long, short)]
        out: PathBuf,
    },

    /// Write the default Earth body file
    Body {
        #[arg(long, short)]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum SweepKind {
    RadiusVsInclination,
    MeanMotionVsSma,
}

fn body_or_earth(path: &Option<PathBuf>) -> Result<Body, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let body = load_body_from_file(p)?;
            info!("Loaded body {} from {}", body.name, p.display());
            Ok(body)
        }
        None => Ok(Body::earth()),
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Radius {
            inclination,
            eccentricity,
            arg_perigee,
        } => {
            println!(
                "{}",
                mean_subsatellite_radius(inclination, eccentricity, arg_perigee)
            );
        }
        Command::Sma {
            apogee,
            eccentricity,
            radius,
            checked,
        } => {
            let a = if checked {
                checked_semi_major_axis(apogee, eccentricity, radius)?
            } else {
                semi_major_axis(apogee, eccentricity, radius)
            };
            if !a.is_finite() || a <= 0.0 {
                warn!("Semi-major axis {} is not a closed orbit", a);
            }
            println!("{}", a);
        }
        Command::MeanMotion {
            semi_major_axis,
            body,
            checked,
        } => {
            let body = body_or_earth(&body)?;
            let a = if checked {
                check_semi_major_axis(semi_major_axis)?
            } else {
                semi_major_axis
            };
            let mm = body.mean_motion(a);
            if !mm.is_finite() {
                warn!("Mean motion is not finite for a = {} km", a);
            }
            println!("{}", mm);
        }
        Command::Elements {
            inclination,
            eccentricity,
            arg_perigee,
            apogee,
            body,
            checked,
            yaml,
        } => {
            let body = body_or_earth(&body)?;
            let el = if checked {
                MeanElements::checked_from_apogee(
                    &body,
                    inclination,
                    eccentricity,
                    arg_perigee,
                    apogee,
                )?
            } else {
                MeanElements::from_apogee_about(
                    &body,
                    inclination,
                    eccentricity,
                    arg_perigee,
                    apogee,
                )
            };
            if yaml {
                print!("{}", serde_yaml::to_string(&el)?);
            } else {
                println!("{}", el);
            }
        }
        Command::Sweep {
            kind,
            from,
            to,
            count,
            eccentricity,
            arg_perigee,
            body,
            out,
        } => match kind {
            SweepKind::RadiusVsInclination => {
                export_radius_vs_inclination(&out, from, to, count, eccentricity, arg_perigee)?
            }
            SweepKind::MeanMotionVsSma => {
                let body = body_or_earth(&body)?;
                export_mean_motion_vs_sma(&out, from, to, count, &body)?
            }
        },
        Command::Body { out } => {
            write_body_to_file(&out, &Body::earth())?;
            info!("Wrote {}", out.display());
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
