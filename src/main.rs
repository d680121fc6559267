//! # Voxel Terrain Entry Point
//!
//! Headless driver: builds a chunk from a config file, runs a number of
//! generation passes and logs a summary of each.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- --seed 42 --regenerations 3 --probe=-26,2,-24
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use voxel_terrain::RunOptions;

#[derive(Parser, Debug)]
#[command(version, about = "Generate voxel terrain chunks headlessly")]
struct Args {
    /// JSON chunk config; every field is optional
    #[arg(long)]
    config: Option<PathBuf>,

    /// Master seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Number of regeneration passes
    #[arg(long, default_value_t = 1)]
    regenerations: usize,

    /// Collision query point as x,y,z; may be repeated
    #[arg(long = "probe", value_parser = parse_point, allow_hyphen_values = true)]
    probes: Vec<[f32; 3]>,
}

fn parse_point(text: &str) -> Result<[f32; 3], String> {
    let parts = text
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    <[f32; 3]>::try_from(parts)
        .map_err(|parts| format!("expected x,y,z, got {} values", parts.len()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = RunOptions {
        config_path: args.config,
        seed: args.seed,
        regenerations: args.regenerations,
        probes: args.probes,
    };
    match voxel_terrain::run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("voxel-terrain: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parse() {
        assert_eq!(parse_point("-26, 2,-24.5"), Ok([-26.0, 2.0, -24.5]));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,a,3").is_err());
    }

    #[test]
    fn args_parse() {
        let args = Args::parse_from([
            "voxel-terrain",
            "--seed",
            "9",
            "--probe",
            "1,2,3",
            "--probe",
            "-4,5,6",
        ]);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.regenerations, 1);
        assert_eq!(args.probes, vec![[1.0, 2.0, 3.0], [-4.0, 5.0, 6.0]]);
    }
}
