/// objrot - Rotate an OBJ mesh
///
/// Reads the given OBJ file (default `teapot.obj`), rotates it 90 degrees
/// about the Z axis, and writes `rotated_<name>` next to it.

use clap::Parser;
use objrot::{cli, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    cli::initialize_tracing(&args.log_filter);

    let output = objrot::run(&args)?;
    println!("Wrote {}", output.display());
    Ok(())
}
