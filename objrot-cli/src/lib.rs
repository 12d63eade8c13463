/// Command-line front end: rotate an OBJ file and write the result beside it
use anyhow::Context;
use nalgebra::Vector3;
use objrot_core::{read_obj_file, write_obj_file, Transform};
use std::f64::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

pub mod cli;

pub use cli::Cli;

/// Input file used when none is given on the command line
pub const DEFAULT_INPUT: &str = "teapot.obj";

/// Prefix added to the input file name to form the output file name
pub const OUTPUT_PREFIX: &str = "rotated_";

/// Rotation applied by [`run`]: a quarter turn about +Z
pub const ROTATION_AXIS: [f64; 3] = [0.0, 0.0, 1.0];
pub const ROTATION_ANGLE: f64 = FRAC_PI_2;

/// Output path for `input`: same directory, file name prefixed with [`OUTPUT_PREFIX`]
///
/// Fails for paths without a file name, such as `..` or `/`.
pub fn rotated_path(input: &Path) -> anyhow::Result<PathBuf> {
    let name = input
        .file_name()
        .with_context(|| format!("Input path has no file name: {}", input.display()))?;
    let mut prefixed = std::ffi::OsString::from(OUTPUT_PREFIX);
    prefixed.push(name);
    Ok(input.with_file_name(prefixed))
}

/// Read `input`, rotate it by the fixed axis and angle, and write it to `output`
pub fn rotate_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut mesh = read_obj_file(input)
        .with_context(|| format!("Failed to load OBJ file: {}", input.display()))?;

    let [x, y, z] = ROTATION_AXIS;
    let rotation = Transform::axis_angle(&Vector3::new(x, y, z), ROTATION_ANGLE);
    mesh.rotate(&rotation);

    write_obj_file(output, &mesh)
        .with_context(|| format!("Failed to write OBJ file: {}", output.display()))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        vertices = mesh.vertex_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        "rotated mesh written"
    );
    Ok(())
}

/// Run the pipeline for parsed arguments
pub fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let output = match &cli.output {
        Some(output) => output.clone(),
        None => rotated_path(&cli.input)?,
    };
    rotate_file(&cli.input, &output)?;
    Ok(output)
}
