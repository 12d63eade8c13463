//! Reader and writer for the single-group OBJ subset.
//!
//! ```text
//! g <name>
//!
//! v <x> <y> <z>
//!
//! vn <x> <y> <z>
//!
//! f <a> <b> <c>
//! ```
//!
//! Directives may appear in any order on input. Anything that is not `g`, `v`,
//! `vn` or `f` is skipped. Output is always written in the order shown above.
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{i64 as integer, one_of},
    combinator::{all_consuming, map, opt},
    number::complete::double,
    sequence::pair,
    IResult,
};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ObjError, ObjResult, ParseErrorKind};
use crate::geometry::{Face, Mesh};

/// One recognized line of input
#[derive(Debug, Clone, PartialEq)]
enum Directive<'a> {
    Group(&'a str),
    Vertex([f64; 3]),
    Normal([f64; 3]),
    Face(Face),
}

/// Parse OBJ text into a mesh
pub fn parse_obj(input: &str) -> ObjResult<Mesh> {
    let mut mesh = Mesh::new();
    let mut ignored = 0usize;

    for (index, line) in input.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        let directive = parse_directive(keyword, tokens).map_err(|kind| ObjError::Parse {
            line: index + 1,
            directive: keyword.to_string(),
            kind,
        })?;

        match directive {
            Some(Directive::Group(name)) => mesh.group_name = name.to_string(),
            Some(Directive::Vertex([x, y, z])) => mesh.add_vertex(x, y, z),
            Some(Directive::Normal([x, y, z])) => mesh.add_normal(x, y, z),
            Some(Directive::Face(face)) => mesh.add_face(face),
            None => {
                ignored += 1;
                tracing::trace!(line = index + 1, keyword, "ignoring unsupported directive");
            }
        }
    }

    tracing::debug!(
        group = %mesh.group_name,
        vertices = mesh.vertex_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        ignored,
        "parsed OBJ"
    );

    Ok(mesh)
}

/// Returns `Ok(None)` for keywords this reader does not handle
fn parse_directive<'a>(
    keyword: &str,
    mut args: impl Iterator<Item = &'a str>,
) -> Result<Option<Directive<'a>>, ParseErrorKind> {
    let directive = match keyword {
        // `g` with no name is what an empty group serializes to
        "g" => Directive::Group(args.next().unwrap_or_default()),
        "v" => Directive::Vertex(components(args, parse_float)?),
        "vn" => Directive::Normal(components(args, parse_float)?),
        "f" => Directive::Face(components(args, parse_integer)?),
        _ => return Ok(None),
    };
    Ok(Some(directive))
}

/// Read exactly three components; anything past the third is ignored
fn components<'a, T: Copy + Default>(
    mut args: impl Iterator<Item = &'a str>,
    parse: impl Fn(&str) -> Result<T, ParseErrorKind>,
) -> Result<[T; 3], ParseErrorKind> {
    let mut out = [T::default(); 3];
    for (found, slot) in out.iter_mut().enumerate() {
        let token = args
            .next()
            .ok_or(ParseErrorKind::MissingComponents { expected: 3, found })?;
        *slot = parse(token)?;
    }
    Ok(out)
}

fn whole<'a, O>(token: &'a str, parser: impl FnMut(&'a str) -> IResult<&'a str, O>) -> Option<O> {
    all_consuming(parser)(token).ok().map(|(_, value)| value)
}

/// Signed or unsigned `inf`/`infinity`, which `double` only takes unsigned
fn infinity(input: &str) -> IResult<&str, f64> {
    map(
        pair(
            opt(one_of("+-")),
            alt((tag_no_case("infinity"), tag_no_case("inf"))),
        ),
        |(sign, _)| match sign {
            Some('-') => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        },
    )(input)
}

fn parse_float(token: &str) -> Result<f64, ParseErrorKind> {
    whole(token, alt((infinity, double)))
        .ok_or_else(|| ParseErrorKind::InvalidFloat(token.to_string()))
}

fn parse_integer(token: &str) -> Result<i64, ParseErrorKind> {
    whole(token, integer).ok_or_else(|| ParseErrorKind::InvalidInteger(token.to_string()))
}

/// Display adapter that renders a mesh as OBJ text
struct ObjDisplay<'a>(&'a Mesh);

impl fmt::Display for ObjDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.0;
        writeln!(f, "g {}", mesh.group_name)?;

        // `{:?}` is the shortest text that parses back to the same f64 and
        // always keeps a `.0` or an exponent.
        writeln!(f)?;
        for v in &mesh.vertices {
            writeln!(f, "v {:?} {:?} {:?}", v.x, v.y, v.z)?;
        }

        writeln!(f)?;
        for n in &mesh.normals {
            writeln!(f, "vn {:?} {:?} {:?}", n.x, n.y, n.z)?;
        }

        writeln!(f)?;
        for [a, b, c] in &mesh.faces {
            writeln!(f, "f {} {} {}", a, b, c)?;
        }

        Ok(())
    }
}

/// Serialize a mesh to OBJ text
pub fn write_obj(mesh: &Mesh) -> String {
    ObjDisplay(mesh).to_string()
}

/// Serialize a mesh as OBJ text into `writer`
pub fn write_obj_to<W: Write>(writer: &mut W, mesh: &Mesh) -> std::io::Result<()> {
    write!(writer, "{}", ObjDisplay(mesh))
}

/// Read and parse an OBJ file
pub fn read_obj_file(path: impl AsRef<Path>) -> ObjResult<Mesh> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = text.len(), "read OBJ file");
    parse_obj(&text)
}

/// Write a mesh to an OBJ file, replacing any existing file
pub fn write_obj_file(path: impl AsRef<Path>, mesh: &Mesh) -> ObjResult<()> {
    let path = path.as_ref();
    let io_error = |source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write_obj_to(&mut writer, mesh).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    tracing::info!(path = %path.display(), "wrote OBJ file");
    Ok(())
}
