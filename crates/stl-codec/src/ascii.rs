//! ASCII STL encoding and decoding.
//!
//! Grammar (line-oriented, keyword-prefixed):
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Numbers are parsed and formatted as `f32`, not `f64`. That is a
//! deliberate fidelity cap: binary STL stores 32-bit floats, so staying
//! at `f32` keeps ASCII/binary round-trips numerically lossless and the
//! text output short.

use stl_types::{StlModel, Triangle};

use crate::error::{CodecError, CodecResult};

/// Lines one facet occupies: `facet normal`, `outer loop`, 3 vertices,
/// `endloop`, `endfacet`.
const LINES_PER_FACET: usize = 7;

/// Decode ASCII STL text into a model.
///
/// Lines are split on line feed, trimmed, and blank lines dropped. The
/// facet count is derived by counting lines whose first token is
/// `facet`; each facet is then read at a fixed 7-line stride after the
/// `solid` line. Intervening keyword lines (`outer loop`, `endloop`,
/// `endfacet`) are not re-validated: only the line positions that carry
/// numbers matter. The attribute word is always 0 for ASCII input.
///
/// # Errors
///
/// Returns [`CodecError::MalformedInput`] if fewer lines exist than the
/// derived facet count requires, or if a numeric token fails to parse.
pub fn decode_ascii(text: &str) -> CodecResult<StlModel> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let name = lines.first().map_or_else(String::new, |line| solid_name(line));

    let facet_count = lines
        .iter()
        .filter(|line| line.split_whitespace().next() == Some("facet"))
        .count();

    let required = 1 + facet_count * LINES_PER_FACET;
    if lines.len() < required {
        return Err(CodecError::malformed(format!(
            "need {required} lines for {facet_count} facets, found {}",
            lines.len()
        )));
    }

    let mut triangles = Vec::with_capacity(facet_count);
    for i in 0..facet_count {
        let base = 1 + i * LINES_PER_FACET;
        let normal = parse_triple(lines[base], 2)?;
        let vertices = [
            parse_triple(lines[base + 2], 1)?,
            parse_triple(lines[base + 3], 1)?,
            parse_triple(lines[base + 4], 1)?,
        ];
        triangles.push(Triangle::from_arrays(normal, vertices, 0));
    }

    Ok(StlModel::new(name, triangles))
}

/// Extract the name from a `solid <name>` / `endsolid <name>` line.
///
/// The name is everything after the keyword and one separating space;
/// it may be empty or contain spaces.
fn solid_name(line: &str) -> String {
    line.strip_prefix("solid")
        .map_or("", |rest| rest.strip_prefix(' ').unwrap_or(rest))
        .to_string()
}

/// Parse three f32 tokens from a line, skipping `skip` leading keyword
/// tokens.
fn parse_triple(line: &str, skip: usize) -> CodecResult<[f32; 3]> {
    let mut tokens = line.split_whitespace().skip(skip);
    let mut values = [0.0f32; 3];
    for value in &mut values {
        let token = tokens
            .next()
            .ok_or_else(|| CodecError::malformed(format!("expected three values in {line:?}")))?;
        *value = token
            .parse()
            .map_err(|_| CodecError::malformed(format!("bad numeric token {token:?} in {line:?}")))?;
    }
    Ok(values)
}

/// Encode a model as ASCII STL text.
///
/// Indentation is two spaces per level: facet lines at one level, loop
/// markers at two, vertices at three. Numbers are emitted in the `f32`
/// shortest round-trip decimal form, space-separated. The attribute
/// word has no ASCII slot and is silently dropped. No trailing newline
/// after the `endsolid` line.
#[must_use]
pub fn encode_ascii(model: &StlModel) -> String {
    let mut out = String::with_capacity(32 + model.triangles.len() * 160);

    out.push_str("solid ");
    out.push_str(&model.name);
    out.push('\n');

    for triangle in &model.triangles {
        let n = &triangle.normal;
        out.push_str(&format!("  facet normal {} {} {}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &triangle.vertices {
            out.push_str(&format!("      vertex {} {} {}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str("endsolid ");
    out.push_str(&model.name);
    out
}
