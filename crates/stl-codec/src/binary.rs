//! Binary STL encoding and decoding.
//!
//! Layout (all values little-endian):
//!
//! ```text
//! UINT8[80]    - Header: name bytes, NUL-terminated or full 80
//! UINT32       - Number of triangles
//! foreach triangle (50 bytes)
//!     REAL32[3] - Normal vector
//!     REAL32[3] - Vertex 1
//!     REAL32[3] - Vertex 2
//!     REAL32[3] - Vertex 3
//!     UINT16    - Attribute byte count
//! end
//! ```

use stl_types::{Point3, StlModel, Triangle, Vector3};

use crate::cursor::{ByteCursor, ByteWriter};
use crate::error::{CodecError, CodecResult};

/// Binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one facet record in bytes (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Decode a binary STL buffer into a model.
///
/// The name is the run of header bytes before the first NUL, or all 80
/// bytes when no NUL is present. Header bytes are taken as-is (lossy
/// UTF-8, no validation); garbage trailing bytes are accepted.
///
/// # Errors
///
/// Returns [`CodecError::TruncatedInput`] if the buffer is shorter than
/// `84 + triangle_count * 50` bytes.
pub fn decode_binary(input: &[u8]) -> CodecResult<StlModel> {
    let mut cursor = ByteCursor::new(input);

    let header = cursor.read_bytes(HEADER_SIZE)?;
    let name_end = header.iter().position(|&b| b == 0).unwrap_or(HEADER_SIZE);
    let name = String::from_utf8_lossy(&header[..name_end]).into_owned();

    let count = cursor.read_u32_le()?;

    // Check the full structural length up front so a bogus count fails
    // before any facet allocation.
    let needed = HEADER_SIZE + 4 + count as usize * TRIANGLE_SIZE;
    if input.len() < needed {
        return Err(CodecError::TruncatedInput {
            needed,
            available: input.len(),
        });
    }

    let mut triangles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        triangles.push(read_triangle(&mut cursor)?);
    }

    Ok(StlModel::new(name, triangles))
}

/// Decode one 50-byte facet record at the cursor.
fn read_triangle(cursor: &mut ByteCursor<'_>) -> CodecResult<Triangle> {
    let normal = read_vector(cursor)?;
    let vertices = [
        read_point(cursor)?,
        read_point(cursor)?,
        read_point(cursor)?,
    ];
    let attribute = cursor.read_u16_le()?;
    Ok(Triangle::new(normal, vertices, attribute))
}

fn read_vector(cursor: &mut ByteCursor<'_>) -> CodecResult<Vector3<f32>> {
    Ok(Vector3::new(
        cursor.read_f32_le()?,
        cursor.read_f32_le()?,
        cursor.read_f32_le()?,
    ))
}

fn read_point(cursor: &mut ByteCursor<'_>) -> CodecResult<Point3<f32>> {
    Ok(Point3::new(
        cursor.read_f32_le()?,
        cursor.read_f32_le()?,
        cursor.read_f32_le()?,
    ))
}

/// Encode a model as binary STL.
///
/// The name's UTF-8 bytes are emitted byte-for-byte into the header
/// (multi-byte sequences are not re-encoded or rejected), zero-padded
/// to 80 bytes. Output length is always exactly
/// `84 + triangle_count * 50`.
///
/// # Errors
///
/// Returns [`CodecError::HeaderTooLong`] if the name's byte length
/// exceeds 80.
pub fn encode_binary(model: &StlModel) -> CodecResult<Vec<u8>> {
    let name = model.name.as_bytes();
    if name.len() > HEADER_SIZE {
        return Err(CodecError::HeaderTooLong { len: name.len() });
    }

    let mut writer =
        ByteWriter::with_capacity(HEADER_SIZE + 4 + model.triangles.len() * TRIANGLE_SIZE);

    writer.write_bytes(name);
    writer.pad_to(HEADER_SIZE);
    writer.write_u32_le(model.triangle_count());

    for triangle in &model.triangles {
        write_triangle(&mut writer, triangle);
    }

    Ok(writer.into_bytes())
}

/// Emit one 50-byte facet record.
fn write_triangle(writer: &mut ByteWriter, triangle: &Triangle) {
    writer.write_f32_le(triangle.normal.x);
    writer.write_f32_le(triangle.normal.y);
    writer.write_f32_le(triangle.normal.z);
    for vertex in &triangle.vertices {
        writer.write_f32_le(vertex.x);
        writer.write_f32_le(vertex.y);
        writer.write_f32_le(vertex.z);
    }
    writer.write_u16_le(triangle.attribute);
}
