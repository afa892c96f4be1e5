//! The conversion orchestrator: detect, decode, re-encode.

use std::path::Path;

use stl_types::StlModel;

use crate::ascii::{decode_ascii, encode_ascii};
use crate::binary::{decode_binary, encode_binary};
use crate::detect::{detect_format, StlFormat};
use crate::error::CodecResult;

/// Decode an STL buffer of either representation into a model.
///
/// Runs format detection first, then the matching decoder. ASCII input
/// is taken as UTF-8 (lossy, matching the header handling of the
/// binary path).
///
/// # Errors
///
/// Propagates [`crate::CodecError::TruncatedInput`] from the binary
/// path and [`crate::CodecError::MalformedInput`] from the ASCII path.
pub fn decode(input: &[u8]) -> CodecResult<StlModel> {
    match detect_format(input) {
        StlFormat::Ascii => decode_ascii(&String::from_utf8_lossy(input)),
        StlFormat::Binary => decode_binary(input),
    }
}

/// Encode a model into the requested representation.
///
/// ASCII output is returned as the UTF-8 bytes of the text form.
///
/// # Errors
///
/// Returns [`crate::CodecError::HeaderTooLong`] if the name does not
/// fit the binary header.
pub fn encode(model: &StlModel, target: StlFormat) -> CodecResult<Vec<u8>> {
    match target {
        StlFormat::Binary => encode_binary(model),
        StlFormat::Ascii => Ok(encode_ascii(model).into_bytes()),
    }
}

/// Convert an STL buffer to the requested representation.
///
/// Detects the input format, decodes, and re-encodes. Converting to the
/// format the input is already in is valid: the result is a
/// deterministic canonical re-serialization (non-canonical header
/// padding or whitespace from the original is not preserved).
///
/// # Errors
///
/// Propagates any decode or encode error; a failed decode produces no
/// output.
///
/// # Example
///
/// ```
/// use stl_codec::{convert, StlFormat};
///
/// let ascii = b"solid empty\nendsolid empty";
/// let binary = convert(ascii, StlFormat::Binary).unwrap();
/// assert_eq!(binary.len(), 84);
/// ```
pub fn convert(input: &[u8], target: StlFormat) -> CodecResult<Vec<u8>> {
    let model = decode(input)?;
    encode(&model, target)
}

/// Convert an STL file on disk, writing the result to `output`.
///
/// Convenience wrapper over [`convert`] for file-based callers.
///
/// # Errors
///
/// Returns [`crate::CodecError::Io`] for read/write failures, plus any
/// conversion error.
pub fn convert_file<P, Q>(input: P, output: Q, target: StlFormat) -> CodecResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let bytes = std::fs::read(input)?;
    let converted = convert(&bytes, target)?;
    std::fs::write(output, converted)?;
    Ok(())
}
