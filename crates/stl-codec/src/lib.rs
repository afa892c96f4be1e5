//! Bidirectional STL codec: binary and ASCII, either direction.
//!
//! STL ("stereolithography") triangle meshes come in two canonical
//! representations. This crate decodes either one into an in-memory
//! [`StlModel`](stl_types::StlModel) and encodes a model back into
//! either one, with exact byte and text layout contracts.
//!
//! # Format Detection
//!
//! A buffer whose first 5 bytes are exactly `solid` is treated as
//! ASCII; anything else is binary. This is the format's own weak
//! heuristic and it is preserved verbatim, including its known
//! misclassification of binary files whose header starts with `solid`.
//! See [`detect_format`].
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    - Header: name, NUL-terminated or full 80 bytes
//! UINT32       - Number of triangles
//! foreach triangle (50 bytes)
//!     REAL32[3] - Normal vector
//!     REAL32[3] - Vertex 1
//!     REAL32[3] - Vertex 2
//!     REAL32[3] - Vertex 3
//!     UINT16    - Attribute byte count
//! end
//! ```
//!
//! # ASCII Format
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
//! # Example
//!
//! ```
//! use stl_codec::{convert, detect_format, StlFormat};
//!
//! let ascii = b"solid tetra\nendsolid tetra";
//! assert_eq!(detect_format(ascii), StlFormat::Ascii);
//!
//! let binary = convert(ascii, StlFormat::Binary).unwrap();
//! assert_eq!(detect_format(&binary), StlFormat::Binary);
//! ```
//!
//! # Concurrency
//!
//! Every entry point is a pure synchronous function over caller-owned
//! buffers. There is no shared or global state, so independent
//! conversions can run on any number of threads at once.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod ascii;
mod binary;
mod convert;
mod cursor;
mod detect;
mod error;

pub use ascii::{decode_ascii, encode_ascii};
pub use binary::{decode_binary, encode_binary, HEADER_SIZE, TRIANGLE_SIZE};
pub use convert::{convert, convert_file, decode, encode};
pub use cursor::{ByteCursor, ByteWriter};
pub use detect::{detect_format, StlFormat};
pub use error::{CodecError, CodecResult};
