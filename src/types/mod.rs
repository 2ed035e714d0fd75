//! General types used in the library.

pub mod err;
