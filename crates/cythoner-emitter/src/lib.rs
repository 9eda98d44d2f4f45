//! Cython renderer for the cythoner generator.
//!
//! Walks a [`cythoner_syntax::Module`] once, top to bottom, and produces
//! `.pyx` text:
//!
//! ```text
//! # input.py
//! @no_gil()
//! def f(x: int) -> int:
//!     return x
//! ```
//!
//! Generates:
//!
//! ```text
//! cdef int f(int x) nogil:
//!     return x
//! ```

pub mod emitter;
pub use emitter::{
    ArgumentList, Printer, PrinterOptions, get_comparison_text, get_operator_text,
};

pub mod error;
pub use error::EmitError;

pub mod source_writer;
pub use source_writer::SourceWriter;
