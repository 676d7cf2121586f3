//! Reading and writing whole files. Errors come from `fs-err`, so they always name the path
//! involved.

#[macro_use]
extern crate log;

mod io_native;

pub use io_native::*;
