//! Platform Abstraction Layer (PAL) for the Linux scheduler calls used to pin threads.

mod abstractions;
mod facade;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use real::*;
