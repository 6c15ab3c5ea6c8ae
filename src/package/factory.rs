// src/package/factory.rs

//! Builder factories handed to listing parsers

use super::PackageMaker;
use std::cell::Cell;

/// Source of fresh record builders
///
/// Parsers call `begin` once per listing entry, so a factory sees every
/// record creation across all formats.
pub trait PackageFactory {
    fn begin(&self) -> PackageMaker;
}

/// Factory returning plain empty builders
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl PackageFactory for DefaultFactory {
    fn begin(&self) -> PackageMaker {
        PackageMaker::begin()
    }
}

/// Factory that counts the builders it hands out
#[derive(Debug, Default)]
pub struct CountingFactory {
    begun: Cell<usize>,
}

impl CountingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records begun so far
    pub fn begun(&self) -> usize {
        self.begun.get()
    }
}

impl PackageFactory for CountingFactory {
    fn begin(&self) -> PackageMaker {
        self.begun.set(self.begun.get() + 1);
        PackageMaker::begin()
    }
}

impl<F> PackageFactory for F
where
    F: Fn() -> PackageMaker,
{
    fn begin(&self) -> PackageMaker {
        self()
    }
}
