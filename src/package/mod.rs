// src/package/mod.rs

//! Canonical package records and the builders that produce them
//!
//! Every listing parser follows the same lifecycle per entry: obtain a fresh
//! [`PackageMaker`] from a [`PackageFactory`], set fields, then
//! [`finalize`](PackageMaker::finalize) it into an immutable [`PackageRecord`].

mod builder;
mod factory;
mod record;

pub use builder::PackageMaker;
pub use factory::{CountingFactory, DefaultFactory, PackageFactory};
pub use record::PackageRecord;
