//! Loading of yearly growth and inflation rates from tab-separated files.

mod loader;

pub use loader::{RateTableLoader, RateTableLoaderError};
