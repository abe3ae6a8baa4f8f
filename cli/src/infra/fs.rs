//! Filesystem infrastructure — implements `LocalFs`.

use std::path::Path;

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl LocalFs for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
