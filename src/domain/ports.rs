use crate::utils::error::Result;

/// Byte-level file access used by the report store. The production adapter
/// hits the local filesystem; tests swap in an in-memory map.
pub trait Storage {
    /// Reads the whole file, or `Ok(None)` when it does not exist yet.
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the whole file with `data`.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}
