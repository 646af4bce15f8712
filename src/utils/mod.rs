use std::ffi::OsStr;
use std::fs;
use std::io;
use std::io::{BufReader, Read};
use std::path::Path;

use log::trace;
use serde::de::DeserializeOwned;

mod macros;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub trait PathExt {
    #[must_use]
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>;
}

impl PathExt for Path {
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>,
    {
        self.extension().map_or(false, |ext| ext == extension)
    }
}
