use embedded_io::ErrorType;

/// Lets `embedded_io` writers target stdout or a file.
pub struct StdWriter<W> {
    inner: W,
}

impl<W: std::io::Write> StdWriter<W> {
    pub fn new(inner: W) -> Self {
        StdWriter { inner }
    }
}

impl<W: std::io::Write> ErrorType for StdWriter<W> {
    type Error = std::io::Error;
}

impl<W: std::io::Write> embedded_io::Write for StdWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_writes() {
        let mut out = Vec::new();
        let mut writer = StdWriter::new(&mut out);
        embedded_io::Write::write_all(&mut writer, b"0xFF,").unwrap();
        embedded_io::Write::flush(&mut writer).unwrap();
        assert_eq!(out, b"0xFF,");
    }
}
