use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::pack::PackedImage;

pub const DEFAULT_VAR_BASE: &str = "img";
pub const DEFAULT_TOOL_NAME: &str = "img2xbm";
pub const DEFAULT_BYTES_PER_ROW: usize = 19;
pub const DEFAULT_INDENT: usize = 4;

/// Target flavour of the generated C source.
///
/// Only the include line and the token that keeps the array in flash differ
/// between dialects; the rest of the declaration is shared.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Dialect {
    /// u8g2 / U8x8 sketches, `drawXBMP` expects the data in PROGMEM
    #[default]
    U8g2,
    /// avr-libc `pgmspace.h`
    Avr,
    /// Plain X11 bitmap, const data needs no placement attribute
    X11,
}

impl Dialect {
    pub fn preamble(self) -> &'static str {
        match self {
            Dialect::U8g2 => "#include <U8g2lib.h>",
            Dialect::Avr => "#include <avr/pgmspace.h>",
            Dialect::X11 => "#include <stdint.h>",
        }
    }

    pub fn placement(self) -> Option<&'static str> {
        match self {
            Dialect::U8g2 => Some("U8X8_PROGMEM"),
            Dialect::Avr => Some("PROGMEM"),
            Dialect::X11 => None,
        }
    }
}

/// Naming and layout of the emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionConfig {
    pub var_base: String,
    /// Where the image came from, only used in a comment.
    pub provenance: String,
    pub tool_name: String,
    pub bytes_per_row: usize,
    pub indent: usize,
    pub dialect: Dialect,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            var_base: DEFAULT_VAR_BASE.to_string(),
            provenance: String::new(),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            bytes_per_row: DEFAULT_BYTES_PER_ROW,
            indent: DEFAULT_INDENT,
            dialect: Dialect::default(),
        }
    }
}

impl EmissionConfig {
    pub fn with_var_base(mut self, var_base: impl Into<String>) -> Self {
        self.var_base = var_base.into();
        self
    }

    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = provenance.into();
        self
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }

    pub fn with_bytes_per_row(mut self, bytes_per_row: usize) -> Self {
        self.bytes_per_row = bytes_per_row;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}

/// Generated source, one entry per line without line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }

    /// Writes the text followed by a single newline.
    pub fn write_to<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), W::Error> {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            writer.write_all(line.as_bytes())?;
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Renders a byte as a C hex literal, e.g. `0x0A`.
pub fn format_byte(byte: u8) -> String {
    format!("0x{byte:02X}")
}

fn basename(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Formats a packed image as a C array declaration with `_width` and
/// `_height` defines.
pub fn emit(image: &PackedImage, config: &EmissionConfig) -> SourceText {
    let var = &config.var_base;
    let mut lines = Vec::new();

    lines.push(config.dialect.preamble().to_string());
    lines.push(String::new());
    lines.push(format!(
        "// generated from '{}' using `{}`",
        basename(&config.provenance),
        config.tool_name
    ));
    lines.push(format!("#define {var}_width {}", image.width()));
    lines.push(format!("#define {var}_height {}", image.height()));
    // the bitmap has to stay in flash, not be copied into RAM
    lines.push(match config.dialect.placement() {
        Some(placement) => format!("static const unsigned char {var}_bits[] {placement} = {{"),
        None => format!("static const unsigned char {var}_bits[] = {{"),
    });

    let indent = " ".repeat(config.indent);
    for row in image.bytes().chunks(config.bytes_per_row.max(1)) {
        let bytes: Vec<String> = row.iter().map(|&byte| format_byte(byte)).collect();
        lines.push(format!("{indent}{},", bytes.join(", ")));
    }

    lines.push("};".to_string());
    SourceText { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::pack;
    use alloc::vec;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    fn image_with_bytes(count: usize) -> PackedImage {
        pack(vec![true; count * 8], (count * 8) as u32, 1).unwrap()
    }

    fn data_lines(text: &SourceText) -> Vec<&String> {
        text.lines()
            .iter()
            .filter(|line| line.starts_with(' '))
            .collect()
    }

    #[test]
    fn hex_literals() {
        assert_eq!(format_byte(10), "0x0A");
        assert_eq!(format_byte(255), "0xFF");
        assert_eq!(format_byte(0), "0x00");
    }

    #[test]
    fn two_full_rows() {
        let text = emit(&image_with_bytes(38), &EmissionConfig::default());
        let rows = data_lines(&text);
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert!(row.starts_with("    0xFF"));
            assert!(row.ends_with(','));
            assert_eq!(row.trim_end_matches(',').split(", ").count(), 19);
        }
    }

    #[test]
    fn partial_last_row_is_kept() {
        let text = emit(&image_with_bytes(20), &EmissionConfig::default());
        let rows = data_lines(&text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].trim_end_matches(',').split(", ").count(), 19);
        assert_eq!(rows[1], "    0xFF,");
    }

    #[test]
    fn empty_image_has_no_data_lines() {
        let image = pack(core::iter::empty(), 0, 0).unwrap();
        let text = emit(&image, &EmissionConfig::default());
        assert_eq!(text.lines().len(), 7);
        assert_eq!(text.lines()[5], "static const unsigned char img_bits[] U8X8_PROGMEM = {");
        assert_eq!(text.lines()[6], "};");
    }

    #[test]
    fn full_listing() {
        let image = pack((0..16).map(|i| i == 0 || i == 11), 8, 2).unwrap();
        let config = EmissionConfig::default()
            .with_var_base("logo")
            .with_provenance("/home/user/assets/logo.bmp");
        assert_eq!(
            emit(&image, &config).to_string(),
            "#include <U8g2lib.h>\n\
             \n\
             // generated from 'logo.bmp' using `img2xbm`\n\
             #define logo_width 8\n\
             #define logo_height 2\n\
             static const unsigned char logo_bits[] U8X8_PROGMEM = {\n    \
             0x01, 0x08,\n\
             };"
        );
    }

    #[test]
    fn windows_provenance_is_stripped() {
        let config = EmissionConfig::default().with_provenance(r"C:\art\splash.png");
        let text = emit(&image_with_bytes(1), &config);
        assert_eq!(text.lines()[2], "// generated from 'splash.png' using `img2xbm`");
    }

    #[test]
    fn custom_layout() {
        let config = EmissionConfig::default()
            .with_bytes_per_row(4)
            .with_indent(2)
            .with_tool_name("logo-tool");
        let text = emit(&image_with_bytes(10), &config);
        let rows = data_lines(&text);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "  0xFF, 0xFF, 0xFF, 0xFF,");
        assert_eq!(rows[2], "  0xFF, 0xFF,");
        assert!(text.lines()[2].ends_with("`logo-tool`"));
    }

    #[test]
    fn zero_bytes_per_row_means_one() {
        let config = EmissionConfig::default().with_bytes_per_row(0);
        let text = emit(&image_with_bytes(3), &config);
        assert_eq!(data_lines(&text).len(), 3);
    }

    #[test]
    fn dialects() {
        let image = image_with_bytes(1);
        let avr = emit(&image, &EmissionConfig::default().with_dialect(Dialect::Avr));
        assert_eq!(avr.lines()[0], "#include <avr/pgmspace.h>");
        assert_eq!(avr.lines()[5], "static const unsigned char img_bits[] PROGMEM = {");

        let x11 = emit(&image, &EmissionConfig::default().with_dialect(Dialect::X11));
        assert_eq!(x11.lines()[0], "#include <stdint.h>");
        assert_eq!(x11.lines()[5], "static const unsigned char img_bits[] = {");
    }

    #[test]
    fn dialect_names_parse() {
        for dialect in Dialect::iter() {
            assert_eq!(Dialect::from_str(&dialect.to_string()), Ok(dialect));
        }
        assert_eq!(Dialect::from_str("U8G2"), Ok(Dialect::U8g2));
        assert!(Dialect::from_str("svg").is_err());
    }

    #[test]
    fn write_to_appends_newline() {
        let text = emit(&image_with_bytes(2), &EmissionConfig::default());
        let mut out: Vec<u8> = Vec::new();
        text.write_to(&mut out).unwrap();
        let mut expected = text.to_string().into_bytes();
        expected.push(b'\n');
        assert_eq!(out, expected);
    }

    #[test]
    fn emission_is_deterministic() {
        let image = image_with_bytes(45);
        let config = EmissionConfig::default().with_provenance("a/b/c.bmp");
        assert_eq!(emit(&image, &config).to_string(), emit(&image, &config).to_string());
        assert_eq!(emit(&image, &config), emit(&image, &config));
    }
}
