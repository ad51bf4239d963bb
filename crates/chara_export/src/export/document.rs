//! Fixed-template assembly of the snapshot document
//!
//! The output is a trailing-comma JSON dialect: every entry, including the
//! last in each object or list, is followed by a comma. The templates match
//! the files existing consumers already read, so the dialect is preserved
//! verbatim rather than normalized to strict JSON.

use std::fmt::{Display, Write};

/// Literal substituted when a property read fails with a type mismatch
pub const WRONG_TYPE_SENTINEL: &str = "<<Wrong Type>>";

/// Builds one document section (or the whole document) from fixed text
/// templates
///
/// Layout, byte for byte: document `\n{` .. `\n},`; category
/// `\n  "<name>": {` .. `\n  },`; entry `\n\t"<token>": {` .. `\n\t},`;
/// fields at two tabs, list items at three.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    out: String,
}

impl DocumentBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the outer document envelope: `\n{`
    pub fn open_document(&mut self) {
        self.out.push_str("\n{");
    }

    /// Close the outer document envelope: `\n},`
    pub fn close_document(&mut self) {
        self.out.push_str("\n},");
    }

    /// Open a category: `\n  "<name>": {`
    pub fn open_category(&mut self, name: &str) {
        let _ = write!(self.out, "\n  \"{name}\": {{");
    }

    /// Close a category: `\n  },`
    pub fn close_category(&mut self) {
        self.out.push_str("\n  },");
    }

    /// Open an entry: `\n\t"<token>": {`
    pub fn open_entry(&mut self, token: &str) {
        let _ = write!(self.out, "\n\t\"{token}\": {{");
    }

    /// Close an entry: `\n\t},`
    pub fn close_entry(&mut self) {
        self.out.push_str("\n\t},");
    }

    /// Quoted field: `\n\t\t"<key>": "<value>",`
    pub fn string_field(&mut self, key: &str, value: impl Display) {
        let _ = write!(self.out, "\n\t\t\"{key}\": \"{value}\",");
    }

    /// Unquoted field: `\n\t\t"<key>": <value>,`
    pub fn raw_field(&mut self, key: &str, value: impl Display) {
        let _ = write!(self.out, "\n\t\t\"{key}\": {value},");
    }

    /// Open a list field: `\n\t\t"<key>": [`
    pub fn open_list(&mut self, key: &str) {
        let _ = write!(self.out, "\n\t\t\"{key}\": [");
    }

    /// Quoted list item: `\n\t\t\t"<value>",`
    pub fn list_item(&mut self, value: &str) {
        let _ = write!(self.out, "\n\t\t\t\"{value}\",");
    }

    /// Close a list field: `\n\t\t],`
    pub fn close_list(&mut self) {
        self.out.push_str("\n\t\t],");
    }

    /// Append a fully built section
    pub fn push_section(&mut self, section: Self) {
        self.out.push_str(&section.out);
    }

    /// Consume the builder and return the assembled text
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Render a boolean the way the snapshot dialect spells it
#[must_use]
pub const fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Render a texture transform pair: `(x.xx, y.yy)`
#[must_use]
pub fn format_vec2(value: [f32; 2]) -> String {
    format!("({:.2}, {:.2})", value[0], value[1])
}

/// Render a color as an unquoted channel list: `[ r, g, b, a ]`
#[must_use]
pub fn format_color(value: [f32; 4]) -> String {
    format!("[ {}, {}, {}, {} ]", value[0], value[1], value[2], value[3])
}

/// Render a float parameter without decoration
#[must_use]
pub fn format_float(value: f32) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_templates() {
        let mut builder = DocumentBuilder::new();
        builder.open_category("render");
        builder.open_entry("o_body@ca_slot00");
        builder.string_field("enabled", format_bool(true));
        builder.raw_field("_rimpower", format_float(0.5));
        builder.open_list("mat");
        builder.list_item("MatA@ca_slot00");
        builder.close_list();
        builder.close_entry();
        builder.close_category();

        let expected = concat!(
            "\n  \"render\": {",
            "\n\t\"o_body@ca_slot00\": {",
            "\n\t\t\"enabled\": \"True\",",
            "\n\t\t\"_rimpower\": 0.5,",
            "\n\t\t\"mat\": [",
            "\n\t\t\t\"MatA@ca_slot00\",",
            "\n\t\t],",
            "\n\t},",
            "\n  },",
        );
        assert_eq!(builder.finish(), expected);
    }

    #[test]
    fn test_document_envelope() {
        let mut builder = DocumentBuilder::new();
        builder.open_document();
        builder.close_document();
        assert_eq!(builder.finish(), "\n{\n},");
    }

    #[test]
    fn test_format_bool_casing() {
        assert_eq!(format_bool(true), "True");
        assert_eq!(format_bool(false), "False");
    }

    #[test]
    fn test_format_vec2_two_decimals() {
        assert_eq!(format_vec2([0.0, 0.0]), "(0.00, 0.00)");
        assert_eq!(format_vec2([1.0, 0.25]), "(1.00, 0.25)");
    }

    #[test]
    fn test_format_color_channels() {
        assert_eq!(format_color([1.0, 0.0, 0.5, 1.0]), "[ 1, 0, 0.5, 1 ]");
    }

    #[test]
    fn test_format_float_plain() {
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(10.0), "10");
    }
}
