/*!
 * XML writer implementation for sfpack
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::Config;
use crate::error::Result;
use crate::types::{Manifest, TypeGroup};

/// XML writer for package manifests
pub struct ManifestWriter {
    /// Writer configuration
    config: Config,
}

impl ManifestWriter {
    /// Create a new manifest writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the manifest to the configured output file.
    ///
    /// The document is rendered fully in memory before the file is created,
    /// so a serialization failure never leaves a truncated document behind.
    /// The file is created or overwritten and flushed before returning.
    pub fn write(&self, manifest: &Manifest) -> Result<()> {
        let bytes = self.to_bytes(manifest)?;

        let file = File::create(&self.config.output_file)?;
        let mut out = BufWriter::new(file);
        out.write_all(&bytes)?;
        out.flush()?;

        Ok(())
    }

    /// Render the manifest as a tab-indented, CRLF-terminated XML document
    pub fn to_bytes(&self, manifest: &Manifest) -> Result<Vec<u8>> {
        let mut xml = Writer::new_with_indent(Vec::new(), b'\t', 1);

        // Declaration without an encoding attribute; bytes are UTF-8 regardless
        xml.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

        let mut root = BytesStart::new("Package");
        root.push_attribute(("xmlns", manifest.xmlns.as_str()));
        xml.write_event(Event::Start(root))?;

        for group in &manifest.groups {
            self.write_group(group, &mut xml)?;
        }

        // version comes last, after all types elements
        write_text_element(&mut xml, "version", &manifest.api_version)?;

        xml.write_event(Event::End(BytesEnd::new("Package")))?;

        Ok(to_crlf(xml.into_inner()))
    }

    /// Write one types element: members in scanner order, then the type name
    fn write_group<W: Write>(&self, group: &TypeGroup, xml: &mut Writer<W>) -> Result<()> {
        xml.write_event(Event::Start(BytesStart::new("types")))?;

        for member in &group.members {
            write_text_element(xml, "members", member)?;
        }
        write_text_element(xml, "name", &group.type_name)?;

        xml.write_event(Event::End(BytesEnd::new("types")))?;

        Ok(())
    }
}

/// Write a single element holding escaped text content
fn write_text_element<W: Write>(xml: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(tag)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(tag)))?;

    Ok(())
}

/// Normalize the serializer's LF line breaks to CRLF
fn to_crlf(bytes: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 16);
    for byte in bytes {
        if byte == b'\n' {
            out.push(b'\r');
        }
        out.push(byte);
    }
    out
}
