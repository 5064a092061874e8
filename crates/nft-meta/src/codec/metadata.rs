//! MetaData document encoding.

use crate::codec::attribute::write_attribute;
use crate::codec::primitives::JsonWriter;
use crate::error::EncodeError;
use crate::model::MetaData;

/// Initial buffer capacity for a metadata document.
const METADATA_CAPACITY_HINT: usize = 512;

/// Encodes a metadata document as a JSON object.
///
/// Scalar members appear in a fixed order, each omitted entirely when
/// unset. The attributes array comes last and is omitted when empty.
/// The first failing attribute aborts the encode with its error; no
/// partial output is returned.
pub fn encode_metadata(metadata: &MetaData) -> Result<Vec<u8>, EncodeError> {
    let mut writer = JsonWriter::with_capacity(METADATA_CAPACITY_HINT);

    writer.write_byte(b'{');

    let fields: [(&str, Option<&str>); 8] = [
        ("animation_url", metadata.animation_url()),
        ("background_color", metadata.background_color()),
        ("description", metadata.description()),
        ("external_link", metadata.external_link()),
        ("image", metadata.image()),
        ("image_data", metadata.image_data()),
        ("name", metadata.name()),
        ("youtube_url", metadata.youtube_url()),
    ];

    let mut after = false;
    for (name, value) in fields {
        if let Some(value) = value {
            if after {
                writer.write_byte(b',');
            }
            writer.write_string_member(name, value);
            after = true;
        }
    }

    let attributes = metadata.attributes();
    if !attributes.is_empty() {
        if after {
            writer.write_byte(b',');
        }
        writer.write_member_name("attributes");
        writer.write_byte(b'[');
        for (index, attribute) in attributes.iter().enumerate() {
            if index > 0 {
                writer.write_byte(b',');
            }
            write_attribute(&mut writer, attribute)?;
        }
        writer.write_byte(b']');
    }

    writer.write_byte(b'}');
    Ok(writer.into_bytes())
}
