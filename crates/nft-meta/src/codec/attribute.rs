//! Attribute object encoding.

use crate::codec::primitives::JsonWriter;
use crate::codec::value::write_value;
use crate::error::EncodeError;
use crate::model::Attribute;

/// Initial buffer capacity for a single attribute object.
const ATTRIBUTE_CAPACITY_HINT: usize = 256;

/// Encodes an attribute as a JSON object.
///
/// Member order is fixed: `display_type` (only when set), `trait_type`,
/// `value`. Fails with [`EncodeError::TraitTypeMissing`] when no
/// trait_type is set; no bytes are produced in that case.
pub fn encode_attribute(attribute: &Attribute) -> Result<Vec<u8>, EncodeError> {
    let mut writer = JsonWriter::with_capacity(ATTRIBUTE_CAPACITY_HINT);
    write_attribute(&mut writer, attribute)?;
    Ok(writer.into_bytes())
}

/// Writes an attribute object into an existing writer.
///
/// The trait_type check runs before anything is written, so a failing
/// attribute leaves the writer untouched.
pub(crate) fn write_attribute(
    writer: &mut JsonWriter,
    attribute: &Attribute,
) -> Result<(), EncodeError> {
    let Some(trait_type) = attribute.trait_type() else {
        return Err(EncodeError::TraitTypeMissing {
            value_kind: attribute.value().map_or("none", |v| v.kind().name()),
        });
    };

    writer.write_byte(b'{');

    if let Some(display_type) = attribute.display_type() {
        writer.write_string_member("display_type", display_type);
        writer.write_byte(b',');
    }

    writer.write_string_member("trait_type", trait_type);
    writer.write_byte(b',');

    writer.write_member_name("value");
    match attribute.value() {
        Some(value) => write_value(writer, value),
        None => writer.write_null(),
    }

    writer.write_byte(b'}');
    Ok(())
}
