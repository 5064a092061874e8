//! MetaData document structure.

use crate::model::Attribute;

/// An NFT metadata document.
///
/// All scalar fields are optional. An unset field is omitted from the
/// JSON output entirely, which is distinct from a field set to the
/// empty string. Attributes keep their insertion order.
///
/// Encoding is a pure read of the current state and can be repeated.
/// Mutating and encoding the same instance from different threads
/// requires external synchronization; the borrow rules enforce this
/// within safe code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaData {
    animation_url: Option<String>,
    background_color: Option<String>,
    description: Option<String>,
    external_link: Option<String>,
    image: Option<String>,
    image_data: Option<String>,
    name: Option<String>,
    youtube_url: Option<String>,
    attributes: Vec<Attribute>,
}

impl MetaData {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the animation_url field.
    pub fn set_animation_url(&mut self, value: impl Into<String>) {
        self.animation_url = Some(value.into());
    }

    /// Sets the background_color field.
    pub fn set_background_color(&mut self, value: impl Into<String>) {
        self.background_color = Some(value.into());
    }

    /// Sets the description field.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = Some(value.into());
    }

    /// Sets the external_link field.
    pub fn set_external_link(&mut self, value: impl Into<String>) {
        self.external_link = Some(value.into());
    }

    /// Sets the image field.
    pub fn set_image(&mut self, value: impl Into<String>) {
        self.image = Some(value.into());
    }

    /// Sets the image_data field (e.g. inline SVG markup).
    pub fn set_image_data(&mut self, value: impl Into<String>) {
        self.image_data = Some(value.into());
    }

    /// Sets the name field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = Some(value.into());
    }

    /// Sets the youtube_url field.
    pub fn set_youtube_url(&mut self, value: impl Into<String>) {
        self.youtube_url = Some(value.into());
    }

    /// Appends an attribute. Insertion order is preserved in the
    /// output; entries are never deduplicated.
    pub fn append_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Returns the animation_url field, if set.
    pub fn animation_url(&self) -> Option<&str> {
        self.animation_url.as_deref()
    }

    /// Returns the background_color field, if set.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Returns the description field, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the external_link field, if set.
    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }

    /// Returns the image field, if set.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the image_data field, if set.
    pub fn image_data(&self) -> Option<&str> {
        self.image_data.as_deref()
    }

    /// Returns the name field, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the youtube_url field, if set.
    pub fn youtube_url(&self) -> Option<&str> {
        self.youtube_url.as_deref()
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}
