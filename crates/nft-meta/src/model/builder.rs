//! Builder API for ergonomic MetaData construction.
//!
//! Provides a fluent interface over the `MetaData` setters.
//!
//! # Example
//!
//! ```rust
//! use nft_meta::model::builder::MetaDataBuilder;
//! use nft_meta::Attribute;
//!
//! let metadata = MetaDataBuilder::new()
//!     .name("deep-sea-000042")
//!     .description("A deep sea dweller")
//!     .attribute(Attribute::string("Base", "Starfish"))
//!     .attribute(Attribute::uint64("Level", 5))
//!     .build();
//! ```

use crate::model::{Attribute, MetaData};

/// Builder for constructing a MetaData document.
#[derive(Debug, Clone, Default)]
pub struct MetaDataBuilder {
    metadata: MetaData,
}

impl MetaDataBuilder {
    /// Creates a new builder over an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the animation_url field.
    pub fn animation_url(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_animation_url(value);
        self
    }

    /// Sets the background_color field.
    pub fn background_color(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_background_color(value);
        self
    }

    /// Sets the description field.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_description(value);
        self
    }

    /// Sets the external_link field.
    pub fn external_link(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_external_link(value);
        self
    }

    /// Sets the image field.
    pub fn image(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_image(value);
        self
    }

    /// Sets the image_data field.
    pub fn image_data(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_image_data(value);
        self
    }

    /// Sets the name field.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_name(value);
        self
    }

    /// Sets the youtube_url field.
    pub fn youtube_url(mut self, value: impl Into<String>) -> Self {
        self.metadata.set_youtube_url(value);
        self
    }

    /// Appends an attribute.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.metadata.append_attribute(attribute);
        self
    }

    /// Appends several attributes at once.
    pub fn attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        for attribute in attributes {
            self.metadata.append_attribute(attribute);
        }
        self
    }

    /// Returns the finished document.
    pub fn build(self) -> MetaData {
        self.metadata
    }
}
