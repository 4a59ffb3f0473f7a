use std::cell::Cell;

use crate::backend::{Device, HardwareTier};
use crate::context::ExtensionSet;
use crate::version::Version;

/// A `Device` that answers from values that are already known.
///
/// Useful when the extensions and limits have been retrieved by other means, and for testing
/// the resolver without a graphics context.
///
/// ```
/// use glcaps::{Api, DeviceSnapshot, Version};
///
/// let device = DeviceSnapshot::new(Version(Api::Gl, 2, 1))
///     .with_extensions(vec!["GL_ARB_framebuffer_object", "GL_ARB_depth_clamp"])
///     .with_max_texture_size(4096);
/// ```
#[derive(Debug, Clone)]
pub struct DeviceSnapshot {
    version: Version,
    extensions: ExtensionSet,
    hardware_tier: HardwareTier,
    max_texture_size: u32,
    max_anisotropy: u32,
    extension_queries: Cell<u32>,
    anisotropy_queries: Cell<u32>,
}

impl DeviceSnapshot {
    /// Builds a snapshot of a device with no extensions, the baseline tier, a maximum texture
    /// size of 2048 and an anisotropy level of 0.
    pub fn new(version: Version) -> DeviceSnapshot {
        DeviceSnapshot {
            version,
            extensions: ExtensionSet::empty(),
            hardware_tier: HardwareTier::Baseline,
            max_texture_size: 2048,
            max_anisotropy: 0,
            extension_queries: Cell::new(0),
            anisotropy_queries: Cell::new(0),
        }
    }

    /// Replaces the list of extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> DeviceSnapshot
        where I: IntoIterator<Item = S>, S: Into<String>
    {
        self.extensions = extensions.into_iter().collect();
        self
    }

    /// Replaces the list of extensions with an already built set.
    #[inline]
    pub fn with_extension_set(mut self, extensions: ExtensionSet) -> DeviceSnapshot {
        self.extensions = extensions;
        self
    }

    /// Sets the hardware tier.
    #[inline]
    pub fn with_hardware_tier(mut self, tier: HardwareTier) -> DeviceSnapshot {
        self.hardware_tier = tier;
        self
    }

    /// Sets the maximum width and height of a texture.
    #[inline]
    pub fn with_max_texture_size(mut self, size: u32) -> DeviceSnapshot {
        self.max_texture_size = size;
        self
    }

    /// Sets the value returned by the anisotropy query.
    #[inline]
    pub fn with_max_anisotropy(mut self, level: u32) -> DeviceSnapshot {
        self.max_anisotropy = level;
        self
    }

    /// Returns the version of the API.
    #[inline]
    pub fn get_version(&self) -> &Version {
        &self.version
    }

    /// Returns the extensions of the device.
    #[inline]
    pub fn get_extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Returns the number of times `has_extension` has been called.
    #[inline]
    pub fn extension_queries(&self) -> u32 {
        self.extension_queries.get()
    }

    /// Returns the number of times `query_max_anisotropy` has been called.
    #[inline]
    pub fn anisotropy_queries(&self) -> u32 {
        self.anisotropy_queries.get()
    }
}

impl Device for DeviceSnapshot {
    fn has_extension(&self, name: &str) -> bool {
        self.extension_queries.set(self.extension_queries.get() + 1);
        self.extensions.contains(name)
    }

    #[inline]
    fn api_major_version(&self) -> u8 {
        self.version.1
    }

    #[inline]
    fn max_texture_size(&self) -> u32 {
        self.max_texture_size
    }

    #[inline]
    fn hardware_tier(&self) -> HardwareTier {
        self.hardware_tier
    }

    fn query_max_anisotropy(&self) -> u32 {
        self.anisotropy_queries.set(self.anisotropy_queries.get() + 1);
        self.max_anisotropy
    }
}
