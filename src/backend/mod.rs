/*!

The interface between glcaps and the graphics device it inspects.

The resolver never talks to a driver directly. Everything it needs goes through the `Device`
trait: exact extension membership, the API major version, the maximum texture size, the
hardware tier and the one live query for the anisotropy level.

Two implementations are provided: `DeviceSnapshot`, which answers from values that are already
known, and `GlDevice` (with the `gl_device` feature), which reads them from a current OpenGL or
OpenGL ES context.

*/
use std::ops::Deref;
use std::rc::Rc;

pub use self::snapshot::DeviceSnapshot;

#[cfg(feature = "gl_device")]
pub use self::gl_device::{DeviceCreationError, GlDevice};

#[cfg(feature = "gl_device")]
mod gl_device;
mod snapshot;

/// The family of graphics API the device is bound to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BackendVariant {
    /// OpenGL 3.0 and above.
    ModernDesktop,

    /// OpenGL ES 2.0 and above.
    EmbeddedMobile,

    /// OpenGL before 3.0.
    LegacyDesktop,

    /// A non-GL backend that doesn't advertise extensions.
    ///
    /// Its capabilities derive from the `HardwareTier` of the device instead.
    HardwareAccelerated,
}

impl BackendVariant {
    /// Returns true if the capabilities of this backend are found by probing extension strings.
    #[inline]
    pub fn is_extension_based(&self) -> bool {
        match *self {
            BackendVariant::ModernDesktop => true,
            BackendVariant::EmbeddedMobile => true,
            BackendVariant::LegacyDesktop => true,
            BackendVariant::HardwareAccelerated => false,
        }
    }
}

/// Coarse classification of the hardware.
///
/// Only meaningful for `BackendVariant::HardwareAccelerated`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HardwareTier {
    /// Lowest common denominator hardware.
    Baseline,

    /// Hardware with the full feature set.
    Advanced,
}

impl Default for HardwareTier {
    #[inline]
    fn default() -> HardwareTier {
        HardwareTier::Baseline
    }
}

/// Trait for the devices whose capabilities can be resolved.
pub trait Device {
    /// Returns true if the driver advertises the extension with this exact name.
    ///
    /// Names are case-sensitive. Implementations must not do prefix or substring matching.
    fn has_extension(&self, name: &str) -> bool;

    /// Returns the major version of the API, for example `3` for OpenGL 3.3.
    fn api_major_version(&self) -> u8;

    /// Returns the maximum width and height of a texture.
    fn max_texture_size(&self) -> u32;

    /// Returns the coarse classification of the hardware.
    fn hardware_tier(&self) -> HardwareTier;

    /// Queries the device for the maximum level of anisotropic filtering.
    ///
    /// This is a live query. The resolver only calls it when anisotropic filtering is known to
    /// be supported.
    fn query_max_anisotropy(&self) -> u32;
}

impl<'a, T: ?Sized> Device for &'a T where T: Device {
    fn has_extension(&self, name: &str) -> bool {
        (**self).has_extension(name)
    }

    fn api_major_version(&self) -> u8 {
        (**self).api_major_version()
    }

    fn max_texture_size(&self) -> u32 {
        (**self).max_texture_size()
    }

    fn hardware_tier(&self) -> HardwareTier {
        (**self).hardware_tier()
    }

    fn query_max_anisotropy(&self) -> u32 {
        (**self).query_max_anisotropy()
    }
}

impl<T: ?Sized> Device for Rc<T> where T: Device {
    fn has_extension(&self, name: &str) -> bool {
        self.deref().has_extension(name)
    }

    fn api_major_version(&self) -> u8 {
        self.deref().api_major_version()
    }

    fn max_texture_size(&self) -> u32 {
        self.deref().max_texture_size()
    }

    fn hardware_tier(&self) -> HardwareTier {
        self.deref().hardware_tier()
    }

    fn query_max_anisotropy(&self) -> u32 {
        self.deref().query_max_anisotropy()
    }
}

impl<T: ?Sized> Device for Box<T> where T: Device {
    fn has_extension(&self, name: &str) -> bool {
        self.deref().has_extension(name)
    }

    fn api_major_version(&self) -> u8 {
        self.deref().api_major_version()
    }

    fn max_texture_size(&self) -> u32 {
        self.deref().max_texture_size()
    }

    fn hardware_tier(&self) -> HardwareTier {
        self.deref().hardware_tier()
    }

    fn query_max_anisotropy(&self) -> u32 {
        self.deref().query_max_anisotropy()
    }
}
