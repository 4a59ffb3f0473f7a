use std::collections::hash_set::{self, HashSet};
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;
use log::trace;

use crate::backend::Device;

/// The set of extension names advertised by a driver.
///
/// Names are case-sensitive and only ever compared in full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    names: HashSet<String, BuildHasherDefault<FnvHasher>>,
}

impl ExtensionSet {
    /// Builds a set that contains no extension.
    #[inline]
    pub fn empty() -> ExtensionSet {
        ExtensionSet::default()
    }

    /// Builds a set from the space-separated list returned by `glGetString(GL_EXTENSIONS)`.
    pub fn from_extensions_string(list: &str) -> ExtensionSet {
        list.split(' ').filter(|e| !e.is_empty()).collect()
    }

    /// Returns true if the set contains exactly this name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of extensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there is no extension.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names, in no particular order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.names.iter()
    }
}

impl<S> FromIterator<S> for ExtensionSet where S: Into<String> {
    fn from_iter<I>(iter: I) -> ExtensionSet where I: IntoIterator<Item = S> {
        ExtensionSet {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExtensionSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    #[inline]
    fn into_iter(self) -> hash_set::Iter<'a, String> {
        self.iter()
    }
}

/// Declares `ExtensionsList` with one field per extension and the probing function that
/// fills it.
macro_rules! extensions {
    ($($string:literal => $field:ident,)+) => {
        /// Contains data about the list of extensions that matter for resolving capabilities.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct ExtensionsList {
            $(
                #[doc = $string]
                pub $field: bool,
            )+
        }

        impl ExtensionsList {
            /// Asks the device about each extension, by exact name.
            pub fn probe<D: ?Sized>(device: &D) -> ExtensionsList where D: Device {
                let mut extensions = ExtensionsList::default();

                $(
                    if device.has_extension($string) {
                        trace!("extension {} is present", $string);
                        extensions.$field = true;
                    }
                )+

                extensions
            }

            /// Returns the names of all the extensions this list knows about.
            pub fn names() -> &'static [&'static str] {
                &[$($string,)+]
            }
        }
    };
}

extensions! {
    "GL_AMD_compressed_ATC_texture" => gl_amd_compressed_atc_texture,
    "GL_APPLE_texture_max_level" => gl_apple_texture_max_level,
    "GL_ARB_depth_clamp" => gl_arb_depth_clamp,
    "GL_ARB_framebuffer_object" => gl_arb_framebuffer_object,
    "GL_ARB_texture_non_power_of_two" => gl_arb_texture_non_power_of_two,
    "GL_ATI_texture_compression_atitc" => gl_ati_texture_compression_atitc,
    "GL_EXT_framebuffer_object" => gl_ext_framebuffer_object,
    "GL_EXT_framebuffer_sRGB" => gl_ext_framebuffer_srgb,
    "GL_EXT_sRGB" => gl_ext_srgb,
    "GL_EXT_texture_compression_dxt1" => gl_ext_texture_compression_dxt1,
    "GL_EXT_texture_compression_dxt3" => gl_ext_texture_compression_dxt3,
    "GL_EXT_texture_compression_dxt5" => gl_ext_texture_compression_dxt5,
    "GL_EXT_texture_compression_s3tc" => gl_ext_texture_compression_s3tc,
    "GL_EXT_texture_filter_anisotropic" => gl_ext_texture_filter_anisotropic,
    "GL_EXT_texture_sRGB" => gl_ext_texture_srgb,
    "GL_IMG_texture_compression_pvrtc" => gl_img_texture_compression_pvrtc,
    "GL_IMG_texture_npot" => gl_img_texture_npot,
    "GL_NV_depth_nonlinear" => gl_nv_depth_nonlinear,
    "GL_NV_texture_npot_2D_mipmap" => gl_nv_texture_npot_2d_mipmap,
    "GL_OES_compressed_ETC1_RGB8_texture" => gl_oes_compressed_etc1_rgb8_texture,
    "GL_OES_depth24" => gl_oes_depth24,
    "GL_OES_packed_depth_stencil" => gl_oes_packed_depth_stencil,
    "GL_OES_texture_compression_S3TC" => gl_oes_texture_compression_s3tc,
    "GL_OES_texture_npot" => gl_oes_texture_npot,
}
