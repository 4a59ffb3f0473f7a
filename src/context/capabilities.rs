use log::{debug, warn};

use crate::backend::{BackendVariant, Device, HardwareTier};
use crate::context::ExtensionsList;

/// Drivers that report a maximum texture size at least this big support textures of arbitrary
/// dimensions, even without advertising an extension for it.
const NPOT_MIN_MAX_TEXTURE_SIZE: u32 = 8192;

/// Represents the capabilities of a device.
///
/// Resolved once when the device is initialized, and never modified afterwards. The only way
/// to obtain one is `Capabilities::resolve`:
///
/// ```compile_fail
/// let forged = glcaps::Capabilities {
///     supports_non_power_of_two: false,
///     supports_texture_filter_anisotropic: true,
///     max_texture_anisotropy: 0,
///     supports_depth24: false,
///     supports_packed_depth_stencil: false,
///     supports_depth_non_linear: false,
///     supports_texture_max_level: false,
///     supports_dxt1: false,
///     supports_s3tc: true,
///     supports_pvrtc: false,
///     supports_etc1: false,
///     supports_atitc: false,
///     supports_framebuffer_object_arb: false,
///     supports_framebuffer_object_ext: false,
///     supports_srgb: false,
///     supports_texture_arrays: false,
///     supports_depth_clamp: false,
///     supports_vertex_textures: false,
/// };
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Capabilities {
    /// Whether textures whose dimensions are not powers of two can be used.
    pub supports_non_power_of_two: bool,

    /// Whether anisotropic filtering is available.
    pub supports_texture_filter_anisotropic: bool,

    /// Maximum level of anisotropic filtering.
    ///
    /// `0` if and only if anisotropic filtering is not supported.
    pub max_texture_anisotropy: u32,

    /// Whether 24 bits depth buffers are available.
    pub supports_depth24: bool,

    /// Whether the combined depth and stencil format is available.
    pub supports_packed_depth_stencil: bool,

    /// Whether the non-linear depth buffer encoding is available.
    pub supports_depth_non_linear: bool,

    /// Whether the highest mipmap level of a texture can be clamped.
    pub supports_texture_max_level: bool,

    /// Whether DXT1 compressed textures can be used.
    ///
    /// Always true if `supports_s3tc` is true.
    pub supports_dxt1: bool,

    /// Whether the S3TC family (DXT1, DXT3, DXT5) of compressed textures can be used.
    pub supports_s3tc: bool,

    /// Whether PVRTC compressed textures can be used.
    pub supports_pvrtc: bool,

    /// Whether ETC1 compressed textures can be used.
    pub supports_etc1: bool,

    /// Whether ATITC compressed textures can be used.
    pub supports_atitc: bool,

    /// Whether the framebuffer objects of `GL_ARB_framebuffer_object` (or of the core API)
    /// can be used.
    pub supports_framebuffer_object_arb: bool,

    /// Whether the framebuffer objects of `GL_EXT_framebuffer_object` can be used.
    pub supports_framebuffer_object_ext: bool,

    /// Whether sRGB textures and framebuffers can be used.
    pub supports_srgb: bool,

    /// Whether texture arrays can be used.
    pub supports_texture_arrays: bool,

    /// Whether depth clamping can be enabled.
    pub supports_depth_clamp: bool,

    /// Whether textures can be sampled from the vertex shader.
    pub supports_vertex_textures: bool,
}

impl Capabilities {
    /// Determines the capabilities of `device`.
    ///
    /// This never fails. Whatever isn't known to be supported is reported as unsupported.
    /// The only live query made on the device is the anisotropy level, and only when
    /// anisotropic filtering is supported.
    pub fn resolve<D: ?Sized>(backend: BackendVariant, device: &D) -> Capabilities
        where D: Device
    {
        let capabilities = if backend.is_extension_based() {
            resolve_extensions(backend, device)
        } else {
            resolve_hardware_tier(device)
        };

        debug!("resolved {:?} capabilities: {:?}", backend, capabilities);
        capabilities
    }
}

/// Resolves the capabilities of a backend that doesn't advertise extensions.
fn resolve_hardware_tier<D: ?Sized>(device: &D) -> Capabilities where D: Device {
    let advanced = device.hardware_tier() == HardwareTier::Advanced;

    Capabilities {
        supports_non_power_of_two: advanced,

        supports_texture_filter_anisotropic: true,
        max_texture_anisotropy: query_anisotropy(device),

        supports_depth24: true,
        supports_packed_depth_stencil: true,
        supports_depth_non_linear: false,
        supports_texture_max_level: true,

        supports_dxt1: true,
        supports_s3tc: true,
        supports_pvrtc: false,
        supports_etc1: false,
        supports_atitc: false,

        // render targets are handled without framebuffer objects
        supports_framebuffer_object_arb: false,
        supports_framebuffer_object_ext: false,

        supports_srgb: true,
        supports_texture_arrays: advanced,
        supports_depth_clamp: advanced,
        supports_vertex_textures: advanced,
    }
}

/// Resolves the capabilities of one of the GL backends by looking at extensions.
fn resolve_extensions<D: ?Sized>(backend: BackendVariant, device: &D) -> Capabilities
    where D: Device
{
    let extensions = ExtensionsList::probe(device);
    let embedded = backend == BackendVariant::EmbeddedMobile;

    let supports_non_power_of_two = if embedded {
        extensions.gl_oes_texture_npot || extensions.gl_arb_texture_non_power_of_two ||
        extensions.gl_img_texture_npot || extensions.gl_nv_texture_npot_2d_mipmap
    } else {
        // npot support is patchy on desktop, even though it is core since GL 2.0
        device.max_texture_size() >= NPOT_MIN_MAX_TEXTURE_SIZE
    };

    let supports_texture_filter_anisotropic = extensions.gl_ext_texture_filter_anisotropic;
    let max_texture_anisotropy = if supports_texture_filter_anisotropic {
        query_anisotropy(device)
    } else {
        0
    };

    let (supports_depth24, supports_packed_depth_stencil, supports_depth_non_linear,
         supports_texture_max_level) = if embedded
    {
        (extensions.gl_oes_depth24, extensions.gl_oes_packed_depth_stencil,
         extensions.gl_nv_depth_nonlinear, extensions.gl_apple_texture_max_level)
    } else {
        (true, true, false, true)
    };

    // s3tc must be known before dxt1
    let supports_s3tc = extensions.gl_ext_texture_compression_s3tc ||
                        extensions.gl_oes_texture_compression_s3tc ||
                        extensions.gl_ext_texture_compression_dxt3 ||
                        extensions.gl_ext_texture_compression_dxt5;
    let supports_dxt1 = supports_s3tc || extensions.gl_ext_texture_compression_dxt1;

    let (supports_framebuffer_object_arb, supports_framebuffer_object_ext) = if embedded {
        // framebuffer objects are core in GLES 2.0
        (true, false)
    } else {
        // since GL 3.0 the functions of GL_ARB_framebuffer_object are core, even if the driver
        // doesn't list the extension
        (device.api_major_version() >= 3 || extensions.gl_arb_framebuffer_object,
         extensions.gl_ext_framebuffer_object)
    };

    let supports_srgb = if embedded {
        extensions.gl_ext_srgb
    } else {
        extensions.gl_ext_texture_srgb && extensions.gl_ext_framebuffer_srgb
    };

    Capabilities {
        supports_non_power_of_two,
        supports_texture_filter_anisotropic,
        max_texture_anisotropy,
        supports_depth24,
        supports_packed_depth_stencil,
        supports_depth_non_linear,
        supports_texture_max_level,
        supports_dxt1,
        supports_s3tc,
        supports_pvrtc: extensions.gl_img_texture_compression_pvrtc,
        supports_etc1: extensions.gl_oes_compressed_etc1_rgb8_texture,
        supports_atitc: extensions.gl_ati_texture_compression_atitc ||
                        extensions.gl_amd_compressed_atc_texture,
        supports_framebuffer_object_arb,
        supports_framebuffer_object_ext,
        supports_srgb,
        // TODO: report texture arrays once shaders can be authored against them
        supports_texture_arrays: false,
        supports_depth_clamp: extensions.gl_arb_depth_clamp,
        supports_vertex_textures: false,
    }
}

/// Asks the device for its anisotropy level. Must only be called when anisotropic filtering
/// is supported.
fn query_anisotropy<D: ?Sized>(device: &D) -> u32 where D: Device {
    match device.query_max_anisotropy() {
        0 => {
            warn!("anisotropic filtering is supported but the device reports a maximum level \
                   of 0, using 1 instead");
            1
        },
        level => level,
    }
}
