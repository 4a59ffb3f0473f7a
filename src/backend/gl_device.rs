#![cfg(feature = "gl_device")]
/*!

A `Device` reading its answers from a current OpenGL or OpenGL ES context.

# Features

Only available if the 'gl_device' feature is enabled.

*/
use std::error::Error;
use std::ffi::CStr;
use std::fmt;
use std::os::raw::{c_char, c_void};

use log::debug;

use crate::backend::{Device, HardwareTier};
use crate::context::ExtensionSet;
use crate::gl;
use crate::version::{Api, Version, VersionParseError};

/// Error that can happen while creating a `GlDevice`.
#[derive(Debug)]
pub enum DeviceCreationError {
    /// `glGetString(GL_VERSION)` returned null or a string that isn't UTF-8.
    VersionUnavailable,

    /// The content of `GL_VERSION` couldn't be parsed.
    InvalidVersion(VersionParseError),

    /// One of the extension strings returned by the driver isn't UTF-8.
    InvalidExtensionString,
}

impl fmt::Display for DeviceCreationError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let desc = match *self {
            DeviceCreationError::VersionUnavailable =>
                "The OpenGL implementation didn't return its version",
            DeviceCreationError::InvalidVersion(_) =>
                "The OpenGL implementation returned an invalid version",
            DeviceCreationError::InvalidExtensionString =>
                "The OpenGL implementation returned an extension name that isn't UTF-8",
        };
        fmt.write_str(desc)
    }
}

impl Error for DeviceCreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DeviceCreationError::InvalidVersion(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<VersionParseError> for DeviceCreationError {
    #[inline]
    fn from(err: VersionParseError) -> DeviceCreationError {
        DeviceCreationError::InvalidVersion(err)
    }
}

/// A device backed by an OpenGL or OpenGL ES context.
///
/// The version, the extensions and the maximum texture size are read once at creation. The
/// anisotropy query is forwarded to the driver every time it is called.
pub struct GlDevice {
    gl: gl::Gl,
    version: Version,
    extensions: ExtensionSet,
    max_texture_size: u32,
    hardware_tier: HardwareTier,
}

impl GlDevice {
    /// Loads the OpenGL functions with `loader` and reads the state of the context.
    ///
    /// OpenGL has no notion of hardware tier, so `hardware_tier` is stored as-is.
    ///
    /// # Safety
    ///
    /// The OpenGL context that `loader` returns functions for must be current in this thread,
    /// now and whenever `query_max_anisotropy` is called.
    pub unsafe fn new<F>(loader: F, hardware_tier: HardwareTier)
                         -> Result<GlDevice, DeviceCreationError>
        where F: FnMut(&'static str) -> *const c_void
    {
        let gl = gl::Gl::load_with(loader);

        let version = parse_version(get_string(&gl, gl::VERSION))?;
        let extensions = get_extensions(&gl, &version)?;

        let max_texture_size = {
            let mut val: gl::types::GLint = 0;
            gl.GetIntegerv(gl::MAX_TEXTURE_SIZE, &mut val);
            val.max(0) as u32
        };

        debug!("{} context with {} extensions, max texture size {}", version,
               extensions.len(), max_texture_size);

        Ok(GlDevice {
            gl,
            version,
            extensions,
            max_texture_size,
            hardware_tier,
        })
    }

    /// Returns the version of the context.
    #[inline]
    pub fn get_version(&self) -> &Version {
        &self.version
    }

    /// Returns the extensions that the driver advertised at creation.
    #[inline]
    pub fn get_extensions(&self) -> &ExtensionSet {
        &self.extensions
    }
}

impl fmt::Debug for GlDevice {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        fmt.debug_struct("GlDevice")
           .field("version", &self.version)
           .field("extensions", &self.extensions)
           .field("max_texture_size", &self.max_texture_size)
           .field("hardware_tier", &self.hardware_tier)
           .finish()
    }
}

impl Device for GlDevice {
    #[inline]
    fn has_extension(&self, name: &str) -> bool {
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
        let mut val: gl::types::GLfloat = 0.0;
        unsafe { self.gl.GetFloatv(gl::MAX_TEXTURE_MAX_ANISOTROPY_EXT, &mut val) };
        if val.is_finite() && val > 0.0 { val as u32 } else { 0 }
    }
}

/// Calls `glGetString`. Returns `None` if the result is null.
unsafe fn get_string(gl: &gl::Gl, name: gl::types::GLenum) -> Option<&CStr> {
    let ptr = gl.GetString(name);
    if ptr.is_null() {
        return None;
    }

    Some(CStr::from_ptr(ptr as *const c_char))
}

/// Parses the content of `GL_VERSION`, which must be present and UTF-8.
fn parse_version(version: Option<&CStr>) -> Result<Version, DeviceCreationError> {
    let version = version.and_then(|v| v.to_str().ok())
                         .ok_or(DeviceCreationError::VersionUnavailable)?;
    Ok(Version::parse(version)?)
}

/// Parses the space-separated content of `GL_EXTENSIONS`. A null string means no extension.
fn parse_extensions_string(list: Option<&CStr>) -> Result<ExtensionSet, DeviceCreationError> {
    match list {
        Some(list) => list.to_str()
                          .map(ExtensionSet::from_extensions_string)
                          .map_err(|_| DeviceCreationError::InvalidExtensionString),
        None => Ok(ExtensionSet::empty()),
    }
}

/// Returns the list of all extension names supported by the OpenGL implementation.
///
/// The version must match the one of the context.
unsafe fn get_extensions(gl: &gl::Gl, version: &Version)
                         -> Result<ExtensionSet, DeviceCreationError>
{
    if (version >= &Version(Api::Gl, 3, 0) || version >= &Version(Api::GlEs, 3, 0)) &&
        gl.GetStringi.is_loaded()
    {
        let mut num_extensions: gl::types::GLint = 0;
        gl.GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);

        (0 .. num_extensions.max(0)).filter_map(|num| {
            let ext = gl.GetStringi(gl::EXTENSIONS, num as gl::types::GLuint);
            if ext.is_null() {
                return None;
            }
            Some(CStr::from_ptr(ext as *const c_char).to_str()
                                                    .map(|e| e.to_owned())
                                                    .map_err(|_| DeviceCreationError::InvalidExtensionString))
        }).collect()

    } else {
        parse_extensions_string(get_string(gl, gl::EXTENSIONS))
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::{parse_extensions_string, parse_version, DeviceCreationError};
    use crate::version::{Api, Version, VersionParseError};

    fn cstr(bytes: &[u8]) -> &CStr {
        CStr::from_bytes_with_nul(bytes).unwrap()
    }

    #[test]
    fn version_string() {
        let version = parse_version(Some(cstr(b"OpenGL ES 3.1 build 1.10\0"))).unwrap();
        assert_eq!(version, Version(Api::GlEs, 3, 1));
    }

    #[test]
    fn missing_version_string() {
        match parse_version(None) {
            Err(DeviceCreationError::VersionUnavailable) => (),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn version_string_not_utf8() {
        match parse_version(Some(cstr(b"4.6 \xff\xfe\0"))) {
            Err(DeviceCreationError::VersionUnavailable) => (),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn unparsable_version_string() {
        match parse_version(Some(cstr(b"OpenGL ES\0"))) {
            Err(DeviceCreationError::InvalidVersion(VersionParseError::MissingMinor(_))) |
            Err(DeviceCreationError::InvalidVersion(VersionParseError::InvalidNumber(_))) => (),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn extensions_string() {
        let set = parse_extensions_string(Some(cstr(b"GL_ARB_depth_clamp GL_EXT_sRGB\0")))
            .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("GL_ARB_depth_clamp"));
    }

    #[test]
    fn null_extensions_string() {
        assert!(parse_extensions_string(None).unwrap().is_empty());
    }

    #[test]
    fn extensions_string_not_utf8() {
        match parse_extensions_string(Some(cstr(b"GL_ARB_depth_clamp \xc3\x28\0"))) {
            Err(DeviceCreationError::InvalidExtensionString) => (),
            other => panic!("{:?}", other),
        }
    }
}
