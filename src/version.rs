use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use crate::backend::BackendVariant;

/// Describes a version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Version(pub Api, pub u8, pub u8);

/// Describes the corresponding API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Api {
    /// OpenGL.
    Gl,
    /// OpenGL ES.
    GlEs,
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        if self.0 != other.0 {
            return None;
        }

        match self.1.cmp(&other.1) {
            Ordering::Equal => Some(self.2.cmp(&other.2)),
            a => Some(a)
        }
    }
}

/// Error that can happen when parsing a `GL_VERSION` string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionParseError {
    /// The string doesn't contain any version number.
    Empty,

    /// The version number has no minor component.
    MissingMinor(String),

    /// One of the components is not a number that fits in a `u8`.
    InvalidNumber(String),
}

impl fmt::Display for VersionParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            VersionParseError::Empty => write!(fmt, "The version string is empty"),
            VersionParseError::MissingMinor(ref v) =>
                write!(fmt, "The version `{}` has no minor component", v),
            VersionParseError::InvalidNumber(ref v) =>
                write!(fmt, "The version `{}` contains a non-numeric component", v),
        }
    }
}

impl Error for VersionParseError {}

impl Version {
    /// Parses the content of `glGetString(GL_VERSION)`.
    ///
    /// The string is `<major>.<minor>[.<release>]` optionally followed by a space and
    /// vendor-specific information. OpenGL ES implementations prefix it with `OpenGL ES `
    /// (or `OpenGL ES-CM `/`OpenGL ES-CL ` for the 1.x profiles).
    pub fn parse(version: &str) -> Result<Version, VersionParseError> {
        let (version, api) = if let Some(rest) = version.strip_prefix("OpenGL ES-CM ") {
            (rest, Api::GlEs)
        } else if let Some(rest) = version.strip_prefix("OpenGL ES-CL ") {
            (rest, Api::GlEs)
        } else if let Some(rest) = version.strip_prefix("OpenGL ES ") {
            (rest, Api::GlEs)
        } else {
            (version, Api::Gl)
        };

        let version = version.split_whitespace().next().ok_or(VersionParseError::Empty)?;

        let mut iter = version.split('.');
        let major = iter.next().unwrap_or("");
        let minor = iter.next()
                        .ok_or_else(|| VersionParseError::MissingMinor(version.to_owned()))?;

        let invalid = || VersionParseError::InvalidNumber(version.to_owned());
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;

        Ok(Version(api, major, minor))
    }

    /// Returns the backend family that a context of this version belongs to.
    ///
    /// The hardware-accelerated backend doesn't report a GL version and is never returned.
    #[inline]
    pub fn backend_variant(&self) -> BackendVariant {
        match *self {
            Version(Api::GlEs, _, _) => BackendVariant::EmbeddedMobile,
            Version(Api::Gl, major, _) if major >= 3 => BackendVariant::ModernDesktop,
            Version(Api::Gl, _, _) => BackendVariant::LegacyDesktop,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.0 {
            Api::Gl => write!(fmt, "OpenGL {}.{}", self.1, self.2),
            Api::GlEs => write!(fmt, "OpenGL ES {}.{}", self.1, self.2),
        }
    }
}
