/*!
Test supports module.

*/

#![allow(dead_code)]

use glcaps::{Api, BackendVariant, Capabilities, DeviceSnapshot, ExtensionsList, Version};

use rand::Rng;
use rand::seq::SliceRandom;

/// All the backends that probe extensions.
pub const EXTENSION_BACKENDS: [BackendVariant; 3] = [
    BackendVariant::ModernDesktop,
    BackendVariant::EmbeddedMobile,
    BackendVariant::LegacyDesktop,
];

/// All the backends.
pub const ALL_BACKENDS: [BackendVariant; 4] = [
    BackendVariant::ModernDesktop,
    BackendVariant::EmbeddedMobile,
    BackendVariant::LegacyDesktop,
    BackendVariant::HardwareAccelerated,
];

/// Installs a logger that is captured by the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Returns a version that is plausible for the backend.
pub fn version_for(backend: BackendVariant) -> Version {
    match backend {
        BackendVariant::ModernDesktop => Version(Api::Gl, 3, 3),
        BackendVariant::EmbeddedMobile => Version(Api::GlEs, 2, 0),
        BackendVariant::LegacyDesktop => Version(Api::Gl, 2, 1),
        BackendVariant::HardwareAccelerated => Version(Api::Gl, 0, 0),
    }
}

/// Builds a device for the backend with the given extensions.
pub fn build_device(backend: BackendVariant, extensions: &[&str]) -> DeviceSnapshot {
    DeviceSnapshot::new(version_for(backend)).with_extensions(extensions.iter().cloned())
}

/// Resolves the capabilities of a device with the given extensions.
pub fn resolve(backend: BackendVariant, extensions: &[&str]) -> Capabilities {
    init_logger();
    Capabilities::resolve(backend, &build_device(backend, extensions))
}

/// Picks a random subset of the known extensions, plus a few unknown ones.
pub fn random_extensions<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    let mut extensions: Vec<&'static str> = ExtensionsList::names()
        .iter()
        .cloned()
        .filter(|_| rng.gen_bool(0.3))
        .collect();

    if rng.gen_bool(0.5) {
        extensions.push("GL_KHR_debug");
    }

    extensions.shuffle(rng);
    extensions
}
