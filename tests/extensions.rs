extern crate glcaps;

use glcaps::{Api, DeviceSnapshot, ExtensionSet, ExtensionsList, Version};

#[test]
fn legacy_extensions_string() {
    let set = ExtensionSet::from_extensions_string(
        "GL_ARB_multitexture GL_EXT_texture_sRGB  GL_ARB_depth_clamp ");

    assert_eq!(set.len(), 3);
    assert!(set.contains("GL_ARB_multitexture"));
    assert!(set.contains("GL_EXT_texture_sRGB"));
    assert!(set.contains("GL_ARB_depth_clamp"));
    assert!(!set.contains(""));
}

#[test]
fn empty_extensions_string() {
    assert!(ExtensionSet::from_extensions_string("").is_empty());
    assert!(ExtensionSet::from_extensions_string("   ").is_empty());
    assert_eq!(ExtensionSet::from_extensions_string(""), ExtensionSet::empty());
}

#[test]
fn duplicates_are_merged() {
    let set: ExtensionSet = vec!["GL_ARB_sync", "GL_ARB_sync"].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().count(), 1);
}

#[test]
fn exact_membership() {
    let set: ExtensionSet = vec!["GL_EXT_texture_compression_s3tc"].into_iter().collect();

    assert!(set.contains("GL_EXT_texture_compression_s3tc"));
    assert!(!set.contains("GL_EXT_texture_compression"));
    assert!(!set.contains("GL_EXT_TEXTURE_COMPRESSION_S3TC"));
    assert!(!set.contains("GL_EXT_texture_compression_s3tc "));
}

#[test]
fn probe_finds_known_extensions() {
    let device = DeviceSnapshot::new(Version(Api::GlEs, 2, 0))
        .with_extensions(vec!["GL_OES_depth24", "GL_AMD_compressed_ATC_texture", "GL_KHR_debug"]);

    let list = ExtensionsList::probe(&device);

    assert!(list.gl_oes_depth24);
    assert!(list.gl_amd_compressed_atc_texture);
    assert!(!list.gl_oes_packed_depth_stencil);
    assert!(!list.gl_ati_texture_compression_atitc);
}

#[test]
fn iterate_by_reference() {
    let set = ExtensionSet::from_extensions_string("GL_ARB_depth_clamp GL_EXT_sRGB");

    let mut names: Vec<&str> = Vec::new();
    for name in &set {
        names.push(name);
    }
    names.sort();

    assert_eq!(names, ["GL_ARB_depth_clamp", "GL_EXT_sRGB"]);
}

#[test]
fn device_from_extension_set() {
    let set = ExtensionSet::from_extensions_string("GL_OES_depth24 GL_EXT_sRGB");
    let device = DeviceSnapshot::new(Version(Api::GlEs, 2, 0)).with_extension_set(set.clone());

    assert_eq!(device.get_extensions(), &set);

    let list = ExtensionsList::probe(&device);
    assert!(list.gl_oes_depth24);
    assert!(list.gl_ext_srgb);
    assert!(!list.gl_oes_packed_depth_stencil);
}

#[test]
fn probe_of_empty_device() {
    let device = DeviceSnapshot::new(Version(Api::Gl, 3, 3));
    assert_eq!(ExtensionsList::probe(&device), ExtensionsList::default());
}

#[test]
fn known_names_are_unique() {
    let names = ExtensionsList::names();
    let set: ExtensionSet = names.iter().cloned().collect();

    assert_eq!(set.len(), names.len());
    assert_eq!(names.len(), 24);
}
