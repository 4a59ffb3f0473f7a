use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};

fn main() {
    println!("cargo:rerun-if-changed=build/main.rs");

    // the bindings are only consumed by the GL device
    if env::var_os("CARGO_FEATURE_GL_DEVICE").is_none() {
        return;
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());
    let mut file = BufWriter::new(File::create(&dest.join("gl_bindings.rs")).unwrap());

    // GL 4.6 compatibility is a superset of every entry point the device touches on GL and
    // GLES alike (glGetString, glGetStringi, glGetIntegerv, glGetFloatv)
    Registry::new(Api::Gl, (4, 6), Profile::Compatibility, Fallbacks::All,
                  ["GL_EXT_texture_filter_anisotropic"])
        .write_bindings(StructGenerator, &mut file)
        .unwrap();
}
