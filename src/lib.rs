/*!
Resolves the optional features of a graphics device.

Graphics drivers differ wildly in what they support beyond the core API. Before using texture
compression, framebuffer objects, anisotropic filtering or sRGB, an application must know
whether the device it runs on supports them. glcaps answers these questions once, when the
device is initialized, and hands out the result as an immutable `Capabilities` record.

# Backends

Four families of backends are handled, see `BackendVariant`:

 - Modern desktop OpenGL (3.0 and above), legacy desktop OpenGL and OpenGL ES. Their
   capabilities are found by looking at the extensions advertised by the driver.
 - A hardware-accelerated backend that doesn't advertise extensions. Its capabilities derive
   from a coarse `HardwareTier` instead.

The family of an OpenGL context can be found from its version with
`Version::backend_variant`.

# Devices

The resolver asks its questions through the `Device` trait. If you already know the extensions
and limits of your device, describe them with a `DeviceSnapshot`:

```
use glcaps::{Api, BackendVariant, Context, DeviceSnapshot, Version};

let version = Version(Api::Gl, 3, 3);
let device = DeviceSnapshot::new(version)
    .with_extensions(vec!["GL_EXT_texture_filter_anisotropic", "GL_ARB_depth_clamp"])
    .with_max_anisotropy(16);

let context = Context::new(device, version.backend_variant());
let capabilities = context.get_capabilities();

assert!(capabilities.supports_framebuffer_object_arb);
assert!(capabilities.supports_depth_clamp);
assert_eq!(capabilities.max_texture_anisotropy, 16);
```

With the `gl_device` feature (enabled by default), `GlDevice` reads everything from the
OpenGL or OpenGL ES context that is current in the thread:

```no_run
# fn get_proc_address(_: &str) -> *const std::os::raw::c_void { std::ptr::null() }
use glcaps::{Context, GlDevice, HardwareTier};

let device = unsafe { GlDevice::new(|symbol| get_proc_address(symbol), HardwareTier::Baseline) }
    .unwrap();
println!("{} extensions advertised", device.get_extensions().len());

let backend = device.get_version().backend_variant();
let context = Context::new(device, backend);
```

*/
#![warn(missing_docs)]

pub use crate::backend::{BackendVariant, Device, DeviceSnapshot, HardwareTier};
#[cfg(feature = "gl_device")]
pub use crate::backend::{DeviceCreationError, GlDevice};
pub use crate::context::{Capabilities, Context, ExtensionSet, ExtensionsList};
pub use crate::version::{Api, Version, VersionParseError};

pub mod backend;

mod context;
mod version;

#[cfg(feature = "gl_device")]
#[allow(missing_docs, dead_code, clippy::all, unused_parens, non_upper_case_globals, non_snake_case)]
mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}
