use log::debug;

use crate::backend::{BackendVariant, Device};

pub use self::capabilities::Capabilities;
pub use self::extensions::{ExtensionSet, ExtensionsList};

mod capabilities;
mod extensions;

/// Owns a device alongside the capabilities that were resolved for it.
///
/// The capabilities are resolved exactly once, in `Context::new`, and can't be modified or
/// resolved again for the lifetime of the context.
#[derive(Debug)]
pub struct Context<D> where D: Device {
    device: D,
    backend: BackendVariant,
    capabilities: Capabilities,
}

impl<D> Context<D> where D: Device {
    /// Resolves the capabilities of `device` and takes ownership of it.
    pub fn new(device: D, backend: BackendVariant) -> Context<D> {
        let capabilities = Capabilities::resolve(backend, &device);
        debug!("context created for the {:?} backend", backend);

        Context {
            device,
            backend,
            capabilities,
        }
    }

    /// Returns the capabilities of the device.
    #[inline]
    pub fn get_capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the backend the capabilities were resolved for.
    #[inline]
    pub fn get_backend(&self) -> BackendVariant {
        self.backend
    }

    /// Returns the device.
    #[inline]
    pub fn get_device(&self) -> &D {
        &self.device
    }

    /// Destroys the context and returns the device. The capabilities are discarded.
    #[inline]
    pub fn into_device(self) -> D {
        self.device
    }
}
