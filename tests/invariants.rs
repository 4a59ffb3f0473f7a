extern crate glcaps;

use glcaps::{Capabilities, HardwareTier};

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

mod support;

const ITERATIONS: usize = 500;

#[test]
fn resolution_is_deterministic() {
    support::init_logger();
    let mut rng = StdRng::seed_from_u64(0x9e3779b9);

    for _ in 0 .. ITERATIONS {
        let backend = support::ALL_BACKENDS[rng.gen_range(0 .. support::ALL_BACKENDS.len())];
        let extensions = support::random_extensions(&mut rng);
        let tier = if rng.gen_bool(0.5) { HardwareTier::Advanced } else { HardwareTier::Baseline };
        let max_texture_size: u32 = 1 << rng.gen_range(8u32 .. 15);

        let build = |exts: &[&str]| {
            support::build_device(backend, exts)
                .with_hardware_tier(tier)
                .with_max_texture_size(max_texture_size)
                .with_max_anisotropy(8)
        };

        let first = Capabilities::resolve(backend, &build(&extensions));

        // the order of the extensions doesn't matter
        let mut reversed = extensions.clone();
        reversed.reverse();
        let second = Capabilities::resolve(backend, &build(&reversed));

        assert_eq!(first, second, "{:?} {:?}", backend, extensions);
    }
}

#[test]
fn s3tc_implies_dxt1() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0 .. ITERATIONS {
        for &backend in support::ALL_BACKENDS.iter() {
            let extensions = support::random_extensions(&mut rng);
            let caps = support::resolve(backend, &extensions);

            if caps.supports_s3tc {
                assert!(caps.supports_dxt1, "{:?} {:?}", backend, extensions);
            }
        }
    }
}

#[test]
fn anisotropy_level_is_zero_iff_unsupported() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0 .. ITERATIONS {
        for &backend in support::ALL_BACKENDS.iter() {
            let extensions = support::random_extensions(&mut rng);
            let level = rng.gen_range(0 .. 17);
            let device = support::build_device(backend, &extensions).with_max_anisotropy(level);
            let caps = Capabilities::resolve(backend, &device);

            assert_eq!(caps.max_texture_anisotropy == 0,
                       !caps.supports_texture_filter_anisotropic,
                       "{:?} {:?} {}", backend, extensions, level);
        }
    }
}

#[test]
fn unknown_extensions_change_nothing() {
    for &backend in support::ALL_BACKENDS.iter() {
        let plain = support::resolve(backend, &[]);
        let noisy = support::resolve(backend, &["GL_KHR_debug", "GL_ARB_sync", "", " "]);
        assert_eq!(plain, noisy, "{:?}", backend);
    }
}
