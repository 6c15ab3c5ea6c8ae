// tests/nevra_properties.rs

//! Property tests for NEVRA decomposition and reconstruction.

use proptest::prelude::*;
use repo_ingest::nevra::{Nevra, construct, raw_version};

/// Name made of one or more hyphen-joined words
fn arb_name() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-zA-Z][a-zA-Z0-9_+.]{0,8}", 1..5).prop_map(|parts| parts.join("-"))
}

/// Loose identifier text, colons and hyphens included
fn arb_loose_identifier() -> impl Strategy<Value = String> {
    "[0-9a-z:+_-]{1,12}-[0-9:.a-z]{1,6}-[0-9a-z.:]{1,6}\\.[a-z_]{1,6}"
}

fn arb_version() -> impl Strategy<Value = String> {
    "[0-9][0-9a-z.~^+]{0,10}"
}

fn arb_release() -> impl Strategy<Value = String> {
    "[0-9][0-9a-z._]{0,10}"
}

fn arb_arch() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("x86_64".to_string()),
        Just("aarch64".to_string()),
        Just("noarch".to_string()),
        Just("src".to_string()),
        "[a-z][a-z0-9_]{0,7}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: decomposition recovers every field, whatever hyphens the name has
    #[test]
    fn prop_decompose_recovers_fields(
        name in arb_name(),
        epoch in proptest::option::of(0u64..100),
        version in arb_version(),
        release in arb_release(),
        arch in arb_arch(),
    ) {
        let identifier = construct(Some(&name), epoch, &version, Some(&release), Some(&arch));
        let nevra = Nevra::parse(&identifier).unwrap();

        prop_assert_eq!(&nevra.name, &name);
        prop_assert_eq!(nevra.epoch, epoch);
        prop_assert_eq!(&nevra.version, &version);
        prop_assert_eq!(&nevra.release, &release);
        prop_assert_eq!(&nevra.arch, &arch);
        prop_assert_eq!(nevra.raw_version(), raw_version(epoch, &version, Some(&release)));
    }

    /// Property: re-serializing a decomposed identifier parses to the same tuple
    #[test]
    fn prop_reconstruct_roundtrip(
        name in arb_name(),
        epoch in proptest::option::of(0u64..100),
        leading_epoch in any::<bool>(),
        version in arb_version(),
        release in arb_release(),
        arch in arb_arch(),
    ) {
        let identifier = match (epoch, leading_epoch) {
            (Some(e), true) => format!("{}:{}-{}-{}.{}", e, name, version, release, arch),
            _ => construct(Some(&name), epoch, &version, Some(&release), Some(&arch)),
        };

        let first = Nevra::parse(&identifier).unwrap();
        let second = Nevra::parse(&first.to_string()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: whatever decomposes successfully re-serializes to the same tuple
    #[test]
    fn prop_accepted_identifiers_roundtrip(identifier in arb_loose_identifier()) {
        if let Ok(first) = Nevra::parse(&identifier) {
            prop_assert!(!first.name.contains(':'), "name {:?} from {:?}", first.name, identifier);
            let second = Nevra::parse(&first.to_string()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
