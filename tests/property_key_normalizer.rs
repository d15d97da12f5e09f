use gocd_s3_fetch::infrastructure::environment::keys::{normalize_identifier, PackageKeys};
use proptest::prelude::*;

proptest! {
    /// Property: normalization is idempotent
    ///
    /// A normalized identifier is already in canonical form, so applying
    /// the normalizer again must be a no-op.
    #[test]
    fn prop_normalize_is_idempotent(raw in ".*") {
        let once = normalize_identifier(&raw);
        let twice = normalize_identifier(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: normalization preserves character length
    ///
    /// Every input character maps to exactly one output character, so the
    /// char counts must match for any input, including empty.
    #[test]
    fn prop_normalize_preserves_char_length(raw in ".*") {
        let normalized = normalize_identifier(&raw);
        prop_assert_eq!(normalized.chars().count(), raw.chars().count());
    }

    /// Property: normalized output stays inside the env-key alphabet
    #[test]
    fn prop_normalize_output_alphabet(raw in ".*") {
        let normalized = normalize_identifier(&raw);
        prop_assert!(
            normalized
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
            "unexpected character in {:?}",
            normalized
        );
    }

    /// Property: derived dynamic keys share one normalized stem and only
    /// differ in their fixed suffixes.
    #[test]
    fn prop_package_keys_share_a_stem(repo in ".{0,40}", package in ".{0,40}") {
        let keys = PackageKeys::for_material(&repo, &package);
        let stem = format!(
            "GO_PACKAGE_{}_{}",
            normalize_identifier(&repo),
            normalize_identifier(&package)
        );
        prop_assert_eq!(&keys.label, &format!("{stem}_LABEL"));
        prop_assert_eq!(&keys.pipeline_name, &format!("{stem}_PIPELINE_NAME"));
        prop_assert_eq!(&keys.stage_name, &format!("{stem}_STAGE_NAME"));
        prop_assert_eq!(&keys.job_name, &format!("{stem}_JOB_NAME"));
    }
}
