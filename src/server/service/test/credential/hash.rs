use super::*;

/// Tests that hashing is salted.
///
/// Expected: two digests of the same password differ and neither contains the plaintext
#[test]
fn digests_are_salted() {
    let verifier = verifier();
    let password = Password::new(STRONG_PASSWORD);

    let first = verifier.hash(&password).unwrap();
    let second = verifier.hash(&password).unwrap();

    assert_ne!(first, second);
    assert!(!first.as_str().contains(STRONG_PASSWORD));
}

/// Tests that the configured cost is recorded in the digest.
///
/// Expected: digest carries the `$04$` cost segment
#[test]
fn digest_carries_cost() {
    let verifier = verifier();
    let digest = verifier.hash(&Password::new(STRONG_PASSWORD)).unwrap();

    assert_eq!(verifier.cost(), TEST_HASH_COST);
    assert!(digest.as_str().starts_with("$2b$04$"));
}
