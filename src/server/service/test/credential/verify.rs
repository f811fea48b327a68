use super::*;

/// Tests verifying the password a digest was made from.
///
/// Expected: true
#[test]
fn accepts_matching_password() {
    let verifier = verifier();
    let password = Password::new(STRONG_PASSWORD);
    let digest = verifier.hash(&password).unwrap();

    assert!(verifier.verify(&password, &digest));
}

/// Tests near-miss passwords.
///
/// Expected: false for a trailing space and for a case change
#[test]
fn rejects_near_misses() {
    let verifier = verifier();
    let digest = verifier.hash(&Password::new(STRONG_PASSWORD)).unwrap();

    let trailing = Password::new(format!("{} ", STRONG_PASSWORD));
    let upper = Password::new(STRONG_PASSWORD.to_uppercase());

    assert!(!verifier.verify(&trailing, &digest));
    assert!(!verifier.verify(&upper, &digest));
}

/// Tests a stored value that is not a bcrypt digest.
///
/// Expected: false, not an error
#[test]
fn unparseable_digest_never_matches() {
    let verifier = verifier();

    assert!(!verifier.verify(&Password::new(STRONG_PASSWORD), &Digest::new("plaintext")));
    assert!(!verifier.verify(&Password::new("plaintext"), &Digest::new("plaintext")));
}
