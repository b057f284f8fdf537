use super::*;

// ============================================================================
// Sign-in validation
// ============================================================================

#[test]
fn sign_in_accepts_trimmed_credentials() {
    let (email, password) = validate_sign_in_input("  user@example.com ", " hunter22 ").unwrap();
    assert_eq!(email, "user@example.com");
    assert_eq!(password, "hunter22");
}

#[test]
fn sign_in_rejects_blank_email() {
    assert!(validate_sign_in_input("   ", "hunter22").is_err());
}

#[test]
fn sign_in_rejects_blank_password() {
    assert!(validate_sign_in_input("user@example.com", "").is_err());
}

// ============================================================================
// Role selection
// ============================================================================

#[test]
fn role_selection_maps_known_values() {
    assert_eq!(role_from_selection("brand"), Some(Role::Brand));
    assert_eq!(role_from_selection("creator"), Some(Role::Creator));
    assert_eq!(role_from_selection(" Brand "), Some(Role::Brand));
}

#[test]
fn role_selection_rejects_unknown_values() {
    assert_eq!(role_from_selection("admin"), None);
    assert_eq!(role_from_selection(""), None);
}

// ============================================================================
// Sign-up validation
// ============================================================================

#[test]
fn sign_up_accepts_valid_input() {
    let (email, password, role) =
        validate_sign_up_input("brand@example.com", "hunter22", "brand").unwrap();
    assert_eq!(email, "brand@example.com");
    assert_eq!(password, "hunter22");
    assert_eq!(role, Role::Brand);
}

#[test]
fn sign_up_rejects_short_password() {
    let err = validate_sign_up_input("user@example.com", "abc", "creator").unwrap_err();
    assert!(err.contains("6 characters"));
}

#[test]
fn sign_up_rejects_unknown_role() {
    assert!(validate_sign_up_input("user@example.com", "hunter22", "admin").is_err());
}
