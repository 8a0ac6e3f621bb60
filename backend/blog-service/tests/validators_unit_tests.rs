/// Unit tests for blog-service input validators
///
/// This test module covers:
/// - Email format validation
/// - Username format validation
/// - Password strength requirements
/// - Post title/content length rules
/// - Edge cases and boundary conditions
use blog_service::validators::{
    validate_email, validate_password, validate_post_content, validate_post_title,
    validate_username,
};

// ============================================================================
// Email Validation Tests
// ============================================================================

#[test]
fn test_valid_email_formats() {
    assert!(validate_email("user@example.com"));
    assert!(validate_email("test.user@example.com"));
    assert!(validate_email("user+tag@example.co.uk"));
    assert!(validate_email("user_name@sub.domain.com"));
    assert!(validate_email("test123@example.com"));
}

#[test]
fn test_invalid_email_missing_at() {
    assert!(!validate_email("userexample.com"));
}

#[test]
fn test_invalid_email_missing_domain() {
    assert!(!validate_email("user@"));
}

#[test]
fn test_invalid_email_missing_local_part() {
    assert!(!validate_email("@example.com"));
}

#[test]
fn test_invalid_email_empty_string() {
    assert!(!validate_email(""));
}

#[test]
fn test_invalid_email_spaces() {
    assert!(!validate_email("user @example.com"));
    assert!(!validate_email("user@ example.com"));
}

#[test]
fn test_invalid_email_exceeds_max_length() {
    let too_long_email = format!("{}@example.com", "a".repeat(250));
    assert!(!validate_email(&too_long_email));
}

// ============================================================================
// Username Validation Tests
// ============================================================================

#[test]
fn test_valid_username_formats() {
    assert!(validate_username("abc"));
    assert!(validate_username("john_doe"));
    assert!(validate_username("user-123"));
    assert!(validate_username("User123"));
}

#[test]
fn test_username_boundary_lengths() {
    assert!(!validate_username("ab"));
    assert!(validate_username("abc"));
    assert!(validate_username(&"a".repeat(32)));
    assert!(!validate_username(&"a".repeat(33)));
}

#[test]
fn test_username_must_start_alphanumeric() {
    assert!(!validate_username("_username"));
    assert!(!validate_username("-username"));
    assert!(validate_username("username_"));
    assert!(validate_username("username-"));
}

#[test]
fn test_username_rejects_invalid_characters() {
    assert!(!validate_username("user@name"));
    assert!(!validate_username("user.name"));
    assert!(!validate_username("user name"));
    assert!(!validate_username(""));
}

// ============================================================================
// Password Validation Tests
// ============================================================================

#[test]
fn test_valid_passwords() {
    assert!(validate_password("SecurePass123!"));
    assert!(validate_password("MyP@ssw0rd"));
    assert!(validate_password("Tr1cky-Passphrase"));
}

#[test]
fn test_password_minimum_length() {
    assert!(!validate_password("Aa1!"));
    assert!(!validate_password("Aa1!Aa1"));
    assert!(validate_password("Aa1!Aa1!"));
}

#[test]
fn test_password_requires_each_character_class() {
    assert!(!validate_password("secure@pass123")); // no uppercase
    assert!(!validate_password("SECURE@PASS123")); // no lowercase
    assert!(!validate_password("SecurePass!")); // no digit
    assert!(!validate_password("SecurePass123")); // no special char
}

// ============================================================================
// Post Title/Content Tests
// ============================================================================

#[test]
fn test_post_title_minimum_length() {
    assert!(!validate_post_title("Hi"));
    assert!(!validate_post_title("Hull"));
    assert!(validate_post_title("Hello"));
    assert!(validate_post_title("Hello World"));
}

#[test]
fn test_post_title_trims_whitespace() {
    assert!(!validate_post_title("  Hi  "));
    assert!(!validate_post_title("      "));
    assert!(validate_post_title("  Hello  "));
}

#[test]
fn test_post_content_minimum_length() {
    assert!(!validate_post_content("short"));
    assert!(!validate_post_content("123456789"));
    assert!(validate_post_content("1234567890"));
    assert!(validate_post_content("This is long enough content."));
}

#[test]
fn test_post_content_trims_whitespace() {
    assert!(!validate_post_content("   123456789   "));
    assert!(validate_post_content("   1234567890   "));
}
