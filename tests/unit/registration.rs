// Unit tests focus on the public validation entry points

use signup_backend::models::{RegistrationData, RegistrationForm};
use signup_backend::validation::{Validation, validate};

fn good_form() -> RegistrationForm {
    RegistrationForm {
        email: Some("john.smith@example.com".to_string()),
        invite: Some("invitecode".to_string()),
        password0: Some("goodpassword".to_string()),
        password1: Some("goodpassword".to_string()),
    }
}

#[test]
fn validate_accepts_valid_data() {
    let result = validate(&good_form());
    assert!(result.is_success());

    let data = result.success_value().unwrap();
    assert_eq!(data.email, "john.smith@example.com");
    assert_eq!(data.invite, "invitecode");
    assert_eq!(data.password, "goodpassword");
}

#[test]
fn validate_rejects_empty_email_and_invite() {
    for form in [
        RegistrationForm { email: Some("  ".to_string()), ..good_form() },
        RegistrationForm { invite: None, ..good_form() },
    ] {
        let output = validate(&form);
        assert!(output.is_fail());
        assert!(output.fail_value().unwrap().contains("registration"));
    }
}

#[test]
fn validate_rejects_invalid_email() {
    let form = RegistrationForm {
        email: Some("john.smithatexample.com".to_string()),
        ..good_form()
    };
    let errors = validate(&form).into_result().unwrap_err();
    assert!(errors.get("email").unwrap().contains("valid email"));
}

#[test]
fn validate_rejects_too_long_invite() {
    let form = RegistrationForm {
        invite: Some("a".repeat(999)),
        ..good_form()
    };
    let errors = validate(&form).into_result().unwrap_err();
    assert!(errors.get("invite").unwrap().contains("less than"));
}

#[test]
fn validate_accumulates_error_messages() {
    let form = RegistrationForm {
        invite: Some("a".repeat(999)),
        password0: Some("short1".to_string()),
        ..good_form()
    };

    let rendered = validate(&form).cata(
        |errors| serde_json::to_value(&errors).unwrap(),
        |_| serde_json::Value::Null,
    );
    assert!(!rendered["invite"].as_str().unwrap().is_empty());
    assert!(!rendered["password"].as_str().unwrap().is_empty());
}

#[test]
fn validate_short_matching_password() {
    let form = RegistrationForm {
        password0: Some("shorty".to_string()),
        password1: Some("shorty".to_string()),
        ..good_form()
    };
    assert_eq!(
        validate(&form).fail_value().and_then(|e| e.get("password")),
        Some("password must exceed 8 characters")
    );
}

#[test]
fn form_deserializes_with_missing_keys() {
    let form: RegistrationForm = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(form.invite, None);
    assert!(matches!(
        validate(&form),
        Validation::Failure(_)
    ));

    let ok: Validation<_, RegistrationData> = validate(&good_form());
    assert_eq!(ok, validate(&good_form()));
}
