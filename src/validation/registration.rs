use tracing::debug;

use super::combinator::Validation;
use super::error::ValidationError;
use crate::models::{InviteAndEmail, RegistrationData, RegistrationForm};

pub const MAX_INVITE_LENGTH: usize = 320;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// 去除首尾空白（包括 U+FEFF），空字符串视为缺失
fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}'))
        .filter(|s| !s.is_empty())
}

/// 同时验证邀请码和邮箱
///
/// 两者必须同时提供。内部检查按顺序执行，第一个失败即返回。
/// 邀请码长度按 Unicode 标量值计数：BMP 以外的字符计为 1，而不是两个 UTF-16 单元。
pub fn validate_invite_and_email(
    invite: Option<&str>,
    email: Option<&str>,
) -> Validation<ValidationError, InviteAndEmail> {
    let pair = present(invite).zip(present(email));

    let out = match pair {
        Some((invite, email)) => Validation::success(InviteAndEmail {
            invite: invite.to_string(),
            email: email.to_string(),
        }),
        None => Validation::fail(ValidationError::of(
            "registration",
            "both invite and email are required",
        )),
    };

    out.flat_map(|InviteAndEmail { invite, email }| {
        if invite.chars().count() > MAX_INVITE_LENGTH {
            return Validation::fail(ValidationError::of(
                "invite",
                format!("invite must be less than {}", MAX_INVITE_LENGTH),
            ));
        }

        if !email.contains('@') {
            return Validation::fail(ValidationError::of("email", "a valid email is required"));
        }

        Validation::success(InviteAndEmail { invite, email })
    })
}

/// 验证两次输入的密码一致且长度足够
///
/// 长度同样按 Unicode 标量值计数。
pub fn validate_password(
    password0: Option<&str>,
    password1: Option<&str>,
) -> Validation<ValidationError, String> {
    let matched = present(password0)
        .and_then(|p0| present(password1).filter(|p1| *p1 == p0))
        .map(str::to_string);

    let out = match matched {
        Some(password) => Validation::success(password),
        None => Validation::fail(ValidationError::of("password", "password must match")),
    };

    out.flat_map(|password| {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Validation::fail(ValidationError::of(
                "password",
                format!("password must exceed {} characters", MIN_PASSWORD_LENGTH),
            ));
        }

        Validation::success(password)
    })
}

/// 验证注册表单
///
/// 两个验证器总是都会执行；都失败时错误会合并，而不是只返回第一个。
pub fn validate(raw: &RegistrationForm) -> Validation<ValidationError, RegistrationData> {
    let invite_and_email = validate_invite_and_email(raw.invite.as_deref(), raw.email.as_deref());
    let password = validate_password(raw.password0.as_deref(), raw.password1.as_deref());

    let build = password.map(|password| {
        move |InviteAndEmail { invite, email }: InviteAndEmail| RegistrationData {
            email,
            invite,
            password,
        }
    });

    let output = invite_and_email.ap(build);

    if let Some(errors) = output.fail_value() {
        let fields: Vec<&str> = errors.keys().collect();
        debug!(fields = ?fields, "Registration form rejected");
    }

    output
}

/// `validate` 的异步版本，结果与同步版本完全一致
pub async fn validate_async(raw: &RegistrationForm) -> Validation<ValidationError, RegistrationData> {
    validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_form() -> RegistrationForm {
        RegistrationForm {
            email: Some("john.smith@example.com".to_string()),
            invite: Some("invitecode".to_string()),
            password0: Some("goodpassword".to_string()),
            password1: Some("goodpassword".to_string()),
        }
    }

    #[test]
    fn test_invite_and_email_requires_both() {
        for (invite, email) in [
            (None, Some("a@b.com")),
            (Some("code"), None),
            (Some("   "), Some("a@b.com")),
            (Some("code"), Some("")),
            (None, None),
        ] {
            let out = validate_invite_and_email(invite, email);
            assert_eq!(
                out.fail_value().and_then(|e| e.get("registration")),
                Some("both invite and email are required")
            );
        }
    }

    #[test]
    fn test_invite_length_checked_before_email() {
        let long = "a".repeat(MAX_INVITE_LENGTH + 1);
        let out = validate_invite_and_email(Some(&long), Some("no-at-sign"));
        let errors = out.fail_value().unwrap();
        assert_eq!(errors.get("invite"), Some("invite must be less than 320"));
        assert!(!errors.contains("email"));

        let exact = "a".repeat(MAX_INVITE_LENGTH);
        assert!(validate_invite_and_email(Some(&exact), Some("a@b.com")).is_success());
    }

    #[test]
    fn test_invite_and_email_are_trimmed() {
        let out = validate_invite_and_email(Some("  code "), Some(" a@b.com\n"));
        assert_eq!(
            out,
            Validation::success(InviteAndEmail {
                invite: "code".to_string(),
                email: "a@b.com".to_string(),
            })
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let out = validate_invite_and_email(Some("\u{FEFF}"), Some("a@b.com"));
        assert!(out.fail_value().unwrap().contains("registration"));

        let out = validate_invite_and_email(Some("\u{FEFF}code "), Some("a@b.com"));
        assert_eq!(out.success_value().map(|v| v.invite.as_str()), Some("code"));

        let out = validate_password(Some("\u{FEFF}"), Some("\u{FEFF}"));
        assert_eq!(
            out.fail_value().and_then(|e| e.get("password")),
            Some("password must match")
        );
    }

    #[test]
    fn test_invite_length_counts_characters() {
        let emoji = "\u{1F600}".repeat(MAX_INVITE_LENGTH);
        assert!(validate_invite_and_email(Some(&emoji), Some("a@b.com")).is_success());

        let emoji = "\u{1F600}".repeat(MAX_INVITE_LENGTH + 1);
        assert!(validate_invite_and_email(Some(&emoji), Some("a@b.com"))
            .fail_value()
            .unwrap()
            .contains("invite"));
    }

    #[test]
    fn test_email_needs_at_sign() {
        let out = validate_invite_and_email(Some("code"), Some("john.smithatexample.com"));
        assert_eq!(
            out.fail_value().and_then(|e| e.get("email")),
            Some("a valid email is required")
        );
    }

    #[test]
    fn test_password_presence_and_mismatch_share_message() {
        for (p0, p1) in [
            (None, Some("goodpassword")),
            (Some("goodpassword"), None),
            (Some(" "), Some(" ")),
            (Some("goodpassword"), Some("goodpassworx")),
        ] {
            let out = validate_password(p0, p1);
            assert_eq!(
                out.fail_value().and_then(|e| e.get("password")),
                Some("password must match")
            );
        }
    }

    #[test]
    fn test_password_length_boundary() {
        let out = validate_password(Some("short12"), Some("short12"));
        assert_eq!(
            out.fail_value().and_then(|e| e.get("password")),
            Some("password must exceed 8 characters")
        );

        assert_eq!(
            validate_password(Some(" eight888 "), Some("eight888")),
            Validation::success("eight888".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_good_data() {
        let out = validate(&good_form());
        assert_eq!(
            out,
            Validation::success(RegistrationData {
                email: "john.smith@example.com".to_string(),
                invite: "invitecode".to_string(),
                password: "goodpassword".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_accumulates_errors() {
        let form = RegistrationForm {
            invite: Some("a".repeat(999)),
            password0: Some("short1".to_string()),
            ..good_form()
        };

        let errors = validate(&form).into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("invite").unwrap().contains("less than"));
        assert_eq!(errors.get("password"), Some("password must match"));
    }

    #[test]
    fn test_validate_single_branch_failure() {
        let form = RegistrationForm {
            password1: Some("goodpassworx".to_string()),
            ..good_form()
        };
        let errors = validate(&form).into_result().unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["password"]);
    }

    #[test]
    fn test_validate_is_repeatable() {
        let form = RegistrationForm {
            email: None,
            ..good_form()
        };
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn test_validate_async_matches_sync() {
        let forms = [
            good_form(),
            RegistrationForm::default(),
            RegistrationForm {
                email: Some("nope".to_string()),
                ..good_form()
            },
        ];
        for form in forms {
            assert_eq!(tokio_test::block_on(validate_async(&form)), validate(&form));
        }
    }
}
