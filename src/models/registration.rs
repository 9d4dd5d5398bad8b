use serde::Deserialize;
use std::fmt;

/// 注册表单原始输入，所有字段都可能缺失
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub invite: Option<String>,
    #[serde(default)]
    pub password0: Option<String>,
    #[serde(default)]
    pub password1: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InviteAndEmail {
    pub invite: String,
    pub email: String,
}

/// 验证通过后的规范化数据
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationData {
    pub email: String,
    pub invite: String,
    pub password: String,
}

// 密码不进入日志
impl fmt::Debug for RegistrationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationData")
            .field("email", &self.email)
            .field("invite", &self.invite)
            .finish_non_exhaustive()
    }
}
