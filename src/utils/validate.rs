use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    // 密码长度校验：至少 8 个字符
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("student_01").is_ok());
        assert!(validate_username("Ada-Lovelace").is_ok());
    }

    #[test]
    fn test_short_username() {
        assert!(validate_username("ab").is_err());
    }

    #[test]
    fn test_username_with_invalid_chars() {
        assert!(validate_username("bad user").is_err());
        assert!(validate_username("bad@user").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("correct horse").is_ok());
    }

    #[test]
    fn test_short_password() {
        assert!(validate_password("short").is_err());
    }
}
