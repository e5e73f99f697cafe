/// Application-level status codes carried inside every response envelope.
///
/// These are independent of the HTTP status of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    LoginUserUsernameOrPasswordError,
    NotLogin,
    UserNotFound,
    EmailOrUsernameExists,
    Fail,
}

impl ResponseStatus {
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::LoginUserUsernameOrPasswordError => 400,
            Self::NotLogin => 401,
            Self::UserNotFound => 404,
            Self::EmailOrUsernameExists => 409,
            Self::Fail => 500,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::LoginUserUsernameOrPasswordError => "username or password error",
            Self::NotLogin => "not login",
            Self::UserNotFound => "user not found",
            Self::EmailOrUsernameExists => "email or username exist",
            Self::Fail => "failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ResponseStatus;

    #[rstest]
    #[case(ResponseStatus::Success, 200, "success")]
    #[case(ResponseStatus::LoginUserUsernameOrPasswordError, 400, "username or password error")]
    #[case(ResponseStatus::NotLogin, 401, "not login")]
    #[case(ResponseStatus::UserNotFound, 404, "user not found")]
    #[case(ResponseStatus::EmailOrUsernameExists, 409, "email or username exist")]
    #[case(ResponseStatus::Fail, 500, "failure")]
    fn catalog_entries(#[case] status: ResponseStatus, #[case] code: u16, #[case] message: &str) {
        assert_eq!(status.code(), code);
        assert_eq!(status.message(), message);
    }
}
