use allinone_core::{
    AuthApi, Credentials, HttpError, HttpResult, ProfileUpdate, SessionError, SessionService,
    SignupRequest, User,
};
use std::cell::RefCell;

fn sample_user() -> User {
    User {
        user_name: "ada".to_string(),
        user_email: "ada@example.com".to_string(),
        user_first_name: "Ada".to_string(),
        user_last_name: "Lovelace".to_string(),
    }
}

/// Scripted in-memory auth API.
#[derive(Default)]
struct FakeAuth {
    fail_login: bool,
    fail_signup: bool,
    fail_logout: bool,
    fail_details: bool,
    fail_update: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeAuth {
    fn reject(&self, call: &str) -> HttpResult<()> {
        Err(HttpError::Api {
            status: 401,
            body: format!("{call} rejected"),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AuthApi for &FakeAuth {
    fn login(&self, credentials: &Credentials) -> HttpResult<()> {
        self.calls
            .borrow_mut()
            .push(format!("login:{}", credentials.user_name));
        if self.fail_login {
            return self.reject("login");
        }
        Ok(())
    }

    fn signup(&self, request: &SignupRequest) -> HttpResult<()> {
        self.calls
            .borrow_mut()
            .push(format!("signup:{}", request.user_name));
        if self.fail_signup {
            return self.reject("signup");
        }
        Ok(())
    }

    fn logout(&self) -> HttpResult<()> {
        self.calls.borrow_mut().push("logout".to_string());
        if self.fail_logout {
            return self.reject("logout");
        }
        Ok(())
    }

    fn check(&self) -> HttpResult<bool> {
        self.calls.borrow_mut().push("check".to_string());
        Ok(true)
    }

    fn user_details(&self) -> HttpResult<User> {
        self.calls.borrow_mut().push("details".to_string());
        if self.fail_details {
            return Err(HttpError::Api {
                status: 401,
                body: "details rejected".to_string(),
            });
        }
        Ok(sample_user())
    }

    fn update_profile(&self, update: &ProfileUpdate) -> HttpResult<()> {
        self.calls
            .borrow_mut()
            .push(format!("update:{}", update.user_name));
        if self.fail_update {
            return self.reject("update");
        }
        Ok(())
    }
}

#[test]
fn login_fetches_details_and_stores_snapshot() {
    let auth = FakeAuth::default();
    let mut session = SessionService::new(&auth);

    session.login("ada", "secret").unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().user_email, "ada@example.com");
    assert_eq!(auth.calls(), vec!["login:ada", "details"]);
    assert!(session.last_error().is_none());
}

#[test]
fn failed_login_records_error_and_skips_details() {
    let auth = FakeAuth {
        fail_login: true,
        ..FakeAuth::default()
    };
    let mut session = SessionService::new(&auth);

    let err = session.login("ada", "wrong").unwrap_err();

    assert!(matches!(err, SessionError::LoginFailed(_)));
    assert!(!session.is_authenticated());
    assert_eq!(auth.calls(), vec!["login:ada"]);
    let message = session.last_error().unwrap();
    assert!(message.contains("login failed"));
    assert!(message.contains("login rejected"));
}

#[test]
fn login_with_failing_details_fetch_surfaces_error() {
    let auth = FakeAuth {
        fail_details: true,
        ..FakeAuth::default()
    };
    let mut session = SessionService::new(&auth);

    let err = session.login("ada", "secret").unwrap_err();

    assert!(matches!(err, SessionError::DetailsFetchFailed(_)));
    assert!(!session.is_authenticated());
}

#[test]
fn signup_establishes_no_session() {
    let auth = FakeAuth::default();
    let mut session = SessionService::new(&auth);

    session.signup("grace", "grace@example.com", "secret").unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(auth.calls(), vec!["signup:grace"]);
}

#[test]
fn failed_signup_records_error() {
    let auth = FakeAuth {
        fail_signup: true,
        ..FakeAuth::default()
    };
    let mut session = SessionService::new(&auth);

    let err = session.signup("grace", "grace@example.com", "x").unwrap_err();

    assert!(matches!(err, SessionError::SignupFailed(_)));
    assert!(session.last_error().unwrap().contains("signup failed"));
}

#[test]
fn logout_clears_snapshot_only_on_success() {
    let auth = FakeAuth::default();
    let mut session = SessionService::new(&auth);
    session.login("ada", "secret").unwrap();

    session.logout().unwrap();
    assert!(!session.is_authenticated());

    let failing = FakeAuth {
        fail_logout: true,
        ..FakeAuth::default()
    };
    let mut session = SessionService::new(&failing);
    session.login("ada", "secret").unwrap();

    let err = session.logout().unwrap_err();
    assert!(matches!(err, SessionError::LogoutFailed(_)));
    assert!(session.is_authenticated());
}

#[test]
fn profile_update_without_changes_is_rejected_locally() {
    let auth = FakeAuth::default();
    let mut session = SessionService::new(&auth);
    session.login("ada", "secret").unwrap();
    let calls_before = auth.calls().len();

    let unchanged = ProfileUpdate {
        user_name: "ada".to_string(),
        user_first_name: "Ada".to_string(),
        user_last_name: "Lovelace".to_string(),
        user_email: "ada@example.com".to_string(),
    };
    let err = session.update_profile(&unchanged).unwrap_err();

    assert!(matches!(err, SessionError::NoProfileChanges));
    assert_eq!(session.last_error(), Some("no changes detected"));
    assert_eq!(auth.calls().len(), calls_before);
}

#[test]
fn profile_update_with_changes_refetches_details() {
    let auth = FakeAuth::default();
    let mut session = SessionService::new(&auth);
    session.login("ada", "secret").unwrap();

    let changed = ProfileUpdate {
        user_name: "ada".to_string(),
        user_first_name: "Augusta".to_string(),
        user_last_name: "Lovelace".to_string(),
        user_email: "ada@example.com".to_string(),
    };
    session.update_profile(&changed).unwrap();

    assert_eq!(
        auth.calls(),
        vec!["login:ada", "details", "update:ada", "details"]
    );
}

#[test]
fn profile_update_without_snapshot_is_sent_as_is() {
    let auth = FakeAuth::default();
    let mut session = SessionService::new(&auth);

    let update = ProfileUpdate {
        user_name: "ada".to_string(),
        user_first_name: "Ada".to_string(),
        user_last_name: "Lovelace".to_string(),
        user_email: "ada@example.com".to_string(),
    };
    session.update_profile(&update).unwrap();

    assert_eq!(auth.calls(), vec!["update:ada", "details"]);
}
