//! Credential acquisition for the seeding workflow.
//!
//! A static API token is probed first; when the write probe reports HTTP 405
//! the token claims full access but lacks configured permissions, so the
//! authenticator discards it and falls back to admin login. The login fallback
//! walks a fixed candidate list because different CMS versions expose
//! different endpoint/payload shapes.
use crate::config::{AdminLogin, Credentials, ENV_ADMIN_EMAIL, ENV_ADMIN_PASSWORD};
use crate::http::Api;
use anyhow::{anyhow, Context, Result};
use serde_json::{json, Value};

/// Read endpoint probed to confirm the server is up; 404 means "server up,
/// content absent" and still counts as success.
const READ_PROBE_PATH: &str = "/api/categories?pagination[pageSize]=1";

/// Throwaway write probe target. The empty `data` object draws a validation
/// error from a writable token and HTTP 405 from one without permissions.
const WRITE_PROBE_PATH: &str = "/api/categories";

/// Authenticator states, traced as the machine advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthState {
    NoCredential,
    TryingApiToken,
    TokenValid,
    TryingAdminLogin,
    LoggedIn,
    Failed,
}

fn trace_state(state: AuthState) {
    tracing::debug!(state = ?state, "authenticator state");
}

/// How the active session credential was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    ApiToken,
    AdminLogin { endpoint: &'static str },
}

/// The active credential, held in memory for the process duration.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    method: AuthMethod,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn method(&self) -> &AuthMethod {
        &self.method
    }

    pub fn describe(&self) -> String {
        match &self.method {
            AuthMethod::ApiToken => "static API token".to_string(),
            AuthMethod::AdminLogin { endpoint } => format!("admin session via {endpoint}"),
        }
    }
}

enum TokenProbe {
    Valid,
    LacksWriteAccess,
}

struct LoginCandidate {
    endpoint: &'static str,
    payload: fn(&AdminLogin) -> Value,
}

fn email_password(admin: &AdminLogin) -> Value {
    json!({"email": admin.email, "password": admin.password})
}

fn identifier_password(admin: &AdminLogin) -> Value {
    json!({"identifier": admin.email, "password": admin.password})
}

/// Login fallbacks in the order they are tried.
const LOGIN_CANDIDATES: &[LoginCandidate] = &[
    LoginCandidate {
        endpoint: "/admin/login",
        payload: email_password,
    },
    LoginCandidate {
        endpoint: "/admin/auth/login",
        payload: email_password,
    },
    LoginCandidate {
        endpoint: "/api/auth/local",
        payload: identifier_password,
    },
];

/// Acquire a session credential, or fail with remediation instructions.
pub fn authenticate(api: &dyn Api, credentials: &Credentials) -> Result<Session> {
    trace_state(AuthState::NoCredential);
    if let Err(err) = credentials.ensure_present() {
        trace_state(AuthState::Failed);
        return Err(err);
    }

    if let Some(token) = credentials.api_token.as_deref() {
        trace_state(AuthState::TryingApiToken);
        match probe_api_token(api, token)? {
            TokenProbe::Valid => {
                trace_state(AuthState::TokenValid);
                return Ok(Session {
                    token: token.to_string(),
                    method: AuthMethod::ApiToken,
                });
            }
            TokenProbe::LacksWriteAccess => {
                tracing::warn!("API token lacks configured permissions; falling back to admin login");
            }
        }
    }

    let Some(admin) = credentials.admin.as_ref() else {
        trace_state(AuthState::Failed);
        return Err(anyhow!(
            "API token was rejected and no {ENV_ADMIN_EMAIL}/{ENV_ADMIN_PASSWORD} fallback is \
             configured: recreate the token with type Full access, or set the admin pair"
        ));
    };

    trace_state(AuthState::TryingAdminLogin);
    let session = match admin_login(api, admin) {
        Ok(session) => session,
        Err(err) => {
            trace_state(AuthState::Failed);
            return Err(err);
        }
    };
    trace_state(AuthState::LoggedIn);
    Ok(session)
}

fn probe_api_token(api: &dyn Api, token: &str) -> Result<TokenProbe> {
    match api.get(READ_PROBE_PATH, Some(token)) {
        Ok(_) => {}
        Err(err) if err.status() == Some(404) => {}
        Err(err) if matches!(err.status(), Some(401) | Some(403)) => {
            tracing::warn!(status = err.status(), "API token rejected on read probe");
            return Ok(TokenProbe::LacksWriteAccess);
        }
        Err(err) if err.is_connectivity() => {
            return Err(err).context("read probe against the CMS failed");
        }
        Err(err) => {
            tracing::debug!(error = %err, "read probe returned an error; continuing to write probe");
        }
    }

    match api.post(WRITE_PROBE_PATH, Some(token), &json!({"data": {}})) {
        Ok(_) => Ok(TokenProbe::Valid),
        Err(err) if err.status() == Some(405) => Ok(TokenProbe::LacksWriteAccess),
        Err(err) if err.is_connectivity() => Err(err).context("write probe against the CMS failed"),
        // Any other failure is presumed to be a validation error, which means
        // the token reached the content API and is usable.
        Err(err) => {
            tracing::debug!(error = %err, "write probe rejected the payload; token accepted");
            Ok(TokenProbe::Valid)
        }
    }
}

/// Try each login candidate in order; first usable session token wins.
fn admin_login(api: &dyn Api, admin: &AdminLogin) -> Result<Session> {
    let mut failures = Vec::new();
    for candidate in LOGIN_CANDIDATES {
        match api.post(candidate.endpoint, None, &(candidate.payload)(admin)) {
            Ok(response) => match extract_session_token(&response.body) {
                Some(token) => {
                    return Ok(Session {
                        token,
                        method: AuthMethod::AdminLogin {
                            endpoint: candidate.endpoint,
                        },
                    });
                }
                None => {
                    failures.push(format!("{}: no session token in response", candidate.endpoint));
                }
            },
            Err(err) => failures.push(format!("{}: {err}", candidate.endpoint)),
        }
    }
    Err(anyhow!(
        "admin login failed on all endpoints (check {ENV_ADMIN_EMAIL}/{ENV_ADMIN_PASSWORD}):\n  {}",
        failures.join("\n  ")
    ))
}

/// Accept the session-token shapes the candidate endpoints return.
fn extract_session_token(body: &Value) -> Option<String> {
    [body.pointer("/data/token"), body.get("token"), body.get("jwt")]
        .into_iter()
        .flatten()
        .find_map(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::bearer;
    use crate::http::testing::{ok, status_err, ScriptedApi};
    use serde_json::json;

    fn token_credentials(token: &str) -> Credentials {
        Credentials {
            api_token: Some(token.to_string()),
            admin: None,
        }
    }

    fn full_credentials(token: &str) -> Credentials {
        Credentials {
            api_token: Some(token.to_string()),
            admin: Some(AdminLogin {
                email: "ops@example.com".to_string(),
                password: "hunter2".to_string(),
            }),
        }
    }

    fn admin_credentials() -> Credentials {
        Credentials {
            api_token: None,
            admin: Some(AdminLogin {
                email: "ops@example.com".to_string(),
                password: "hunter2".to_string(),
            }),
        }
    }

    #[test]
    fn valid_token_skips_admin_login() {
        let api = ScriptedApi::new(|call| match call.method {
            "GET" => ok(200, json!({"data": []})),
            _ => status_err(400, "ValidationError", "name is required"),
        });

        let session = authenticate(&api, &token_credentials("tok")).unwrap();
        assert_eq!(session.token(), "tok");
        assert_eq!(*session.method(), AuthMethod::ApiToken);
        assert!(api.paths().iter().all(|p| !p.contains("login")));
    }

    #[test]
    fn read_probe_404_still_counts_as_server_up() {
        let api = ScriptedApi::new(|call| match call.method {
            "GET" => status_err(404, "NotFoundError", "Not Found"),
            _ => status_err(400, "ValidationError", "name is required"),
        });

        let session = authenticate(&api, &token_credentials("tok")).unwrap();
        assert_eq!(*session.method(), AuthMethod::ApiToken);
    }

    #[test]
    fn write_probe_405_falls_back_to_login_candidates_in_order() {
        let api = ScriptedApi::new(|call| match (call.method, call.path.as_str()) {
            ("GET", _) => ok(200, json!({"data": []})),
            ("POST", WRITE_PROBE_PATH) => status_err(405, "MethodNotAllowedError", "Method Not Allowed"),
            ("POST", _) => status_err(404, "NotFoundError", "Not Found"),
            _ => unreachable!(),
        });

        let err = authenticate(&api, &full_credentials("tok")).unwrap_err();
        assert!(err.to_string().contains("admin login failed"));

        let paths = api.paths();
        let login_paths: Vec<&str> = paths
            .iter()
            .map(String::as_str)
            .filter(|p| p.contains("login") || p.contains("auth/local"))
            .collect();
        assert_eq!(
            login_paths,
            vec!["/admin/login", "/admin/auth/login", "/api/auth/local"]
        );
    }

    #[test]
    fn token_rejected_without_admin_fallback_reports_remediation() {
        let api = ScriptedApi::new(|call| match call.method {
            "GET" => ok(200, json!({"data": []})),
            _ => status_err(405, "MethodNotAllowedError", "Method Not Allowed"),
        });

        let err = authenticate(&api, &token_credentials("tok")).unwrap_err();
        assert!(err.to_string().contains("Full access"));
    }

    #[test]
    fn no_credentials_fails_without_any_call() {
        let api = ScriptedApi::new(|_| unreachable!("no call expected"));
        let err = authenticate(&api, &Credentials::default()).unwrap_err();
        assert!(err.to_string().contains("no credentials configured"));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn admin_login_second_candidate_yields_session() {
        let api = ScriptedApi::new(|call| match (call.method, call.path.as_str()) {
            ("POST", "/admin/login") => status_err(404, "NotFoundError", "Not Found"),
            ("POST", "/admin/auth/login") => ok(200, json!({"data": {"token": "abc123"}})),
            _ => unreachable!(),
        });

        let session = authenticate(&api, &admin_credentials()).unwrap();
        assert_eq!(session.token(), "abc123");
        assert_eq!(
            *session.method(),
            AuthMethod::AdminLogin {
                endpoint: "/admin/auth/login"
            }
        );
        assert_eq!(bearer(session.token()), "Bearer abc123");

        let login_body = &api.calls()[1].body;
        assert_eq!(
            login_body.as_ref().unwrap(),
            &json!({"email": "ops@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn other_write_probe_errors_keep_the_token() {
        let api = ScriptedApi::new(|call| match call.method {
            "GET" => ok(200, json!({"data": []})),
            _ => status_err(400, "ValidationError", "name is required"),
        });

        let session = authenticate(&api, &full_credentials("tok")).unwrap();
        assert_eq!(*session.method(), AuthMethod::ApiToken);
    }

    #[test]
    fn read_probe_401_falls_back_to_admin_login() {
        let api = ScriptedApi::new(|call| match (call.method, call.path.as_str()) {
            ("GET", _) => status_err(401, "UnauthorizedError", "Missing or invalid credentials"),
            ("POST", "/admin/login") => ok(200, json!({"data": {"token": "s3ss10n"}})),
            _ => unreachable!(),
        });

        let session = authenticate(&api, &full_credentials("bad-token")).unwrap();
        assert_eq!(session.token(), "s3ss10n");
    }

    #[test]
    fn session_token_extraction_accepts_known_shapes() {
        assert_eq!(
            extract_session_token(&json!({"data": {"token": "a"}})),
            Some("a".to_string())
        );
        assert_eq!(extract_session_token(&json!({"token": "b"})), Some("b".to_string()));
        assert_eq!(extract_session_token(&json!({"jwt": "c"})), Some("c".to_string()));
        assert_eq!(extract_session_token(&json!({"user": {"id": 1}})), None);
    }
}
