//! Authentication and session management.
//!
//! Authentication is a pluggable capability: the [`Authenticator`] trait
//! resolves credentials to a profile, and [`CredentialAuthenticator`] backs
//! it with an argon2-hashed credentials file. Unknown credentials fall back
//! to a guest student account as long as both fields are non-empty, so the
//! app stays usable without registration. Passwords are never stored or
//! compared in plaintext.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::RwLock;
use std::time::{Duration, SystemTime};
use thiserror::Error;
use uuid::Uuid;

const CREDENTIALS_FILE: &str = "credentials.json";
const SESSION_DURATION: u64 = 24 * 60 * 60; // 24 hours in seconds

/// Access level of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

/// A registered account
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    /// Username (unique identifier for the account)
    pub username: String,

    /// Argon2 hash of the account's password
    pub password_hash: String,

    /// Access level granted on login
    pub role: Role,
}

/// Credential data received from the login form
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The profile handed back to the client after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub role: Role,
    /// True when the login fell back to the guest account
    pub guest: bool,
    pub avatar: String,
    pub welcome: String,
}

/// Login failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username bata bhai, telepathy se nahi pehchan sakte tujhe!")]
    EmptyUsername,
    #[error("Password daal de bhai, \"khul ja sim sim\" nahi bolega system!")]
    EmptyPassword,
}

/// Resolves credentials to a user profile
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, AuthError>;
}

/// Authenticator backed by a hashed credentials file
///
/// Known accounts get their configured role after password verification;
/// anything else (including a wrong password for a known account) falls
/// through to the guest student profile.
pub struct CredentialAuthenticator {
    accounts: HashMap<String, Account>,
}

impl CredentialAuthenticator {
    /// Load the credentials file, creating it with the default demo
    /// accounts (`admin` as administrator, `gunda` as student) on first run
    pub fn open(database_dir: &str) -> Result<CredentialAuthenticator, String> {
        init_credentials(database_dir)?;

        let path = Path::new(database_dir).join(CREDENTIALS_FILE);
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(_) => return Err("Failed to open credentials file".to_string()),
        };

        let mut contents = String::new();
        if file.read_to_string(&mut contents).is_err() {
            return Err("Failed to read credentials file".to_string());
        }

        let accounts = match serde_json::from_str(&contents) {
            Ok(accounts) => accounts,
            Err(_) => return Err("Failed to parse credentials data".to_string()),
        };

        Ok(CredentialAuthenticator { accounts })
    }

    /// Build an authenticator from in-memory accounts (used by tests)
    pub fn with_accounts(accounts: Vec<Account>) -> CredentialAuthenticator {
        CredentialAuthenticator {
            accounts: accounts
                .into_iter()
                .map(|a| (a.username.clone(), a))
                .collect(),
        }
    }
}

impl Authenticator for CredentialAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        let username = credentials.username.trim();
        let password = credentials.password.trim();

        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        if let Some(account) = self.accounts.get(username) {
            if verify_password(password, &account.password_hash) {
                return Ok(match account.role {
                    Role::Admin => UserProfile {
                        username: username.to_string(),
                        name: "Administrator".to_string(),
                        role: Role::Admin,
                        guest: false,
                        avatar: format!(
                            "https://api.dicebear.com/6.x/bottts/svg?seed={}",
                            username
                        ),
                        welcome: "Welcome Administrator! Full system access granted."
                            .to_string(),
                    },
                    Role::Student => UserProfile {
                        username: username.to_string(),
                        name: "Gunda Student".to_string(),
                        role: Role::Student,
                        guest: false,
                        avatar: format!(
                            "https://api.dicebear.com/6.x/avataaars/svg?seed={}",
                            username
                        ),
                        welcome: "Aa gaya tu Gunda Student! Ab padhai shuru kar jaldi!"
                            .to_string(),
                    },
                });
            }
        }

        // Guest fallback: any other non-empty credentials log in as a
        // student without admin access.
        Ok(UserProfile {
            username: username.to_string(),
            name: username.to_string(),
            role: Role::Student,
            guest: true,
            avatar: format!(
                "https://api.dicebear.com/6.x/avataaars/svg?seed={}",
                username
            ),
            welcome: format!("Aa gaya tu {}! Ab padhai shuru kar jaldi!", username),
        })
    }
}

/// Initialize the credentials file
///
/// Creates the database directory and, if no credentials file exists yet,
/// writes one holding the hashed demo accounts.
pub fn init_credentials(database_dir: &str) -> Result<(), String> {
    if !Path::new(database_dir).exists() {
        create_dir_all(database_dir)
            .map_err(|_| "Failed to create database directory".to_string())?;
    }

    let path = Path::new(database_dir).join(CREDENTIALS_FILE);
    if path.exists() {
        return Ok(());
    }

    let defaults = vec![
        Account {
            username: "admin".to_string(),
            password_hash: hash_password("admin")?,
            role: Role::Admin,
        },
        Account {
            username: "gunda".to_string(),
            password_hash: hash_password("gundagardi")?,
            role: Role::Student,
        },
    ];

    let accounts: HashMap<String, Account> = defaults
        .into_iter()
        .map(|a| (a.username.clone(), a))
        .collect();

    let json = serde_json::to_string_pretty(&accounts)
        .map_err(|_| "Failed to serialize credentials data".to_string())?;

    let mut file =
        File::create(&path).map_err(|_| "Failed to create credentials file".to_string())?;
    file.write_all(json.as_bytes())
        .map_err(|_| "Failed to write credentials data".to_string())?;

    Ok(())
}

/// Hash a password with argon2
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    match argon2.hash_password(password.as_bytes(), &salt) {
        Ok(hash) => Ok(hash.to_string()),
        Err(_) => Err("Failed to hash password".to_string()),
    }
}

/// Verify a password against a stored argon2 hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// An authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub expires_at: SystemTime,
}

lazy_static! {
    static ref SESSIONS: RwLock<HashMap<String, Session>> = RwLock::new(HashMap::new());
}

/// Create a session for an authenticated user
///
/// # Returns
/// * `String` - A unique session ID
pub fn create_session(username: &str, role: Role) -> String {
    let session_id = Uuid::new_v4().to_string();
    let expires_at = SystemTime::now() + Duration::from_secs(SESSION_DURATION);

    let session = Session {
        username: username.to_string(),
        role,
        expires_at,
    };

    let mut sessions = SESSIONS.write().unwrap();
    sessions.insert(session_id.clone(), session);

    session_id
}

/// Validate a session
///
/// # Returns
/// * `Option<Session>` - The session data if valid and unexpired
pub fn validate_session(session_id: &str) -> Option<Session> {
    let sessions = SESSIONS.read().unwrap();

    if let Some(session) = sessions.get(session_id) {
        if session.expires_at > SystemTime::now() {
            return Some(session.clone());
        }
    }

    None
}

/// Destroy a session on logout
pub fn destroy_session(session_id: &str) {
    let mut sessions = SESSIONS.write().unwrap();
    sessions.remove(session_id);
}
