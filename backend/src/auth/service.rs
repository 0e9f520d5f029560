//! Core business logic for the authentication system.

use crate::api::common::validation_errors_to_message;
use crate::auth::models::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use crate::auth::session::{Session, SessionManager};
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use crate::store::Store;
use crate::store::models::{Address, CreateUser};
use crate::utils::jwt::JwtUtils;
use crate::utils::masks;
use bcrypt::{DEFAULT_COST, hash, verify};
use validator::Validate;

/// Authentication service handling login, registration, and logout.
pub struct AuthService<'a> {
    store: &'a Store,
    sessions: &'a SessionManager,
    jwt: JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance.
    pub fn new(store: &'a Store, sessions: &'a SessionManager, config: &Config) -> Self {
        AuthService {
            store,
            sessions,
            jwt: JwtUtils::new(config),
        }
    }

    /// Authenticate an operator and issue a session token.
    pub async fn login(&self, login_request: LoginRequest) -> ServiceResult<LoginResponse> {
        if let Err(validation_errors) = login_request.validate() {
            return Err(ServiceError::validation(validation_errors_to_message(
                validation_errors,
            )));
        }

        let mut session = Session::new();
        session.begin_authentication();

        let user = match self.store.get_user_by_email(&login_request.email).await {
            Some(user) => user,
            None => {
                session.fail_authentication();
                return Err(ServiceError::authentication("Usuário não encontrado"));
            }
        };

        let password_matches = verify(&login_request.password, &user.password_hash)
            .map_err(|e| ServiceError::internal(format!("Password verification failed: {}", e)))?;
        if !password_matches {
            session.fail_authentication();
            return Err(ServiceError::authentication("Senha incorreta"));
        }

        let user_info = UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
        };

        let token = self.jwt.generate_token(
            user_info.id.clone(),
            user_info.name.clone(),
            user_info.email.clone(),
        )?;

        session.complete_authentication(user_info.clone());
        self.sessions.insert(token.clone(), session).await;

        tracing::info!("Operator {} logged in", user_info.email);

        Ok(LoginResponse {
            token,
            user: user_info,
            expires_in: self.jwt.expires_in_seconds(),
        })
    }

    /// Register a new operator and authenticate them in the same step.
    ///
    /// CPF, CEP, and phone are normalized through the input masks before
    /// validation, so clients may submit either masked or digit-only values.
    pub async fn register(&self, mut request: RegisterRequest) -> ServiceResult<LoginResponse> {
        request.cpf = masks::format_cpf(&request.cpf);
        request.phone = masks::format_phone(&request.phone);
        request.address.cep = masks::format_cep(&request.address.cep);

        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::validation(validation_errors_to_message(
                validation_errors,
            )));
        }

        if self.store.get_user_by_email(&request.email).await.is_some() {
            return Err(ServiceError::conflict("User", &request.email));
        }
        if self.store.cpf_exists(&request.cpf).await {
            return Err(ServiceError::conflict("User", &request.cpf));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| ServiceError::internal(format!("Password hashing failed: {}", e)))?;

        let mut session = Session::new();
        session.begin_authentication();

        let user = self
            .store
            .create_user(CreateUser {
                name: request.name,
                email: request.email,
                cpf: request.cpf,
                phone: request.phone,
                birth_date: request.birth_date,
                address: Address {
                    street: request.address.street,
                    cep: request.address.cep,
                    city: request.address.city,
                    state: request.address.state,
                    neighborhood: request.address.neighborhood,
                    complement: request.address.complement,
                },
                password_hash,
            })
            .await;

        let user_info = UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
        };

        let token = self.jwt.generate_token(
            user_info.id.clone(),
            user_info.name.clone(),
            user_info.email.clone(),
        )?;

        session.complete_authentication(user_info.clone());
        self.sessions.insert(token.clone(), session).await;

        tracing::info!("Operator {} registered", user_info.email);

        Ok(LoginResponse {
            token,
            user: user_info,
            expires_in: self.jwt.expires_in_seconds(),
        })
    }

    /// Drop the session for a token. Safe to call repeatedly.
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        self.sessions.logout(token).await;
        Ok(())
    }
}
