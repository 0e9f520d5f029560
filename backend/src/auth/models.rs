//! Data structures for authentication-related entities.
//!
//! This module defines the login and registration payloads with their
//! synchronous field validation rules, and the session/user info types
//! returned to the client.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

static CPF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("valid CPF pattern"));

static CEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("valid CEP pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("valid phone pattern"));

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "E-mail é obrigatório"),
        email(message = "E-mail inválido")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}

/// Address block of a registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "Rua é obrigatória"))]
    pub street: String,

    #[validate(regex(path = *CEP_RE, message = "CEP inválido"))]
    pub cep: String,

    #[validate(length(min = 1, message = "Cidade é obrigatória"))]
    pub city: String,

    #[validate(length(min = 2, max = 2, message = "Estado deve ter 2 caracteres"))]
    pub state: String,

    #[validate(length(min = 1, message = "Bairro é obrigatório"))]
    pub neighborhood: String,

    pub complement: Option<String>,
}

/// Registration request payload.
///
/// CPF, CEP, and phone are run through the input masks before these rules
/// are evaluated, so digit-only input in the canonical lengths passes.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Nome deve ter pelo menos 2 caracteres"))]
    pub name: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(regex(path = *CPF_RE, message = "CPF inválido"))]
    pub cpf: String,

    #[validate(regex(path = *PHONE_RE, message = "Telefone inválido"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Data de nascimento é obrigatória"))]
    pub birth_date: String,

    #[validate(nested)]
    pub address: AddressRequest,

    #[validate(length(min = 8, message = "Senha deve ter pelo menos 8 caracteres"))]
    pub password: String,

    #[validate(must_match(other = password, message = "As senhas não coincidem"))]
    pub confirm_password: String,
}

/// User information returned in session responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Login/registration response containing the session token and user info.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    pub expires_in: u64, // Token expiration in seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            name: "Beatriz Almeida".into(),
            email: "beatriz.almeida@email.com".into(),
            cpf: "111.222.333-44".into(),
            phone: "(11) 98888-7777".into(),
            birth_date: "1993-02-11".into(),
            address: AddressRequest {
                street: "Rua Nova, 10".into(),
                cep: "04567-890".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                neighborhood: "Moema".into(),
                complement: None,
            },
            password: "segredo123".into(),
            confirm_password: "segredo123".into(),
        }
    }

    #[test]
    fn fully_filled_registration_passes_validation() {
        assert!(valid_register().validate().is_ok());
    }

    #[test]
    fn mismatched_password_confirmation_is_rejected() {
        let mut req = valid_register();
        req.confirm_password = "outra-coisa".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    fn malformed_cpf_cep_and_phone_are_rejected() {
        let mut req = valid_register();
        req.cpf = "11122233344".into();
        req.phone = "11 98888 7777".into();
        req.address.cep = "04567890".into();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("cpf"));
        assert!(fields.contains_key("phone"));
    }
}
