// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    application::dto::auth_request::{LoginRequestDto, RegisterRequestDto},
    domain::{
        models::user::User,
        repositories::{
            inventory_repository::RepositoryError, user_repository::UserRepository,
        },
    },
};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum AuthUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

pub struct AuthUseCase<UR> {
    user_repo: Arc<UR>,
}

impl<UR> AuthUseCase<UR>
where
    UR: UserRepository + 'static,
{
    pub fn new(user_repo: Arc<UR>) -> Self {
        Self { user_repo }
    }

    /// 注册新用户
    ///
    /// 用户名或邮箱已被占用时返回ValidationError
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<User, AuthUseCaseError> {
        dto.validate()
            .map_err(|e| AuthUseCaseError::ValidationError(e.to_string()))?;

        if self.user_repo.find_by_username(&dto.username).await?.is_some() {
            return Err(AuthUseCaseError::ValidationError(
                "Username already exists".to_string(),
            ));
        }

        if self.user_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AuthUseCaseError::ValidationError(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password)?;

        match self
            .user_repo
            .create(&dto.username, &dto.email, &password_hash)
            .await
        {
            Ok(user) => Ok(user),
            // Lost the race against a concurrent registration
            Err(RepositoryError::AlreadyExists) => Err(AuthUseCaseError::ValidationError(
                "User already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// 校验凭据
    ///
    /// 用户名不存在和密码不匹配返回同一个错误，不泄露账号是否存在
    pub async fn login(&self, dto: LoginRequestDto) -> Result<User, AuthUseCaseError> {
        dto.validate()
            .map_err(|e| AuthUseCaseError::ValidationError(e.to_string()))?;

        let user = self
            .user_repo
            .find_by_username(&dto.username)
            .await?
            .ok_or(AuthUseCaseError::InvalidCredentials)?;

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthUseCaseError::InvalidCredentials);
        }

        Ok(user)
    }
}

fn hash_password(password: &str) -> Result<String, AuthUseCaseError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthUseCaseError::Hashing(e.to_string()))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthUseCaseError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| AuthUseCaseError::Hashing(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthUseCaseError::Hashing(e.to_string())),
    }
}
