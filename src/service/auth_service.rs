// service/auth_service.rs
//! Mock sign-in. Nothing is checked against a credential store: the forms
//! are validated and the account is looked up or created on the spot.

use std::rc::Rc;

use uuid::Uuid;

use crate::{
    config::Config,
    db::{db::DBClient, userdb::UserExt},
    dtos::userdtos::{SignInDto, SignUpDto},
    models::usermodel::*,
    service::{error::ServiceError, require_role},
    utils::validation::validate_dto,
};

#[derive(Debug, Clone)]
pub struct AuthService {
    db_client: Rc<DBClient>,
    env: Config,
}

impl AuthService {
    pub fn new(db_client: Rc<DBClient>, env: Config) -> Self {
        Self { db_client, env }
    }

    /// Known emails sign in to their account; unknown ones get a fresh
    /// customer account.
    pub fn sign_in(&self, dto: SignInDto) -> Result<User, ServiceError> {
        validate_dto(&dto)?;

        if let Some(user) = self.db_client.get_user_by_email(&dto.email) {
            require_role(&user)?;
            tracing::info!("User {} signed in", user.id);
            return Ok(user);
        }

        let email = dto.email.trim().to_string();
        let name = email.split('@').next().unwrap_or("Customer").to_string();
        let user = self.register(User {
            id: Uuid::new_v4(),
            name,
            email,
            role: Some(UserRole::Customer),
            avatar: None,
            phone: None,
            credits: Some(self.env.customer_signup_credits),
        });
        tracing::info!("New customer {} created on sign-in", user.id);
        Ok(user)
    }

    pub fn sign_up(&self, dto: SignUpDto) -> Result<User, ServiceError> {
        validate_dto(&dto)?;
        if self.db_client.get_user_by_email(&dto.email).is_some() {
            return Err(ServiceError::EmailTaken(dto.email.trim().to_string()));
        }

        let credits = match dto.role {
            UserRole::Labor => self.env.labor_signup_credits,
            _ => self.env.customer_signup_credits,
        };
        let user = self.register(dto.into_user(credits));
        tracing::info!(
            "New {} account {} with {} credits",
            user.role.map_or("unknown", |r| r.to_str()),
            user.id,
            credits
        );
        Ok(user)
    }

    pub fn google_sign_in(&self) -> User {
        const GOOGLE_EMAIL: &str = "user@gmail.com";
        if let Some(user) = self.db_client.get_user_by_email(GOOGLE_EMAIL) {
            return user;
        }
        self.register(User {
            id: Uuid::new_v4(),
            name: "Google User".to_string(),
            email: GOOGLE_EMAIL.to_string(),
            role: Some(UserRole::Customer),
            avatar: None,
            phone: None,
            credits: Some(self.env.customer_signup_credits),
        })
    }

    /// The stored demo account, recreated if the store was started empty.
    pub fn demo_sign_in(&self, account: DemoAccount) -> User {
        let template = account.user();
        match self.db_client.get_user(template.id) {
            Some(user) => user,
            None => self.register(template),
        }
    }

    fn register(&self, user: User) -> User {
        let user = self.db_client.save_user(user);
        if self.db_client.get_profile_details(user.id).is_none() {
            self.db_client.save_profile_details(
                user.id,
                ProfileDetails {
                    location: self.env.default_location.clone(),
                    ..Default::default()
                },
            );
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (Rc<DBClient>, AuthService) {
        let db = Rc::new(DBClient::new());
        (db.clone(), AuthService::new(db, Config::default()))
    }

    fn sign_up(role: UserRole, email: &str) -> SignUpDto {
        SignUpDto {
            name: "Erion Daci".to_string(),
            email: email.to_string(),
            phone: Some("+355 69 123 4567".to_string()),
            password: "secret1".to_string(),
            role,
        }
    }

    #[test]
    fn sign_up_credits_depend_on_role() {
        let (db, service) = service();
        let labor = service.sign_up(sign_up(UserRole::Labor, "erion@example.com")).unwrap();
        let customer = service.sign_up(sign_up(UserRole::Customer, "dea@example.com")).unwrap();
        assert_eq!(labor.credits, Some(10));
        assert_eq!(customer.credits, Some(5));
        assert_eq!(
            db.get_profile_details(labor.id).map(|d| d.location),
            Some("Tirana, Albania".to_string())
        );
    }

    #[test]
    fn duplicate_email_is_refused() {
        let (_, service) = service();
        service.sign_up(sign_up(UserRole::Labor, "erion@example.com")).unwrap();
        assert!(matches!(
            service.sign_up(sign_up(UserRole::Customer, "ERION@example.com")),
            Err(ServiceError::EmailTaken(_))
        ));
    }

    #[test]
    fn sign_in_finds_or_creates() {
        let (_, service) = service();
        let pro = service.demo_sign_in(DemoAccount::Professional);

        let again = service
            .sign_in(SignInDto { email: "labor@demo.com".to_string(), password: "secret1".to_string() })
            .unwrap();
        assert_eq!(again.id, pro.id);

        let fresh = service
            .sign_in(SignInDto { email: "new@example.com".to_string(), password: "secret1".to_string() })
            .unwrap();
        assert_eq!(fresh.role, Some(UserRole::Customer));
        assert_eq!(fresh.name, "new");
    }

    #[test]
    fn short_password_is_refused() {
        let (db, service) = service();
        let result = service.sign_in(SignInDto { email: "a@b.com".to_string(), password: "123".to_string() });
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(db.get_user_count(), 0);
    }

    #[test]
    fn roleless_accounts_cannot_sign_in() {
        let (db, service) = service();
        let mut user = DemoAccount::Customer.user();
        user.role = None;
        db.save_user(user);
        assert_eq!(
            service.sign_in(SignInDto { email: "customer@demo.com".to_string(), password: "secret1".to_string() }),
            Err(ServiceError::RoleRequired)
        );
    }

    #[test]
    fn google_user_is_reused() {
        let (_, service) = service();
        let first = service.google_sign_in();
        assert_eq!(first.name, "Google User");
        assert_eq!(service.google_sign_in().id, first.id);
    }
}
