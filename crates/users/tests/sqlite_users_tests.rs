use std::sync::Arc;

use gymcheck_auth::Argon2Hasher;
use gymcheck_config::DatabaseConfig;
use gymcheck_database::{initialize_database, UserRepository};
use gymcheck_users::{
    AuthenticateRequest, AuthenticateUseCase, GetUserProfileUseCase, RegisterRequest,
    RegisterUseCase, UserError, UsersRepository,
};

async fn sqlite_users() -> Arc<dyn UsersRepository> {
    let pool = initialize_database(&DatabaseConfig {
        url: "sqlite://:memory:".to_string(),
        max_connections: 1,
    })
    .await
    .unwrap();
    Arc::new(UserRepository::new(pool))
}

#[tokio::test]
async fn register_then_authenticate_against_sqlite() {
    let users = sqlite_users().await;
    let hasher = Arc::new(Argon2Hasher::new());

    let registered = RegisterUseCase::new(users.clone(), hasher.clone())
        .execute(RegisterRequest {
            name: "John Doe".into(),
            email: "johndoe@example.com".into(),
            password: "123456".into(),
        })
        .await
        .unwrap();

    let authenticated = AuthenticateUseCase::new(users.clone(), hasher.clone())
        .execute(AuthenticateRequest {
            email: "johndoe@example.com".into(),
            password: "123456".into(),
        })
        .await
        .unwrap();
    assert_eq!(authenticated.id, registered.id);

    let profile = GetUserProfileUseCase::new(users.clone())
        .execute(&registered.id)
        .await
        .unwrap();
    assert_eq!(profile.email, "johndoe@example.com");
}

#[tokio::test]
async fn duplicate_registration_against_sqlite() {
    let users = sqlite_users().await;
    let register = RegisterUseCase::new(users, Arc::new(Argon2Hasher::new()));
    let request = RegisterRequest {
        name: "John Doe".into(),
        email: "johndoe@example.com".into(),
        password: "123456".into(),
    };

    register.execute(request.clone()).await.unwrap();
    assert!(matches!(
        register.execute(request).await,
        Err(UserError::UserAlreadyExists)
    ));
}
