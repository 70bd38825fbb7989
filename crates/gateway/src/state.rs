//! Composition root: shared handles and one factory per use-case

use std::sync::Arc;

use gymcheck_auth::{Argon2Hasher, CredentialHasher, JwtTokenIssuer, TokenIssuer};
use gymcheck_check_ins::{
    CheckInPolicy, CheckInUseCase, CheckInsRepository, FetchUserCheckInHistoryUseCase,
    GetUserMetricsUseCase, InMemoryCheckInsRepository, ValidateCheckInUseCase,
};
use gymcheck_gyms::{
    CreateGymUseCase, FetchNearbyGymsUseCase, GymsRepository, InMemoryGymsRepository,
    SearchGymsUseCase,
};
use gymcheck_users::{
    AuthenticateUseCase, GetUserProfileUseCase, InMemoryUsersRepository, RegisterUseCase,
    UsersRepository,
};
use mockable::{Clock, DefaultClock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    users: Arc<dyn UsersRepository>,
    gyms: Arc<dyn GymsRepository>,
    check_ins: Arc<dyn CheckInsRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock + Send + Sync>,
    policy: CheckInPolicy,
}

impl AppState {
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    pub fn token_issuer(&self) -> &dyn TokenIssuer {
        self.tokens.as_ref()
    }

    pub fn register_use_case(&self) -> RegisterUseCase {
        RegisterUseCase::new(self.users.clone(), self.hasher.clone())
    }

    pub fn authenticate_use_case(&self) -> AuthenticateUseCase {
        AuthenticateUseCase::new(self.users.clone(), self.hasher.clone())
    }

    pub fn get_user_profile_use_case(&self) -> GetUserProfileUseCase {
        GetUserProfileUseCase::new(self.users.clone())
    }

    pub fn create_gym_use_case(&self) -> CreateGymUseCase {
        CreateGymUseCase::new(self.gyms.clone())
    }

    pub fn search_gyms_use_case(&self) -> SearchGymsUseCase {
        SearchGymsUseCase::new(self.gyms.clone())
    }

    pub fn fetch_nearby_gyms_use_case(&self) -> FetchNearbyGymsUseCase {
        FetchNearbyGymsUseCase::new(self.gyms.clone())
    }

    pub fn check_in_use_case(&self) -> CheckInUseCase {
        CheckInUseCase::new(
            self.check_ins.clone(),
            self.gyms.clone(),
            self.clock.clone(),
            self.policy,
        )
    }

    pub fn validate_check_in_use_case(&self) -> ValidateCheckInUseCase {
        ValidateCheckInUseCase::new(self.check_ins.clone(), self.clock.clone(), self.policy)
    }

    pub fn fetch_user_check_in_history_use_case(&self) -> FetchUserCheckInHistoryUseCase {
        FetchUserCheckInHistoryUseCase::new(self.check_ins.clone())
    }

    pub fn get_user_metrics_use_case(&self) -> GetUserMetricsUseCase {
        GetUserMetricsUseCase::new(self.check_ins.clone())
    }
}

/// Builder for [`AppState`]. Unset parts fall back to in-memory storage,
/// argon2 hashing, the system clock and the default check-in policy.
#[derive(Default)]
pub struct AppStateBuilder {
    users: Option<Arc<dyn UsersRepository>>,
    gyms: Option<Arc<dyn GymsRepository>>,
    check_ins: Option<Arc<dyn CheckInsRepository>>,
    hasher: Option<Arc<dyn CredentialHasher>>,
    tokens: Option<Arc<dyn TokenIssuer>>,
    clock: Option<Arc<dyn Clock + Send + Sync>>,
    policy: Option<CheckInPolicy>,
}

impl AppStateBuilder {
    pub fn users(mut self, users: Arc<dyn UsersRepository>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn gyms(mut self, gyms: Arc<dyn GymsRepository>) -> Self {
        self.gyms = Some(gyms);
        self
    }

    pub fn check_ins(mut self, check_ins: Arc<dyn CheckInsRepository>) -> Self {
        self.check_ins = Some(check_ins);
        self
    }

    pub fn hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    pub fn token_issuer(mut self, tokens: Arc<dyn TokenIssuer>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn check_in_policy(mut self, policy: CheckInPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            users: self
                .users
                .unwrap_or_else(|| Arc::new(InMemoryUsersRepository::new())),
            gyms: self
                .gyms
                .unwrap_or_else(|| Arc::new(InMemoryGymsRepository::new())),
            check_ins: self
                .check_ins
                .unwrap_or_else(|| Arc::new(InMemoryCheckInsRepository::new())),
            hasher: self.hasher.unwrap_or_else(|| Arc::new(Argon2Hasher::new())),
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(JwtTokenIssuer::default())),
            clock: self.clock.unwrap_or_else(|| Arc::new(DefaultClock)),
            policy: self.policy.unwrap_or_default(),
        }
    }
}
