use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use gymcheck_check_ins::{
    CheckInError, CheckInPolicy, CheckInRequest, CheckInUseCase, CheckInsRepository,
    FetchUserCheckInHistoryUseCase, GetUserMetricsUseCase, ValidateCheckInUseCase,
};
use gymcheck_config::DatabaseConfig;
use gymcheck_database::{
    initialize_database, CheckInRepository, GymRepository, NewGym, NewUser, UserRepository,
    UserRole,
};
use gymcheck_gyms::GymsRepository;
use mockable::Clock;
use rust_decimal::Decimal;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

struct Context {
    check_ins: Arc<dyn CheckInsRepository>,
    gyms: Arc<dyn GymsRepository>,
    user_id: String,
    gym_id: String,
}

async fn context() -> Context {
    let pool = initialize_database(&DatabaseConfig {
        url: "sqlite://:memory:".to_string(),
        max_connections: 1,
    })
    .await
    .unwrap();

    let user = UserRepository::new(pool.clone())
        .create(NewUser {
            name: "John Doe".into(),
            email: "johndoe@example.com".into(),
            password_hash: "hash".into(),
            role: UserRole::Member,
        })
        .await
        .unwrap();
    let gym = GymRepository::new(pool.clone())
        .create(NewGym {
            title: "JavaScript Gym".into(),
            description: None,
            phone: None,
            latitude: Decimal::from_str("-27.2092052").unwrap(),
            longitude: Decimal::from_str("-49.6401091").unwrap(),
        })
        .await
        .unwrap();

    Context {
        check_ins: Arc::new(CheckInRepository::new(pool.clone())),
        gyms: Arc::new(GymRepository::new(pool)),
        user_id: user.id,
        gym_id: gym.id,
    }
}

fn check_in_at(ctx: &Context, now: DateTime<Utc>) -> CheckInUseCase {
    CheckInUseCase::new(
        ctx.check_ins.clone(),
        ctx.gyms.clone(),
        Arc::new(FixedClock(now)),
        CheckInPolicy::default(),
    )
}

fn request(ctx: &Context) -> CheckInRequest {
    CheckInRequest {
        user_id: ctx.user_id.clone(),
        gym_id: ctx.gym_id.clone(),
        user_latitude: -27.2092052,
        user_longitude: -49.6401091,
    }
}

#[tokio::test]
async fn daily_limit_holds_against_sqlite() {
    let ctx = context().await;
    let noon = Utc.with_ymd_and_hms(2022, 1, 20, 12, 0, 0).unwrap();

    check_in_at(&ctx, noon).execute(request(&ctx)).await.unwrap();
    let again = check_in_at(&ctx, noon + Duration::minutes(10))
        .execute(request(&ctx))
        .await;
    assert!(matches!(again, Err(CheckInError::MaxNumberOfCheckIns)));

    check_in_at(&ctx, noon + Duration::days(1))
        .execute(request(&ctx))
        .await
        .unwrap();

    let count = GetUserMetricsUseCase::new(ctx.check_ins.clone())
        .execute(&ctx.user_id)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let history = FetchUserCheckInHistoryUseCase::new(ctx.check_ins.clone())
        .execute(&ctx.user_id, 1)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].created_at < history[1].created_at);
}

#[tokio::test]
async fn validation_window_against_sqlite() {
    let ctx = context().await;
    let created_at = Utc.with_ymd_and_hms(2023, 1, 1, 13, 40, 0).unwrap();
    let check_in = check_in_at(&ctx, created_at)
        .execute(request(&ctx))
        .await
        .unwrap();

    let late = ValidateCheckInUseCase::new(
        ctx.check_ins.clone(),
        Arc::new(FixedClock(created_at + Duration::minutes(21))),
        CheckInPolicy::default(),
    )
    .execute(&check_in.id)
    .await;
    assert!(matches!(late, Err(CheckInError::LateCheckInValidation)));

    let on_time = created_at + Duration::minutes(20);
    let validated = ValidateCheckInUseCase::new(
        ctx.check_ins.clone(),
        Arc::new(FixedClock(on_time)),
        CheckInPolicy::default(),
    )
    .execute(&check_in.id)
    .await
    .unwrap();
    assert_eq!(validated.validated_at, Some(on_time));

    let stored = ctx.check_ins.find_by_id(&check_in.id).await.unwrap().unwrap();
    assert_eq!(stored.validated_at, Some(on_time));
}
