//! Identity store use cases against the in-memory repository

use std::sync::Arc;

use auth::application::{
    AuthenticateInput, AuthenticateUseCase, GetProfileUseCase, ListProfessionalsUseCase,
    RegisterInput, RegisterUseCase, ResolveCallerUseCase, UpdateProfileInput,
    UpdateProfileUseCase,
};
use auth::application::AuthOutput;
use auth::domain::entity::{
    Credential, Profile, ProfileDetails, ProfileDraft, ProfilePatch, RatingSummary, User,
    UserPatch,
};
use auth::domain::repository::{ProfessionalFilter, ProfileRepository, UserRepository};
use auth::domain::value_object::{Email, UserType};
use auth::{AuthConfig, AuthError, AuthResult, MemoryAuthRepository};
use chrono::{Duration, Utc};
use kernel::id::UserId;
use platform::password::PlainPassword;

const SECRET: &[u8] = b"integration-test-secret";
const PASSWORD: &str = "Quirofano-2024";

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::new(SECRET.to_vec()))
}

fn professional_input(email: &str, specialties: &[&str], location: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        user_type: UserType::Professional,
        full_name: "Ana Ruiz".to_string(),
        phone: "3001234567".to_string(),
        location: Some(location.to_string()),
        profile: ProfileDraft {
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            experience_years: 10,
            ..Default::default()
        },
    }
}

async fn register(repo: &Arc<MemoryAuthRepository>, input: RegisterInput) -> AuthResult<AuthOutput> {
    RegisterUseCase::new(repo.clone(), repo.clone(), config())
        .execute(input)
        .await
}

#[tokio::test]
async fn register_creates_user_profile_and_token() {
    let repo = Arc::new(MemoryAuthRepository::new());

    let output = register(&repo, professional_input("Ana@Clinica.com", &["Ortopedia"], "Bogotá"))
        .await
        .unwrap();

    assert_eq!(output.user.email.as_str(), "ana@clinica.com");
    assert_eq!(output.user.user_type, UserType::Professional);

    let profile = output.profile.expect("profile created");
    assert_eq!(profile.user_type(), UserType::Professional);
    assert_eq!(profile.rating, RatingSummary::default());

    let ttl = output.token.expires_at - Utc::now();
    assert!(ttl <= Duration::minutes(30) && ttl > Duration::minutes(29));

    let subject = config().token_codec().resolve(&output.token.token).unwrap();
    assert_eq!(subject, "ana@clinica.com");
}

#[tokio::test]
async fn duplicate_registration_is_rejected_and_first_account_kept() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let first = register(&repo, professional_input("ana@clinica.com", &[], "Bogotá"))
        .await
        .unwrap();

    let mut second = professional_input("ANA@clinica.com", &[], "Cali");
    second.password = "another-password".to_string();
    let result = register(&repo, second).await;

    assert!(matches!(result, Err(AuthError::DuplicateIdentity)));
    assert_eq!(repo.user_count().await, 1);

    // The original password still works
    let login = AuthenticateUseCase::new(repo.clone(), repo.clone(), config())
        .execute(AuthenticateInput {
            email: "ana@clinica.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(login.user.user_id, first.user.user_id);
    assert_eq!(login.user.location, "Bogotá");
}

#[tokio::test]
async fn register_validates_before_writing() {
    let repo = Arc::new(MemoryAuthRepository::new());

    let bad_email = professional_input("not-an-email", &[], "Bogotá");
    assert!(matches!(
        register(&repo, bad_email).await,
        Err(AuthError::Validation(_))
    ));

    let mut short_password = professional_input("ana@clinica.com", &[], "Bogotá");
    short_password.password = "short".to_string();
    assert!(matches!(
        register(&repo, short_password).await,
        Err(AuthError::Validation(_))
    ));

    let company_without_name = RegisterInput {
        user_type: UserType::Company,
        ..professional_input("compras@clinica.com", &[], "Bogotá")
    };
    assert!(matches!(
        register(&repo, company_without_name).await,
        Err(AuthError::Validation(_))
    ));

    assert_eq!(repo.user_count().await, 0);
}

#[tokio::test]
async fn login_rejects_unknown_email_and_wrong_password_alike() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register(&repo, professional_input("ana@clinica.com", &[], "Bogotá"))
        .await
        .unwrap();

    let use_case = AuthenticateUseCase::new(repo.clone(), repo.clone(), config());

    for (email, password) in [
        ("nadie@clinica.com", PASSWORD),
        ("ana@clinica.com", "Quirofano-2025"),
        ("ana@clinica.com", ""),
        ("garbage", PASSWORD),
    ] {
        let result = use_case
            .execute(AuthenticateInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await;
        assert!(
            matches!(result, Err(AuthError::InvalidCredentials)),
            "{email} / {password}"
        );
    }
}

#[tokio::test]
async fn login_loads_the_matching_profile_variant() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let input = RegisterInput {
        user_type: UserType::Supplier,
        profile: ProfileDraft {
            company_name: Some("MedSupply SAS".to_string()),
            products_services: vec!["Implantes".to_string()],
            ..Default::default()
        },
        ..professional_input("ventas@medsupply.co", &[], "Bogotá")
    };
    register(&repo, input).await.unwrap();

    let output = AuthenticateUseCase::new(repo.clone(), repo.clone(), config())
        .execute(AuthenticateInput {
            email: "ventas@medsupply.co".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    let profile = output.profile.expect("supplier profile");
    match profile.details {
        ProfileDetails::Supplier(s) => assert_eq!(s.company_name, "MedSupply SAS"),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[tokio::test]
async fn resolve_caller_maps_token_to_user() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let output = register(&repo, professional_input("ana@clinica.com", &[], "Bogotá"))
        .await
        .unwrap();

    let use_case = ResolveCallerUseCase::new(repo.clone(), config());
    let caller = use_case.execute(&output.token.token).await.unwrap();
    assert_eq!(caller.user_id, output.user.user_id);

    assert!(matches!(
        use_case.execute("garbage").await,
        Err(AuthError::InvalidToken)
    ));

    let foreign = AuthConfig::new(b"other-secret".to_vec())
        .token_codec()
        .issue("ana@clinica.com", None)
        .unwrap();
    assert!(matches!(
        use_case.execute(&foreign.token).await,
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn resolve_caller_rejects_expired_token() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register(&repo, professional_input("ana@clinica.com", &[], "Bogotá"))
        .await
        .unwrap();

    let issued_long_ago = config()
        .token_codec()
        .issue_at(
            "ana@clinica.com",
            Some(Duration::minutes(30)),
            Utc::now() - Duration::minutes(31),
        )
        .unwrap();

    let result = ResolveCallerUseCase::new(repo.clone(), config())
        .execute(&issued_long_ago.token)
        .await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn resolve_caller_for_deleted_user_is_unauthenticated() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let output = register(&repo, professional_input("ana@clinica.com", &[], "Bogotá"))
        .await
        .unwrap();

    UserRepository::delete(repo.as_ref(), &output.user.user_id)
        .await
        .unwrap();

    let result = ResolveCallerUseCase::new(repo.clone(), config())
        .execute(&output.token.token)
        .await;
    assert!(matches!(result, Err(AuthError::Unauthenticated)));
}

#[tokio::test]
async fn update_profile_applies_own_variant_only() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let output = register(&repo, professional_input("ana@clinica.com", &["Ortopedia"], "Bogotá"))
        .await
        .unwrap();
    repo.update_rating(
        &output.user.user_id,
        UserType::Professional,
        RatingSummary {
            average_rating: 4.0,
            total_reviews: 2,
        },
    )
    .await
    .unwrap();

    let view = UpdateProfileUseCase::new(repo.clone(), repo.clone())
        .execute(
            output.user.clone(),
            UpdateProfileInput {
                user: UserPatch {
                    location: Some("Medellín".to_string()),
                    ..Default::default()
                },
                profile: ProfilePatch {
                    bio: Some("Cirujano de columna".to_string()),
                    company_name: Some("ignored".to_string()),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();

    assert_eq!(view.user.location, "Medellín");
    let profile = view.profile.unwrap();
    assert_eq!(profile.as_professional().unwrap().bio, "Cirujano de columna");
    assert_eq!(profile.rating.total_reviews, 2);

    // Persisted
    let stored = GetProfileUseCase::new(repo.clone(), repo.clone())
        .execute(&output.user.user_id)
        .await
        .unwrap();
    assert_eq!(stored.user.location, "Medellín");
    assert_eq!(stored.profile.unwrap().rating.average_rating, 4.0);
}

#[tokio::test]
async fn professional_lookup_is_not_found_for_other_kinds() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let company = register(
        &repo,
        RegisterInput {
            user_type: UserType::Company,
            profile: ProfileDraft {
                company_name: Some("Clínica del Norte".to_string()),
                ..Default::default()
            },
            ..professional_input("compras@clinica.com", &[], "Bogotá")
        },
    )
    .await
    .unwrap();

    let use_case = GetProfileUseCase::new(repo.clone(), repo.clone());
    assert!(matches!(
        use_case.professional(&company.user.user_id).await,
        Err(AuthError::NotFound("Professional"))
    ));
    assert!(matches!(
        use_case.execute(&UserId::new()).await,
        Err(AuthError::NotFound("User"))
    ));
    assert!(use_case.execute(&company.user.user_id).await.is_ok());
}

#[tokio::test]
async fn list_professionals_filters_by_specialty_and_location() {
    let repo = Arc::new(MemoryAuthRepository::new());
    register(&repo, professional_input("ana@clinica.com", &["Ortopedia", "Columna"], "Bogotá"))
        .await
        .unwrap();
    register(&repo, professional_input("luis@clinica.com", &["Cardiología"], "Medellín"))
        .await
        .unwrap();
    register(&repo, professional_input("eva@clinica.com", &["Ortopedia"], "Medellín"))
        .await
        .unwrap();

    let use_case = ListProfessionalsUseCase::new(repo.clone());

    let all = use_case.execute(ProfessionalFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let ortho = use_case
        .execute(ProfessionalFilter {
            specialty: Some("Ortopedia".to_string()),
            location: None,
        })
        .await
        .unwrap();
    assert_eq!(ortho.len(), 2);

    let ortho_medellin = use_case
        .execute(ProfessionalFilter {
            specialty: Some("Ortopedia".to_string()),
            location: Some("medel".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(ortho_medellin.len(), 1);
    assert_eq!(ortho_medellin[0].user.email.as_str(), "eva@clinica.com");

    // Exact membership, not substring
    let partial = use_case
        .execute(ProfessionalFilter {
            specialty: Some("Orto".to_string()),
            location: None,
        })
        .await
        .unwrap();
    assert!(partial.is_empty());
}

#[tokio::test]
async fn list_professionals_is_capped_and_newest_first() {
    let repo = Arc::new(MemoryAuthRepository::new());
    let digest = PlainPassword::candidate(PASSWORD.to_string())
        .hash(b"")
        .unwrap();
    let base = Utc::now() - Duration::days(1);

    // Seeded directly with distinct timestamps; 105 Argon2 rounds are not needed
    let mut seeded = Vec::new();
    for i in 0..105 {
        let mut user = User::new(
            Email::new(format!("pro{i}@clinica.com")).unwrap(),
            UserType::Professional,
            format!("Profesional {i}"),
            "3001234567".to_string(),
            None,
        );
        user.created_at = base + Duration::seconds(i);
        let details = ProfileDetails::from_draft(UserType::Professional, ProfileDraft::default())
            .unwrap();
        let mut profile = Profile::new(user.user_id, details);
        profile.created_at = user.created_at;

        UserRepository::create(&*repo, &user, &Credential::new(user.user_id, digest.clone()))
            .await
            .unwrap();
        ProfileRepository::create(&*repo, &profile).await.unwrap();
        seeded.push(user.user_id);
    }

    let listed = ListProfessionalsUseCase::new(repo.clone())
        .execute(ProfessionalFilter::default())
        .await
        .unwrap();

    assert_eq!(listed.len(), 100);
    let ids: Vec<UserId> = listed.iter().map(|v| v.user.user_id).collect();
    let expected: Vec<UserId> = seeded.iter().rev().take(100).copied().collect();
    assert_eq!(ids, expected);
    assert!(
        listed
            .windows(2)
            .all(|w| w[0].user.created_at > w[1].user.created_at)
    );
}

// ============================================================================
// Compensation when the profile write fails
// ============================================================================

#[derive(Clone)]
struct BrokenProfiles;

impl ProfileRepository for BrokenProfiles {
    async fn create(&self, _profile: &Profile) -> AuthResult<()> {
        Err(AuthError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_user(&self, _user_id: &UserId, _user_type: UserType) -> AuthResult<Option<Profile>> {
        Ok(None)
    }

    async fn update(&self, _profile: &Profile) -> AuthResult<()> {
        Ok(())
    }

    async fn update_rating(
        &self,
        _user_id: &UserId,
        _user_type: UserType,
        _rating: RatingSummary,
    ) -> AuthResult<bool> {
        Ok(false)
    }

    async fn list_professionals(
        &self,
        _filter: &ProfessionalFilter,
        _limit: usize,
    ) -> AuthResult<Vec<(User, Profile)>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn failed_profile_insert_removes_the_user() {
    let users = Arc::new(MemoryAuthRepository::new());
    let use_case = RegisterUseCase::new(users.clone(), Arc::new(BrokenProfiles), config());

    let result = use_case
        .execute(professional_input("ana@clinica.com", &[], "Bogotá"))
        .await;

    assert!(matches!(result, Err(AuthError::Database(_))));
    assert_eq!(users.user_count().await, 0);
    assert!(
        !users
            .exists_by_email(&Email::new("ana@clinica.com").unwrap())
            .await
            .unwrap()
    );
}
