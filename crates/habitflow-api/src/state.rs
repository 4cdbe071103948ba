//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use habitflow_auth::session::manager::SessionManager;
use habitflow_core::config::AppConfig;
use habitflow_core::error::AppError;
use habitflow_core::traits::storage::StorageProvider;
use habitflow_core::traits::suggestions::SuggestionProvider;
use habitflow_storage::local::LocalStorageProvider;
use habitflow_storage::proof::ProofStore;

use habitflow_database::repositories::challenge::ChallengeRepository;
use habitflow_database::repositories::completion::CompletionRepository;
use habitflow_database::repositories::habit::HabitRepository;
use habitflow_database::repositories::mood::MoodRepository;
use habitflow_database::repositories::notification::NotificationRepository;
use habitflow_database::repositories::session::SessionRepository;
use habitflow_database::repositories::user::UserRepository;

use habitflow_service::analytics::service::AnalyticsService;
use habitflow_service::challenge::service::ChallengeService;
use habitflow_service::habit::service::HabitService;
use habitflow_service::mood::service::MoodService;
use habitflow_service::notification::service::NotificationService;
use habitflow_service::suggestion::catalog::StaticCatalogProvider;
use habitflow_service::suggestion::service::SuggestionService;
use habitflow_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,

    /// Profile service
    pub user_service: Arc<UserService>,
    /// Habit service
    pub habit_service: Arc<HabitService>,
    /// Challenge service
    pub challenge_service: Arc<ChallengeService>,
    /// Mood service
    pub mood_service: Arc<MoodService>,
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// Template and suggestion service
    pub suggestion_service: Arc<SuggestionService>,
    /// Analytics service
    pub analytics_service: Arc<AnalyticsService>,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub async fn build(config: AppConfig, db_pool: PgPool) -> Result<Self, AppError> {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let habit_repo = Arc::new(HabitRepository::new(db_pool.clone()));
        let completion_repo = Arc::new(CompletionRepository::new(db_pool.clone()));
        let challenge_repo = Arc::new(ChallengeRepository::new(db_pool.clone()));
        let mood_repo = Arc::new(MoodRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

        let storage_provider: Arc<dyn StorageProvider> =
            Arc::new(LocalStorageProvider::new(&config.storage.data_root).await?);
        let proof_store = Arc::new(ProofStore::new(storage_provider, &config.storage));

        let session_manager = Arc::new(SessionManager::new(
            session_repo.clone(),
            user_repo.clone(),
            config.auth.clone(),
        ));

        let suggestion_provider: Arc<dyn SuggestionProvider> = Arc::new(StaticCatalogProvider);

        let user_service = Arc::new(UserService::new(user_repo.clone()));
        let habit_service = Arc::new(HabitService::new(
            habit_repo.clone(),
            completion_repo.clone(),
            notification_repo.clone(),
            proof_store,
        ));
        let challenge_service = Arc::new(ChallengeService::new(
            challenge_repo,
            notification_repo.clone(),
        ));
        let mood_service = Arc::new(MoodService::new(mood_repo));
        let notification_service = Arc::new(NotificationService::new(notification_repo));
        let suggestion_service = Arc::new(SuggestionService::new(
            habit_repo.clone(),
            suggestion_provider,
        ));
        let analytics_service = Arc::new(AnalyticsService::new(habit_repo, completion_repo));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            session_manager,
            user_repo,
            session_repo,
            user_service,
            habit_service,
            challenge_service,
            mood_service,
            notification_service,
            suggestion_service,
            analytics_service,
        })
    }
}
