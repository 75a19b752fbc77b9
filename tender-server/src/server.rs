use {
    crate::{
        api,
        bid,
        config::RunOptions,
        state::Store,
        tender,
    },
    anyhow::anyhow,
    sqlx::postgres::PgPoolOptions,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let pool = PgPoolOptions::new()
        .max_connections(run_options.postgres.max_connections)
        .connect(&run_options.postgres.connection_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to the database: {:?}", err))?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|err| anyhow!("Failed to run database migrations: {:?}", err))?;

    let store = Arc::new(Store {
        tender_service: tender::service::Service::new(tender::repository::Repository::new(
            pool.clone(),
        )),
        bid_service:    bid::service::Service::new(bid::repository::Repository::new(pool)),
    });

    api::start_api(run_options, store).await
}

// A static exit flag to indicate to running threads that we're shutting down.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
