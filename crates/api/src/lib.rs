mod billing_reminder;
mod error;
mod guest;
mod job_schedulers;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use billing_reminder::send_billing_reminders::{CycleReport, UseCaseError as CycleError};
pub use job_schedulers::BillingReminderScheduler;
use staywatch_infra::StaywatchContext;
use std::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    guest::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    scheduler: BillingReminderScheduler,
    scheduler_job: JoinHandle<()>,
}

impl Application {
    pub async fn new(context: StaywatchContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        let (scheduler, scheduler_job) = Application::start_job_schedulers(context);

        Ok(Self {
            server,
            port,
            scheduler,
            scheduler_job,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle to the billing reminders job, e.g. to run a cycle ad hoc
    pub fn scheduler(&self) -> BillingReminderScheduler {
        self.scheduler.clone()
    }

    fn start_job_schedulers(
        context: StaywatchContext,
    ) -> (BillingReminderScheduler, JoinHandle<()>) {
        let scheduler = BillingReminderScheduler::new(context);
        let job = scheduler.start();
        (scheduler, job)
    }

    async fn configure_server(
        context: StaywatchContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves until the server is shut down, then stops the billing reminders
    /// job and waits for a cycle in progress to finish.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let res = self.server.await;

        info!("Server stopped, waiting for the billing reminders job to finish");
        self.scheduler.stop();
        let _ = self.scheduler_job.await;

        res
    }
}
