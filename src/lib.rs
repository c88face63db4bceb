use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, middleware};
use env_logger::Env;
use log::info;

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::routes;
use crate::config::Config;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	// Tests start the server more than once per process.
	let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
		.try_init();

	let (host, port) = config.bind_address();
	info!("Starting Actix-Web server on {host}:{port}...");

	let mut server = HttpServer::new(|| {
		App::new()
			.wrap(middleware::Logger::default())
			.configure(routes::configure)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive));

	if let Some(workers) = config.server_workers {
		server = server.workers(workers);
	}

	server.bind((host, port))?.run().await
}
