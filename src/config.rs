use serde::Deserialize;

pub const API_PREFIX: &str = "/api/v1";

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: i64 = 8080;
const DEFAULT_SERVER_KEEPALIVE: i64 = 75;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host:      String,
	pub server_port:      u16,
	pub server_keepalive: u64,
	pub server_workers:   Option<usize>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", DEFAULT_SERVER_HOST)?
			.set_default("server_port", DEFAULT_SERVER_PORT)?
			.set_default("server_keepalive", DEFAULT_SERVER_KEEPALIVE)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn bind_address(&self) -> (&str, u16) {
		(self.server_host.as_str(), self.server_port)
	}
}
