use clap::Parser;

/// Server settings, read from flags or the environment (`.env` is honoured).
#[derive(Parser, Debug, Clone)]
#[command(name = "finance-visualizer", about = "Personal finance tracker API")]
pub struct ApiConfig {
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep records in memory instead of Postgres.
    #[clap(long, default_value_t = false)]
    pub in_memory: bool,
}

impl ApiConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
