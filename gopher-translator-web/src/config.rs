use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;

/// Command-line configuration for the server
#[derive(Debug, Clone, Parser)]
#[command(name = "gopher-web", version, about = "Gopher-speak translation server")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_port(&self) -> bool {
        self.port == DEFAULT_PORT
    }
}
