use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the DNS server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// UDP/TCP port to serve DNS on.
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    53
}
