use super::Config;

pub const GATEWAY_URL_ENV: &str = "RENDEZVOUS_GATEWAY_URL";

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(GATEWAY_URL_ENV)
            && !url.trim().is_empty()
        {
            self.wizard.gateway_url = url.trim().to_string();
        }

        if let Ok(port_str) =
            std::env::var("RENDEZVOUS_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) =
            std::env::var("RENDEZVOUS_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(host) = std::env::var("RENDEZVOUS_SMTP_HOST")
            && !host.is_empty()
        {
            self.mail.smtp_host = host;
        }
    }
}
