use std::net::TcpListener;

use actix_web::dev::Server;
use anyhow::Context;

use crate::config::Configuration;
use crate::mail::{EmailClient, LogOnlyMailer};
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))
        .context("Failed to bind the application address")?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting service on address: {}:{}",
            configuration.app.host,
            port
        );

        let recipient = configuration
            .contact
            .recipient()
            .context("Invalid contact recipient email address")?;

        let server = match configuration.email_client {
            Some(email_settings) => {
                let sender = email_settings
                    .sender()
                    .context("Invalid sender email address")?;
                let email_client = EmailClient::new(email_settings, sender, recipient)
                    .context("Failed to build the email client")?;
                run(listener, email_client)?
            }
            None => {
                tracing::warn!("No email client configured, contact messages will only be logged");
                run(listener, LogOnlyMailer)?
            }
        };

        Ok(Self {
            port,
            address: configuration.app.host,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
