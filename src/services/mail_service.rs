use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, warn};

use crate::config::Config;

/// Outbound mail. Delivery failures are logged and swallowed; a broken SMTP
/// relay must never fail a registration or reset request.
#[derive(Clone)]
pub struct MailService {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<String>,
    webapp_url: String,
}

impl MailService {
    pub fn from_config(config: &Config) -> Self {
        let transport = match (&config.mail_host, &config.mail_user, &config.mail_pass) {
            (Some(host), Some(user), Some(pass)) => {
                match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host) {
                    Ok(builder) => Some(
                        builder
                            .port(config.mail_port)
                            .credentials(Credentials::new(user.clone(), pass.clone()))
                            .build(),
                    ),
                    Err(e) => {
                        error!(error = %e, "Failed to build SMTP transport");
                        None
                    }
                }
            }
            _ => {
                warn!("Mail transport not configured, outgoing mail is disabled");
                None
            }
        };

        Self {
            transport,
            from: config.mail_from.clone().or_else(|| config.mail_user.clone()),
            webapp_url: config.webapp_url.clone(),
        }
    }

    pub async fn send_registration_mail(&self, name: &str, email: &str) {
        let body = format!(
            "<p>Hi {},</p>\
             <p>Thank you for registering with TrainTrack. You can now log in with \
             your email address <b>{}</b>.</p>",
            name, email
        );
        self.send(email, "Thank you for registering with TrainTrack", body)
            .await;
    }

    pub async fn send_reset_password_mail(&self, name: &str, email: &str, token: &str) {
        let reset_link = format!("{}/resetPassword?token={}", self.webapp_url, token);
        let body = format!(
            "<p>Hi {},</p>\
             <p>A password reset was requested for your account. Follow \
             <a href=\"{}\">this link</a> to choose a new password. The link is \
             valid for a short time and can be used once.</p>",
            name, reset_link
        );
        self.send(email, "Reset Password", body).await;
    }

    async fn send(&self, to: &str, subject: &str, html: String) {
        let Some(transport) = &self.transport else {
            warn!(to = %to, subject = %subject, "Mail not sent, transport disabled");
            return;
        };
        let Some(from) = &self.from else {
            warn!("Mail not sent, MAIL_FROM is not configured");
            return;
        };

        let message = match Message::builder()
            .from(match format!("\"TrainTrack\" <{}>", from).parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    error!(error = %e, "Invalid sender address");
                    return;
                }
            })
            .to(match to.parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    error!(error = %e, "Invalid recipient address");
                    return;
                }
            })
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
        {
            Ok(message) => message,
            Err(e) => {
                error!(error = %e, "Failed to build mail message");
                return;
            }
        };

        match transport.send(message).await {
            Ok(_) => info!(to = %to, "Mail sent: {}", subject),
            Err(e) => error!(error = %e, to = %to, "Failed to send mail"),
        }
    }
}
