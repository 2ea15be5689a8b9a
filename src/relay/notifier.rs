use super::types::InferenceResult;
use crate::{Error, Result, config::MailConfig};
use async_trait::async_trait;
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use tracing::{debug, info};

pub const SUBJECT: &str = "出生信息查询结果";

const IMPLICIT_TLS_PORT: u16 = 465;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, result: &InferenceResult) -> Result<()>;
}

/// Renders the HTML body. `message` is inserted as-is, without escaping.
pub fn render_body(message: &str) -> String {
    format!(
        r#"
<p>尊敬的用户：</p>
<p>您的结果如下：</p>
<p>详细结果：{} </p>

<p>如有任何问题，请随时与我们联系。</p>
<p>此致</p>
"#,
        message
    )
}

/// Sends one message per call over a freshly dialed SMTP connection.
pub struct SmtpNotifier {
    config: MailConfig,
}

impl SmtpNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn sender(&self) -> Result<Mailbox> {
        let address: Address = self
            .config
            .smtp_username
            .parse()
            .map_err(|e| {
                Error::smtp(format!(
                    "Invalid sender address '{}': {}",
                    self.config.smtp_username, e
                ))
            })?;
        let name = Some(self.config.sender_name.clone()).filter(|n| !n.is_empty());
        Ok(Mailbox::new(name, address))
    }

    pub fn build_message(&self, to: &str, result: &InferenceResult) -> Result<Message> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| Error::smtp(format!("Invalid recipient address '{}': {}", to, e)))?;

        Message::builder()
            .from(self.sender()?)
            .to(recipient)
            .subject(SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(render_body(&result.message))
            .map_err(|e| Error::smtp(format!("Failed to build email: {}", e)))
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let host = self.config.smtp_server.clone();
        let parameters = TlsParameters::new(host.clone())
            .map_err(|e| Error::smtp(format!("Failed to set up TLS for {}: {}", host, e)))?;
        let tls = if self.config.smtp_port == IMPLICIT_TLS_PORT {
            Tls::Wrapper(parameters)
        } else {
            Tls::Opportunistic(parameters)
        };

        Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(self.config.smtp_port)
            .tls(tls)
            .credentials(Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            ))
            .build())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, to: &str, result: &InferenceResult) -> Result<()> {
        let message = self.build_message(to, result)?;
        let transport = self.transport()?;

        debug!(
            server = %self.config.smtp_server,
            port = self.config.smtp_port,
            "Dialing SMTP server"
        );

        transport
            .send(message)
            .await
            .map_err(|e| Error::smtp(format!("Failed to send email to {}: {}", to, e)))?;

        info!(email = %to, "Email sent");
        Ok(())
    }
}
