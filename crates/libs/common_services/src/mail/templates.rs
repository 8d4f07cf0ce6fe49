use app_state::MailLocale;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Values interpolated into the invite email.
#[derive(Debug, Clone)]
pub struct InviteEmailContext<'a> {
    pub destination: &'a str,
    pub starts_at: &'a str,
    pub ends_at: &'a str,
    pub confirmation_link: &'a str,
}

/// Subject and HTML body of the trip invite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteEmail {
    pub subject: String,
    pub html: String,
}

impl InviteEmail {
    #[must_use]
    pub fn new(context: &InviteEmailContext<'_>, locale: MailLocale) -> Self {
        let destination = encode_text(context.destination);
        let starts_at = encode_text(context.starts_at);
        let ends_at = encode_text(context.ends_at);
        let link = encode_double_quoted_attribute(context.confirmation_link);

        match locale {
            MailLocale::PtBr => Self {
                subject: format!(
                    "Confirme sua presença na viagem para {}",
                    context.destination
                ),
                html: format!(
                    r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6;">
  <p>Você foi convidado(a) para participar de uma viagem para <strong>{destination}</strong> nas datas de <strong>{starts_at}</strong> até <strong>{ends_at}</strong>.</p>
  <br>
  <p>Para confirmar a sua presença na viagem, clique no link abaixo:</p>
  <br>
  <p><a href="{link}">Confirmar viagem</a></p>
  <br>
  <p>Caso você não saiba do que se trata esse email, apenas ignore-o.</p>
</div>"#
                ),
            },
            MailLocale::En => Self {
                subject: format!("Confirm your spot on the trip to {}", context.destination),
                html: format!(
                    r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6;">
  <p>You have been invited to join a trip to <strong>{destination}</strong> from <strong>{starts_at}</strong> to <strong>{ends_at}</strong>.</p>
  <br>
  <p>To confirm your spot on the trip, click the link below:</p>
  <br>
  <p><a href="{link}">Confirm trip</a></p>
  <br>
  <p>If you don't know what this email is about, just ignore it.</p>
</div>"#
                ),
            },
        }
    }
}
