use app_state::MailLocale;
use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;

/// Long, human readable date in the given timezone, e.g. `April 17, 2024` or `17 de abril de 2024`.
#[must_use]
pub fn format_long_date(date: DateTime<Utc>, timezone: Tz, locale: MailLocale) -> String {
    let local = date.with_timezone(&timezone);
    let formatted = match locale {
        MailLocale::En => local.format_localized("%B %-d, %Y", Locale::en_US),
        MailLocale::PtBr => local.format_localized("%-d de %B de %Y", Locale::pt_BR),
    };
    formatted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_english_long_date() {
        let date = Utc.with_ymd_and_hms(2024, 4, 17, 12, 0, 0).unwrap();
        assert_eq!(
            format_long_date(date, chrono_tz::UTC, MailLocale::En),
            "April 17, 2024"
        );
    }

    #[test]
    fn formats_portuguese_long_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        assert_eq!(
            format_long_date(date, chrono_tz::UTC, MailLocale::PtBr),
            "2 de março de 2024"
        );
    }

    #[test]
    fn uses_the_configured_timezone() {
        // 02:00 UTC is still the previous evening in São Paulo.
        let date = Utc.with_ymd_and_hms(2024, 4, 21, 2, 0, 0).unwrap();
        assert_eq!(
            format_long_date(date, chrono_tz::America::Sao_Paulo, MailLocale::En),
            "April 20, 2024"
        );
    }
}
