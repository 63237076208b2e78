//! WhatsApp, phone and email deep links for booking inquiries.

use crate::config::Config;
use crate::i18n::{fill, Language};
use crate::models::{Localized, Yacht};

/// Deep links for one yacht (or the site in general).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub whatsapp: String,
    pub phone: String,
    pub phone_display: String,
    pub email: String,
    pub email_display: String,
}

/// Use `own` when it has content, otherwise the site default.
fn pick<'a>(own: Option<&'a str>, default: &'a str) -> &'a str {
    own.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default)
}

/// `https://wa.me/<digits>?text=<encoded>`. Non-digits are stripped from
/// the number.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    )
}

pub fn phone_link(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

pub fn email_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address.trim(),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Links for a yacht inquiry, with messages in `lang`.
pub fn yacht_links(config: &Config, yacht: &Yacht, lang: Language) -> ContactLinks {
    let strings = lang.strings();
    let name = yacht.name(lang);
    let values = [("name", name)];

    let whatsapp = pick(yacht.contact_whatsapp.as_deref(), &config.default_whatsapp);
    let phone = pick(yacht.contact_phone.as_deref(), &config.default_phone);
    let email = pick(yacht.contact_email.as_deref(), &config.default_email);

    ContactLinks {
        whatsapp: whatsapp_link(whatsapp, &fill(strings.whatsapp_message, &values)),
        phone: phone_link(phone),
        phone_display: phone.to_string(),
        email: email_link(
            email,
            &fill(strings.email_subject, &values),
            &fill(strings.email_body, &values),
        ),
        email_display: email.to_string(),
    }
}

/// Site-wide links for the footer.
pub fn site_links(config: &Config, lang: Language) -> ContactLinks {
    let strings = lang.strings();
    ContactLinks {
        whatsapp: whatsapp_link(&config.default_whatsapp, strings.general_inquiry),
        phone: phone_link(&config.default_phone),
        phone_display: config.default_phone.clone(),
        email: format!("mailto:{}", config.default_email),
        email_display: config.default_email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::yacht;
    use proptest::prelude::*;

    #[test]
    fn test_yacht_links_use_defaults() {
        let config = Config::test_default();
        let links = yacht_links(&config, &yacht("Sea Breeze", "نسيم البحر"), Language::ENGLISH);

        assert_eq!(
            links.whatsapp,
            "https://wa.me/201064283248?text=Hi%21%20I%27m%20interested%20in%20booking%20the%20Sea%20Breeze%20yacht.%20Can%20you%20provide%20more%20details%3F"
        );
        assert_eq!(links.phone, "tel:01064283248");
        assert!(links
            .email
            .starts_with("mailto:elsokhnayatch@gmail.com?subject=Yacht%20Booking%20Inquiry%20-%20Sea%20Breeze&body=Hi%2C%0A%0A"));
    }

    #[test]
    fn test_yacht_links_prefer_own_contact() {
        let config = Config::test_default();
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.contact_whatsapp = Some("+20 100 000 0000".to_string());
        y.contact_phone = Some("+20 100 000 0000".to_string());
        y.contact_email = Some("captain@example.com".to_string());

        let links = yacht_links(&config, &y, Language::ENGLISH);
        assert!(links.whatsapp.starts_with("https://wa.me/201000000000?text="));
        assert_eq!(links.phone, "tel:+201000000000");
        assert_eq!(links.phone_display, "+20 100 000 0000");
        assert!(links.email.starts_with("mailto:captain@example.com?"));
    }

    #[test]
    fn test_blank_own_contact_falls_back() {
        let config = Config::test_default();
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.contact_email = Some("  ".to_string());
        let links = yacht_links(&config, &y, Language::ENGLISH);
        assert_eq!(links.email_display, "elsokhnayatch@gmail.com");
    }

    #[test]
    fn test_arabic_message_uses_arabic_name() {
        let config = Config::test_default();
        let links = yacht_links(&config, &yacht("Sea Breeze", "نسيم البحر"), Language::ARABIC);
        let encoded_name = urlencoding::encode("نسيم البحر").into_owned();
        assert!(links.whatsapp.contains(&encoded_name));
        assert!(!links.whatsapp.contains("Sea%20Breeze"));
    }

    #[test]
    fn test_site_links() {
        let config = Config::test_default();
        let links = site_links(&config, Language::ENGLISH);
        assert_eq!(links.email, "mailto:elsokhnayatch@gmail.com");
        assert!(links.whatsapp.starts_with("https://wa.me/201064283248?text="));
    }

    proptest! {
        #[test]
        fn prop_whatsapp_text_roundtrips(message in "\\PC{0,40}") {
            let link = whatsapp_link("201064283248", &message);
            let encoded = link.split_once("?text=").unwrap().1;
            prop_assert!(!encoded.contains(' '));
            prop_assert!(!encoded.contains('&'));
            prop_assert_eq!(urlencoding::decode(encoded).unwrap(), message);
        }
    }
}
