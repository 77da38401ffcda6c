// Site-wide settings baked in at compile time. Set NES_CONTACT_EMAIL when
// building to route contact requests to another mailbox.

const DEFAULT_CONTACT_EMAIL: &str = "contact@nes-sarlu.cd";

/// Bracketed prefix of every contact request subject
pub const SITE_TAG: &str = "NES";

pub const LEGAL_NAME: &str = "NEEMA ENGENEERING SUPPLY SARLU";
pub const SHORT_NAME: &str = "NES Sarlu";
pub const LEGAL_FORM: &str = "SARLU - Société à Responsabilité Limitée Unipersonnelle";
pub const COPYRIGHT_YEAR: u16 = 2025;

pub const HEAD_OFFICE: [&str; 2] = ["N°13 Avenue Chemin Public", "Lubumbashi, Haut-Katanga, RDC"];

/// Numbers shown in the red banner above the navigation
pub const BANNER_LINES: [&str; 2] = ["+243 997 662 228", "+243 978 005 859"];

/// Numbers listed in the contact section
pub const DIRECT_LINES: [&str; 2] = ["+243 810 871 543", "+243 997 662 228"];

pub const CATALOGUE_PDF: &str = "/assets/catalogue.pdf";

pub fn get_contact_email() -> &'static str {
    option_env!("NES_CONTACT_EMAIL")
        .filter(|email| !email.trim().is_empty())
        .unwrap_or(DEFAULT_CONTACT_EMAIL)
}

/// `tel:` link for a displayed phone number.
pub fn tel_href(display: &str) -> String {
    let digits: String = display.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}
