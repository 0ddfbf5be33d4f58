//! Tagalog strings for the marketing site

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Application
    t.insert("app.name".into(), "PayNow SIMCard Wallet".into());

    // Navigation
    t.insert("nav.home".into(), "Home".into());
    t.insert("nav.solution".into(), "Solusyon".into());
    t.insert("nav.about".into(), "Tungkol Sa Amin".into());
    t.insert("nav.help".into(), "Help Center".into());
    t.insert("nav.contact".into(), "Makipag-ugnayan".into());
    t.insert("nav.dashboard".into(), "Dashboard".into());
    t.insert("nav.cards".into(), "Cards".into());
    t.insert("nav.support".into(), "Suporta".into());

    // Hero
    t.insert("hero.title".into(), "Ang Inyong SIM ay Inyong Bank".into());
    t.insert("hero.subtitle".into(), "Gumawa ng instant virtual debit cards gamit ang inyong mobile credit. Mag-shopping online, mag-book ng travel, magbayad ng bills - walang kailangang bank account.".into());
    t.insert("hero.cta".into(), "Simulan Ngayon".into());
    t.insert("hero.ussd".into(), "O mag-dial ng *123# para sa USSD access".into());

    // Features
    t.insert("features.instant.title".into(), "Instant Virtual Cards".into());
    t.insert("features.instant.desc".into(), "Gumawa ng Visa/MasterCard sa loob ng ilang segundo gamit ang SIM credit".into());
    t.insert("features.secure.title".into(), "24-Oras na Security".into());
    t.insert("features.secure.desc".into(), "Ang mga cards ay automatic na mag-expire pagkatapos ng 24 oras para sa maximum security".into());
    t.insert("features.multilingual.title".into(), "Multilingual Support".into());
    t.insert("features.multilingual.desc".into(), "Available sa Arabic, English, Urdu, Hindi at Tagalog".into());

    // Trust indicators
    t.insert("trust.licensed".into(), "UAE Central Bank Licensed".into());
    t.insert("trust.partners".into(), "Pinagkakatiwalaan ng Etisalat, DU at Virgin".into());
    t.insert("trust.users".into(), "50,000+ Active Users".into());

    // Buttons
    t.insert("button.generate_card".into(), "Gumawa ng Card".into());
    t.insert("button.view_balance".into(), "Tingnan ang Balance".into());
    t.insert("button.get_credit".into(), "Kumuha ng Credit".into());

    // Footer
    t.insert("footer.description".into(), "Pagbibigay ng kapangyarihan sa unbanked na komunidad sa UAE na may instant na access sa digital payments sa pamamagitan ng kanilang mobile SIM cards.".into());
    t.insert("footer.quickLinks".into(), "Mabilis na Links".into());
    t.insert("footer.support".into(), "Suporta".into());
    t.insert("footer.ussdAccess".into(), "USSD Access".into());
    t.insert("footer.noSmartphone".into(), "Walang smartphone? Gamitin ang USSD codes:".into());
    t.insert("footer.mainMenu".into(), "Main Menu".into());
    t.insert("footer.balance".into(), "Balance".into());
    t.insert("footer.generateCard".into(), "Gumawa ng Card".into());
    t.insert("footer.supportUssd".into(), "Suporta".into());
    t.insert("footer.availableLanguages".into(), "Available sa 5 wika".into());
    t.insert("footer.copyright".into(), "© 2024 PayNow SIMCard Wallet. Licensed ng UAE Central Bank.".into());
    t.insert("footer.privacy".into(), "Privacy Policy".into());
    t.insert("footer.terms".into(), "Terms of Service".into());
    t.insert("footer.aml".into(), "AML Policy".into());

    // Account actions
    t.insert("getStarted".into(), "Simulan".into());
    t.insert("login".into(), "Mag-login".into());
    t.insert("register".into(), "Mag-rehistro".into());

    t
}
