//! English strings for the marketing site

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Application
    t.insert("app.name".into(), "PayNow SIMCard Wallet".into());

    // Navigation
    t.insert("nav.home".into(), "Home".into());
    t.insert("nav.solution".into(), "Solution".into());
    t.insert("nav.about".into(), "About Us".into());
    t.insert("nav.help".into(), "Help Center".into());
    t.insert("nav.contact".into(), "Contact Us".into());
    t.insert("nav.dashboard".into(), "Dashboard".into());
    t.insert("nav.cards".into(), "Cards".into());
    t.insert("nav.support".into(), "Support".into());

    // Hero
    t.insert("hero.title".into(), "Your SIM is Your Bank".into());
    t.insert("hero.subtitle".into(), "Generate instant virtual debit cards using your mobile credit. Shop online, book travel, pay bills - no bank account needed.".into());
    t.insert("hero.cta".into(), "Get Started Now".into());
    t.insert("hero.ussd".into(), "Or dial *123# for USSD access".into());

    // Features
    t.insert("features.instant.title".into(), "Instant Virtual Cards".into());
    t.insert("features.instant.desc".into(), "Generate Visa/MasterCard in seconds using your SIM credit".into());
    t.insert("features.secure.title".into(), "24-Hour Security".into());
    t.insert("features.secure.desc".into(), "Cards auto-expire after 24 hours for maximum security".into());
    t.insert("features.multilingual.title".into(), "Multilingual Support".into());
    t.insert("features.multilingual.desc".into(), "Available in Arabic, English, Urdu, Hindi & Tagalog".into());

    // Trust indicators
    t.insert("trust.licensed".into(), "UAE Central Bank Licensed".into());
    t.insert("trust.partners".into(), "Trusted by Etisalat, DU & Virgin".into());
    t.insert("trust.users".into(), "50,000+ Active Users".into());

    // Buttons
    t.insert("button.generate_card".into(), "Generate Card".into());
    t.insert("button.view_balance".into(), "View Balance".into());
    t.insert("button.get_credit".into(), "Get Credit".into());

    // Footer
    t.insert("footer.description".into(), "Empowering the unbanked community in the UAE with instant access to digital payments through their mobile SIM cards.".into());
    t.insert("footer.quickLinks".into(), "Quick Links".into());
    t.insert("footer.support".into(), "Support".into());
    t.insert("footer.ussdAccess".into(), "USSD Access".into());
    t.insert("footer.noSmartphone".into(), "No smartphone? Use USSD codes:".into());
    t.insert("footer.mainMenu".into(), "Main Menu".into());
    t.insert("footer.balance".into(), "Balance".into());
    t.insert("footer.generateCard".into(), "Generate Card".into());
    t.insert("footer.supportUssd".into(), "Support".into());
    t.insert("footer.availableLanguages".into(), "Available in 5 languages".into());
    t.insert("footer.copyright".into(), "© 2024 PayNow SIMCard Wallet. Licensed by UAE Central Bank.".into());
    t.insert("footer.privacy".into(), "Privacy Policy".into());
    t.insert("footer.terms".into(), "Terms of Service".into());
    t.insert("footer.aml".into(), "AML Policy".into());

    // Account actions
    t.insert("getStarted".into(), "Get Started".into());
    t.insert("login".into(), "Login".into());
    t.insert("register".into(), "Register".into());

    t
}
