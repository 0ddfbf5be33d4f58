//! Hindi strings for the marketing site

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Application
    t.insert("app.name".into(), "पेनाउ सिमकार्ड वॉलेट".into());

    // Navigation
    t.insert("nav.home".into(), "होम".into());
    t.insert("nav.solution".into(), "समाधान".into());
    t.insert("nav.about".into(), "हमारे बारे में".into());
    t.insert("nav.help".into(), "सहायता केंद्र".into());
    t.insert("nav.contact".into(), "संपर्क करें".into());
    t.insert("nav.dashboard".into(), "डैशबोर्ड".into());
    t.insert("nav.cards".into(), "कार्ड".into());
    t.insert("nav.support".into(), "सहायता".into());

    // Hero
    t.insert("hero.title".into(), "आपका सिम आपका बैंक है".into());
    t.insert("hero.subtitle".into(), "अपने मोबाइल क्रेडिट का उपयोग करके तुरंत वर्चुअल डेबिट कार्ड बनाएं। ऑनलाइन खरीदारी करें, यात्रा बुक करें, बिल भुगतान करें - बैंक खाते की जरूरत नहीं।".into());
    t.insert("hero.cta".into(), "अभी शुरू करें".into());
    t.insert("hero.ussd".into(), "या USSD एक्सेस के लिए *123# डायल करें".into());

    // Features
    t.insert("features.instant.title".into(), "तुरंत वर्चुअल कार्ड".into());
    t.insert("features.instant.desc".into(), "अपने सिम क्रेडिट का उपयोग करके सेकंड में वीज़ा/मास्टरकार्ड बनाएं".into());
    t.insert("features.secure.title".into(), "24 घंटे की सुरक्षा".into());
    t.insert("features.secure.desc".into(), "अधिकतम सुरक्षा के लिए कार्ड 24 घंटे बाद स्वचालित रूप से समाप्त हो जाते हैं".into());
    t.insert("features.multilingual.title".into(), "बहुभाषी सहायता".into());
    t.insert("features.multilingual.desc".into(), "अरबी, अंग्रेजी, उर्दू, हिंदी और तागालोग में उपलब्ध".into());

    // Trust indicators
    t.insert("trust.licensed".into(), "यूएई सेंट्रल बैंक लाइसेंस प्राप्त".into());
    t.insert("trust.partners".into(), "एतिसलात, डीयू और वर्जिन द्वारा विश्वसनीय".into());
    t.insert("trust.users".into(), "50,000+ सक्रिय उपयोगकर्ता".into());

    // Buttons
    t.insert("button.generate_card".into(), "कार्ड बनाएं".into());
    t.insert("button.view_balance".into(), "बैलेंस देखें".into());
    t.insert("button.get_credit".into(), "क्रेडिट प्राप्त करें".into());

    // Footer
    t.insert("footer.description".into(), "यूएई में अनबैंक्ड समुदाय को उनके मोबाइल सिम कार्ड के माध्यम से डिजिटल भुगतान तक तत्काल पहुंच प्रदान करना।".into());
    t.insert("footer.quickLinks".into(), "त्वरित लिंक".into());
    t.insert("footer.support".into(), "सहायता".into());
    t.insert("footer.ussdAccess".into(), "USSD एक्सेस".into());
    t.insert("footer.noSmartphone".into(), "स्मार्टफोन नहीं है? USSD कोड का उपयोग करें:".into());
    t.insert("footer.mainMenu".into(), "मुख्य मेनू".into());
    t.insert("footer.balance".into(), "बैलेंस".into());
    t.insert("footer.generateCard".into(), "कार्ड बनाएं".into());
    t.insert("footer.supportUssd".into(), "सहायता".into());
    t.insert("footer.availableLanguages".into(), "5 भाषाओं में उपलब्ध".into());
    t.insert("footer.copyright".into(), "© 2024 पेनाउ सिमकार्ड वॉलेट। यूएई सेंट्रल बैंक द्वारा लाइसेंस प्राप्त।".into());
    t.insert("footer.privacy".into(), "गोपनीयता नीति".into());
    t.insert("footer.terms".into(), "सेवा की शर्तें".into());
    t.insert("footer.aml".into(), "AML नीति".into());

    // Account actions
    t.insert("getStarted".into(), "शुरू करें".into());
    t.insert("login".into(), "लॉगिन".into());
    t.insert("register".into(), "पंजीकरण".into());

    t
}
