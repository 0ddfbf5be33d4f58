//! Urdu strings for the marketing site

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Application
    t.insert("app.name".into(), "پے ناؤ سم کارڈ والیٹ".into());

    // Navigation
    t.insert("nav.home".into(), "ہوم".into());
    t.insert("nav.solution".into(), "حل".into());
    t.insert("nav.about".into(), "ہمارے بارے میں".into());
    t.insert("nav.help".into(), "ہیلپ سینٹر".into());
    t.insert("nav.contact".into(), "رابطہ کریں".into());
    t.insert("nav.dashboard".into(), "ڈیش بورڈ".into());
    t.insert("nav.cards".into(), "کارڈز".into());
    t.insert("nav.support".into(), "سپورٹ".into());

    // Hero
    t.insert("hero.title".into(), "آپ کا سم آپ کا بینک ہے".into());
    t.insert("hero.subtitle".into(), "اپنے موبائل کریڈٹ استعمال کرتے ہوئے فوری ورچوئل ڈیبٹ کارڈز بنائیں۔ آن لائن خریداری کریں، سفر بک کریں، بل ادا کریں - بینک اکاؤنٹ کی ضرورت نہیں۔".into());
    t.insert("hero.cta".into(), "ابھی شروع کریں".into());
    t.insert("hero.ussd".into(), "یا USSD رسائی کے لیے *123# ڈائل کریں".into());

    // Features
    t.insert("features.instant.title".into(), "فوری ورچوئل کارڈز".into());
    t.insert("features.instant.desc".into(), "اپنے سم کریڈٹ استعمال کرتے ہوئے سیکنڈوں میں ویزا/ماسٹرکارڈ بنائیں".into());
    t.insert("features.secure.title".into(), "24 گھنٹے کی سیکیورٹی".into());
    t.insert("features.secure.desc".into(), "زیادہ سے زیادہ سیکیورٹی کے لیے کارڈز 24 گھنٹے بعد خودکار طور پر ختم ہو جاتے ہیں".into());
    t.insert("features.multilingual.title".into(), "کثیر لسانی سپورٹ".into());
    t.insert("features.multilingual.desc".into(), "عربی، انگریزی، اردو، ہندی اور تاگالوگ میں دستیاب".into());

    // Trust indicators
    t.insert("trust.licensed".into(), "یو اے ای سنٹرل بینک لائسنس یافتہ".into());
    t.insert("trust.partners".into(), "ایٹسلات، ڈو اور ورجن کا بھروسہ".into());
    t.insert("trust.users".into(), "50,000+ فعال صارفین".into());

    // Buttons
    t.insert("button.generate_card".into(), "کارڈ بنائیں".into());
    t.insert("button.view_balance".into(), "بیلنس دیکھیں".into());
    t.insert("button.get_credit".into(), "کریڈٹ حاصل کریں".into());

    // Footer
    t.insert("footer.description".into(), "یو اے ای میں غیر بینکنگ کمیونٹی کو ان کے موبائل سم کارڈز کے ذریعے ڈیجیٹل پیمنٹس تک فوری رسائی فراہم کرنا۔".into());
    t.insert("footer.quickLinks".into(), "فوری لنکس".into());
    t.insert("footer.support".into(), "سپورٹ".into());
    t.insert("footer.ussdAccess".into(), "USSD رسائی".into());
    t.insert("footer.noSmartphone".into(), "سمارٹ فون نہیں؟ USSD کوڈز استعمال کریں:".into());
    t.insert("footer.mainMenu".into(), "مین مینو".into());
    t.insert("footer.balance".into(), "بیلنس".into());
    t.insert("footer.generateCard".into(), "کارڈ بنائیں".into());
    t.insert("footer.supportUssd".into(), "سپورٹ".into());
    t.insert("footer.availableLanguages".into(), "5 زبانوں میں دستیاب".into());
    t.insert("footer.copyright".into(), "© 2024 پے ناؤ سم کارڈ والیٹ۔ یو اے ای سنٹرل بینک سے لائسنس یافتہ۔".into());
    t.insert("footer.privacy".into(), "پرائیویسی پالیسی".into());
    t.insert("footer.terms".into(), "سروس کی شرائط".into());
    t.insert("footer.aml".into(), "AML پالیسی".into());

    // Account actions
    t.insert("getStarted".into(), "شروع کریں".into());
    t.insert("login".into(), "لاگ ان".into());
    t.insert("register".into(), "رجسٹر".into());

    t
}
