//! Arabic strings for the marketing site

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Application
    t.insert("app.name".into(), "محفظة باي ناو للشريحة".into());

    // Navigation
    t.insert("nav.home".into(), "الرئيسية".into());
    t.insert("nav.solution".into(), "الحل".into());
    t.insert("nav.about".into(), "من نحن".into());
    t.insert("nav.help".into(), "مركز المساعدة".into());
    t.insert("nav.contact".into(), "اتصل بنا".into());
    t.insert("nav.dashboard".into(), "لوحة التحكم".into());
    t.insert("nav.cards".into(), "البطاقات".into());
    t.insert("nav.support".into(), "الدعم".into());

    // Hero
    t.insert("hero.title".into(), "شريحتك هي بنكك".into());
    t.insert("hero.subtitle".into(), "أنشئ بطاقات خصم افتراضية فورية باستخدام رصيد هاتفك المحمول. تسوق عبر الإنترنت، احجز السفر، ادفع الفواتير - لا حاجة لحساب مصرفي.".into());
    t.insert("hero.cta".into(), "ابدأ الآن".into());
    t.insert("hero.ussd".into(), "أو اطلب *123# للوصول عبر USSD".into());

    // Features
    t.insert("features.instant.title".into(), "بطاقات افتراضية فورية".into());
    t.insert("features.instant.desc".into(), "أنشئ بطاقة فيزا/ماستركارد في ثوانٍ باستخدام رصيد الشريحة".into());
    t.insert("features.secure.title".into(), "أمان على مدار 24 ساعة".into());
    t.insert("features.secure.desc".into(), "تنتهي صلاحية البطاقات تلقائياً بعد 24 ساعة لأقصى أمان".into());
    t.insert("features.multilingual.title".into(), "دعم متعدد اللغات".into());
    t.insert("features.multilingual.desc".into(), "متوفر بالعربية والإنجليزية والأردية والهندية والتاغالوغ".into());

    // Trust indicators
    t.insert("trust.licensed".into(), "مرخص من البنك المركزي الإماراتي".into());
    t.insert("trust.partners".into(), "موثوق من قبل اتصالات ودو وفيرجن".into());
    t.insert("trust.users".into(), "50,000+ مستخدم نشط".into());

    // Buttons
    t.insert("button.generate_card".into(), "إنشاء بطاقة".into());
    t.insert("button.view_balance".into(), "عرض الرصيد".into());
    t.insert("button.get_credit".into(), "احصل على ائتمان".into());

    // Footer
    t.insert("footer.description".into(), "تمكين المجتمع غير المصرفي في دولة الإمارات العربية المتحدة من الوصول الفوري إلى المدفوعات الرقمية من خلال بطاقات SIM المحمولة.".into());
    t.insert("footer.quickLinks".into(), "روابط سريعة".into());
    t.insert("footer.support".into(), "الدعم".into());
    t.insert("footer.ussdAccess".into(), "الوصول عبر USSD".into());
    t.insert("footer.noSmartphone".into(), "لا تملك هاتف ذكي؟ استخدم رموز USSD:".into());
    t.insert("footer.mainMenu".into(), "القائمة الرئيسية".into());
    t.insert("footer.balance".into(), "الرصيد".into());
    t.insert("footer.generateCard".into(), "إنشاء بطاقة".into());
    t.insert("footer.supportUssd".into(), "الدعم".into());
    t.insert("footer.availableLanguages".into(), "متوفر بـ 5 لغات".into());
    t.insert("footer.copyright".into(), "© 2024 محفظة باي ناو للشريحة. مرخصة من البنك المركزي الإماراتي.".into());
    t.insert("footer.privacy".into(), "سياسة الخصوصية".into());
    t.insert("footer.terms".into(), "شروط الخدمة".into());
    t.insert("footer.aml".into(), "سياسة مكافحة غسل الأموال".into());

    // Account actions
    t.insert("getStarted".into(), "ابدأ الآن".into());
    t.insert("login".into(), "تسجيل الدخول".into());
    t.insert("register".into(), "التسجيل".into());

    t
}
