//! Auxiliary catalog for the wallet dashboard and the site's content pages
//!
//! These strings use flat camelCase keys (`accountBalance`, `aboutUsTitle`).
//! English is the source language and defines every key; the other tables
//! are partial and fall back to English per key.

use super::source::LookupSource;
use std::collections::HashMap;

type Table = HashMap<&'static str, &'static str>;

/// Dashboard and page strings, consulted after the primary catalog
#[derive(Debug, Clone)]
pub struct DashboardCatalog {
    english: Table,
    tables: HashMap<&'static str, Table>,
}

impl DashboardCatalog {
    pub fn new() -> Self {
        let tables: HashMap<_, Table> = [("ar", AR), ("ur", UR), ("hi", HI), ("tl", TL)]
            .into_iter()
            .map(|(lang, table)| (lang, table.iter().copied().collect()))
            .collect();

        Self {
            english: EN.iter().copied().collect(),
            tables,
        }
    }

    /// Value for `key` in `lang`, falling back to English
    pub fn get(&self, key: &str, lang: &str) -> Option<&'static str> {
        self.tables
            .get(lang)
            .and_then(|table| table.get(key))
            .or_else(|| self.english.get(key))
            .copied()
    }

    /// Every key, in declaration order
    pub fn keys(&self) -> Vec<&'static str> {
        EN.iter().map(|&(k, _)| k).collect()
    }
}

impl Default for DashboardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupSource for DashboardCatalog {
    fn name(&self) -> &str {
        "dashboard"
    }

    fn lookup(&self, key: &str, lang: &str) -> Option<&str> {
        self.get(key, lang)
    }

    fn keys(&self) -> Vec<&str> {
        DashboardCatalog::keys(self)
    }
}

// ─── English (source language, all keys defined here) ───────────────

const EN: &[(&str, &str)] = &[
    // Shell
    ("dashboard", "Dashboard"),
    ("welcome", "Welcome back"),
    ("loading", "Loading..."),
    ("cards", "Cards"),
    ("history", "History"),
    ("analytics", "Analytics"),
    ("credit", "Credit"),
    ("profile", "Profile"),
    ("support", "Support"),
    ("notifications", "Notifications"),
    ("signIn", "Sign In"),
    ("signOut", "Sign Out"),
    ("signInRequired", "Please sign in to access your wallet"),
    ("viewAll", "View All"),
    ("viewDetails", "View Details"),
    ("hideDetails", "Hide Details"),
    ("cancel", "Cancel"),
    ("apply", "Apply"),
    ("configure", "Configure"),
    ("manage", "Manage"),
    ("export", "Export"),
    // Balance and limits
    ("accountBalance", "Account Balance"),
    ("availableBalance", "Available Balance"),
    ("useYourSIMBalance", "Use your SIM balance to pay anywhere online"),
    ("dailyLimit", "Daily Limit"),
    ("monthlyLimit", "Monthly Limit"),
    ("accountLimits", "Account Limits"),
    ("increaseLimitsMessage", "Verify your account to increase your limits"),
    // Cards
    ("activeCards", "Active Cards"),
    ("noActiveCards", "No active cards"),
    ("generateCard", "Generate Card"),
    ("generateFirstCard", "Generate your first virtual card"),
    ("generateVirtualCard", "Generate Virtual Card"),
    ("createInstantCard", "Create an instant card funded by your mobile credit"),
    ("generating", "Generating..."),
    ("virtualCard", "Virtual Card"),
    ("cardPreview", "Card Preview"),
    ("cardExpiresIn24Hours", "This card expires in 24 hours"),
    ("24hExpiry", "24h expiry"),
    ("expires", "Expires"),
    ("selectAmount", "Select Amount"),
    ("customAmount", "Custom Amount"),
    ("selectFundingSource", "Select Funding Source"),
    ("simCredit", "SIM Credit"),
    ("microLoan", "Micro Loan"),
    ("salaryAdvance", "Salary Advance"),
    ("useAirtimeCredit", "Use your airtime credit"),
    ("instantMicroCredit", "Instant micro-credit"),
    ("workPayAdvance", "WorkPay salary advance"),
    ("securityNotice", "Never share your card details or CVV with anyone"),
    ("active", "Active"),
    ("used", "Used"),
    ("available", "Available"),
    // Transactions
    ("recentTransactions", "Recent Transactions"),
    ("transactionHistory", "Transaction History"),
    ("transaction", "Transaction"),
    ("noTransactions", "No transactions"),
    ("noTransactionsYet", "No transactions yet"),
    ("noTransactionsFound", "No transactions found"),
    ("tryAdjustingFilters", "Try adjusting your filters"),
    ("searchTransactions", "Search transactions"),
    ("viewAllTransactions", "View All Transactions"),
    ("allStatuses", "All Statuses"),
    ("allTypes", "All Types"),
    ("purchase", "Purchase"),
    ("refund", "Refund"),
    ("fee", "Fee"),
    ("pending", "Pending"),
    ("completed", "Completed"),
    ("failed", "Failed"),
    ("amount", "Amount"),
    ("category", "Category"),
    ("created", "Created"),
    ("totalSpent", "Total Spent"),
    ("totalRefunds", "Total Refunds"),
    ("totalTransactions", "Total Transactions"),
    ("completedTransactions", "Completed Transactions"),
    // Analytics
    ("spendingInsights", "Spending Insights"),
    ("spendingByCategory", "Spending by Category"),
    ("weeklySpending", "Weekly Spending"),
    ("averageTransaction", "Average Transaction"),
    ("avgSpending", "Avg. Spending"),
    ("topCategory", "Top Category"),
    ("mostActiveDay", "Most Active Day"),
    ("ofTotalSpending", "of total spending"),
    ("spendingIncreased", "Your spending increased this month"),
    ("cardUsageAnalysis", "Card Usage Analysis"),
    ("smartInsights", "Smart Insights"),
    ("viewDetailedReport", "View Detailed Report"),
    ("thisMonth", "This Month"),
    // Credit
    ("creditOptions", "Credit Options"),
    ("yourCreditOptions", "Your Credit Options"),
    ("availableCreditOptions", "Available Credit Options"),
    ("airtimeSplitPay", "Airtime SplitPay"),
    ("buyNowPayLaterAirtime", "Buy now, pay later with your airtime"),
    ("creditScore", "Credit Score"),
    ("creditScoreBased", "Based on your telco usage"),
    ("basedOnTelcoUsage", "Based on telco usage"),
    ("creditScoreImproved", "Your credit score improved"),
    ("improvedThisMonth", "improved this month"),
    ("improveCreditScore", "Improve Your Credit Score"),
    ("excellent", "Excellent"),
    ("points", "points"),
    ("interestRate", "Interest Rate"),
    ("repaymentPeriod", "Repayment Period"),
    ("days", "days"),
    ("maxAmount", "Max Amount"),
    ("instantApproval", "Instant approval"),
    ("noInterestFees", "No interest fees"),
    ("flexibleRepayment", "Flexible repayment"),
    ("automaticRepayment", "Automatic repayment"),
    ("automaticDeduction", "Automatic deduction from airtime"),
    ("salaryDeduction", "Salary deduction"),
    ("payrollDeduction", "Payroll deduction"),
    ("employerVerification", "Employer verification"),
    ("verifyEmployment", "Verify Employment"),
    ("salaryAdvanceEmployers", "Available for partner employers"),
    ("buildCreditHistory", "Build your credit history"),
    ("timelyRepayments", "Make timely repayments"),
    ("maintainActiveUsage", "Keep your SIM active"),
    ("regularAirtimeRecharge", "Recharge airtime regularly"),
    ("higherCreditLimits", "Unlock higher credit limits"),
    ("alreadyActive", "Already Active"),
    // Profile
    ("accountInformation", "Account Information"),
    ("manageAccountSettings", "Manage your account settings"),
    ("accountId", "Account ID"),
    ("accountCreated", "Account Created"),
    ("lastUpdated", "Last Updated"),
    ("phoneNumber", "Phone Number"),
    ("simOperator", "SIM Operator"),
    ("kycStatus", "KYC Status"),
    ("language", "Language"),
    ("currentLanguage", "Current Language"),
    ("editProfile", "Edit Profile"),
    ("saveChanges", "Save Changes"),
    ("settingsSupport", "Settings & Support"),
    ("security", "Security"),
    // Support
    ("customerSupport", "Customer Support"),
    ("supportTicketCreated", "Support ticket created. We will contact you shortly."),
    ("payNowAssistant", "PayNow Assistant"),
    ("onlineNow", "Online now"),
    ("agentConnected", "An agent has joined the chat"),
    ("speakToAgent", "Speak to an Agent"),
    ("typeMessage", "Type a message..."),
    ("startChat", "Start Chat"),
    ("callSupport", "Call Support"),
    ("callNow", "Call Now"),
    ("whatsappNow", "WhatsApp Now"),
    ("urgentSupport", "Urgent Support"),
    ("needImmediateHelp", "Need immediate help?"),
    ("quickHelp", "Quick Help"),
    ("cardHelp", "Card Help"),
    ("transactionIssue", "Transaction Issue"),
    ("technicalSupport", "Technical Support"),
    ("generalInquiry", "General Inquiry"),
    ("subject", "Subject"),
    ("message", "Message"),
    ("sendMessage", "Send Message"),
    ("markAllRead", "Mark all as read"),
    ("noNotifications", "No notifications"),
    ("viewAllNotifications", "View All Notifications"),
    ("noResultsFound", "No results found"),
    ("searchPlaceholder", "Search for help..."),
    // About page
    ("aboutUsTitle", "About PayNow SIMCard Wallet"),
    ("aboutUsSubtitle", "Bridging the financial divide in the UAE through innovative fintech-telecom solutions."),
    ("ourMission", "Our Mission"),
    ("missionDescription", "PayNow SIMCard Wallet was founded with a simple yet powerful mission: to provide financial access to the 2.3 million unbanked residents in the UAE who earn less than AED 5,000 per month."),
    ("missionDetails", "We recognized that traditional banking excludes many hardworking individuals - domestic helpers, construction workers, delivery drivers, and students - who contribute significantly to the UAE economy but lack access to digital payment services."),
    ("ourVision", "Our Vision"),
    ("visionDescription", "A UAE where every resident, regardless of income or banking status, has access to secure, convenient digital financial services through their mobile phone."),
    ("impactNumbers", "Our Impact"),
    ("ourValues", "Our Values"),
    ("valuesDescription", "The principles that guide everything we do at PayNow SIMCard Wallet."),
    ("ourTeam", "Our Team"),
    ("teamDescription", "Meet the diverse team of fintech, telecom, and community experts building the future of financial inclusion."),
    ("getInTouch", "Get in Touch"),
    ("contactDescription", "Have questions about our mission or want to learn more about our impact? We'd love to hear from you."),
    ("contactUs", "Contact Us"),
    // Solution page
    ("solutionHeroTitle", "Complete Fintech Solution"),
    ("solutionHeroSubtitle", "Empowering the unbanked with instant virtual cards, mobile payments, and financial inclusion through telecom integration."),
    ("ourSolutions", "Our Solutions"),
    ("solutionsDescription", "Comprehensive fintech-telecom solutions designed for financial inclusion in the UAE."),
    ("technicalArchitecture", "Technical Architecture"),
    ("architectureDescription", "Built on secure, scalable infrastructure with telco integration and regulatory compliance."),
    ("readyToStart", "Ready to Get Started?"),
    ("joinThousands", "Join thousands of UAE residents who have gained access to digital payments through PayNow SIMCard Wallet."),
    ("getStarted", "Get Started Now"),
    // Help center
    ("helpCenterTitle", "Help Center"),
    ("helpCenterSubtitle", "Find answers to your questions and get the support you need."),
    ("frequentlyAsked", "Frequently Asked Questions"),
    ("needMoreHelp", "Need More Help?"),
    ("supportDescription", "Our multilingual support team is here to help you in Arabic, English, Urdu, Hindi, and Tagalog."),
    ("stillNeedHelp", "Still Need Help?"),
    ("contactTeam", "Our support team is available 24/7 to assist you with any questions or issues."),
    // Contact page
    ("contactUsTitle", "Contact Us"),
    ("contactUsSubtitle", "We're here to help. Reach out to us anytime and we'll get back to you as soon as possible."),
    ("fullName", "Full Name"),
    ("enterName", "Enter your full name"),
    ("emailAddress", "Email Address"),
    ("enterEmail", "Enter your email"),
    ("enterSubject", "Enter message subject"),
    ("enterMessage", "Enter your message..."),
    ("partnership", "Partnership"),
    ("mediaPress", "Media & Press"),
    ("contactDepartments", "Contact Departments"),
    ("departmentsDescription", "Reach out to the right department for faster assistance."),
    ("visitOurOffice", "Visit Our Office"),
    ("officeDescription", "Located in the heart of Dubai's financial district."),
    ("mapPlaceholder", "Interactive map would be displayed here"),
];

// ─── Arabic ─────────────────────────────────────────────────────────

const AR: &[(&str, &str)] = &[
    ("dashboard", "لوحة التحكم"),
    ("welcome", "مرحباً بعودتك"),
    ("loading", "جارٍ التحميل..."),
    ("cards", "البطاقات"),
    ("history", "السجل"),
    ("profile", "الملف الشخصي"),
    ("support", "الدعم"),
    ("signIn", "تسجيل الدخول"),
    ("signOut", "تسجيل الخروج"),
    ("accountBalance", "رصيد الحساب"),
    ("availableBalance", "الرصيد المتاح"),
    ("dailyLimit", "الحد اليومي"),
    ("monthlyLimit", "الحد الشهري"),
    ("activeCards", "البطاقات النشطة"),
    ("generateCard", "إنشاء بطاقة"),
    ("recentTransactions", "المعاملات الأخيرة"),
    ("creditScore", "درجة الائتمان"),
    ("phoneNumber", "رقم الهاتف"),
    ("language", "اللغة"),
    ("saveChanges", "حفظ التغييرات"),
    ("cancel", "إلغاء"),
    ("aboutUsTitle", "حول محفظة PayNow SIMCard"),
    ("ourMission", "مهمتنا"),
    ("ourVision", "رؤيتنا"),
    ("ourTeam", "فريقنا"),
    ("helpCenterTitle", "مركز المساعدة"),
    ("frequentlyAsked", "الأسئلة الشائعة"),
    ("contactUsTitle", "اتصل بنا"),
    ("fullName", "الاسم الكامل"),
    ("emailAddress", "البريد الإلكتروني"),
];

// ─── Urdu ───────────────────────────────────────────────────────────

const UR: &[(&str, &str)] = &[
    ("dashboard", "ڈیش بورڈ"),
    ("cards", "کارڈز"),
    ("profile", "پروفائل"),
    ("support", "سپورٹ"),
    ("accountBalance", "اکاؤنٹ بیلنس"),
    ("generateCard", "کارڈ بنائیں"),
    ("language", "زبان"),
    ("ourMission", "ہمارا مشن"),
    ("helpCenterTitle", "مدد مرکز"),
    ("contactUsTitle", "ہم سے رابطہ کریں"),
];

// ─── Hindi ──────────────────────────────────────────────────────────

const HI: &[(&str, &str)] = &[
    ("dashboard", "डैशबोर्ड"),
    ("cards", "कार्ड"),
    ("profile", "प्रोफ़ाइल"),
    ("support", "सहायता"),
    ("accountBalance", "खाता शेष"),
    ("generateCard", "कार्ड बनाएं"),
    ("language", "भाषा"),
    ("ourMission", "हमारा मिशन"),
    ("helpCenterTitle", "सहायता केंद्र"),
    ("contactUsTitle", "संपर्क करें"),
];

// ─── Tagalog ────────────────────────────────────────────────────────

const TL: &[(&str, &str)] = &[
    ("support", "Suporta"),
    ("generateCard", "Gumawa ng Card"),
    ("language", "Wika"),
    ("ourMission", "Ang Aming Misyon"),
    ("contactUsTitle", "Makipag-ugnayan sa Amin"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_english_keys_unique() {
        let keys: HashSet<_> = EN.iter().map(|&(k, _)| k).collect();
        assert_eq!(keys.len(), EN.len());
    }

    #[test]
    fn test_partial_tables_are_subsets_of_english() {
        let english: HashSet<_> = EN.iter().map(|&(k, _)| k).collect();
        for table in [AR, UR, HI, TL] {
            for &(key, _) in table {
                assert!(english.contains(key), "{} has no English value", key);
            }
        }
    }

    #[test]
    fn test_falls_back_to_english() {
        let dash = DashboardCatalog::new();
        assert_eq!(dash.get("generateCard", "ar"), Some("إنشاء بطاقة"));
        assert_eq!(dash.get("securityNotice", "ar"), Some("Never share your card details or CVV with anyone"));
        assert_eq!(dash.get("securityNotice", "xx"), Some("Never share your card details or CVV with anyone"));
    }

    #[test]
    fn test_content_page_keys() {
        let dash = DashboardCatalog::new();
        assert_eq!(dash.get("aboutUsTitle", "en"), Some("About PayNow SIMCard Wallet"));
        assert_eq!(dash.get("ourMission", "ur"), Some("ہمارا مشن"));
        assert_eq!(dash.get("getInTouch", "hi"), Some("Get in Touch"));
        assert_eq!(dash.get("enterEmail", "tl"), Some("Enter your email"));
    }

    #[test]
    fn test_keys_follow_english_table() {
        let dash = DashboardCatalog::new();
        let keys = dash.keys();
        assert_eq!(keys.len(), EN.len());
        assert_eq!(keys.first(), Some(&"dashboard"));
        assert!(keys.contains(&"solutionHeroTitle"));
    }

    #[test]
    fn test_unknown_key() {
        let dash = DashboardCatalog::new();
        assert_eq!(dash.get("unknownKey123", "en"), None);
        assert_eq!(dash.get("unknownKey123", "ur"), None);
    }
}
