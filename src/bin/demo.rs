//! PayNow SIMCard Wallet - Demo CLI
//!
//! Walks through the mocked dashboard flow: sign in, pick up the profile's
//! language, issue a virtual card and file a support ticket, printing every
//! label through the resolver.

use paynow_wallet_lib::core::{Config, FundingSource, SupportTicket, Transaction};
use paynow_wallet_lib::db::{generate_card, AuthSession, CardRequest, ListQuery, RecordStore};
use paynow_wallet_lib::i18n::{DocumentState, I18n, MemoryPreferenceStore};

const DEMO_PHONE: &str = "+971501234567";

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let lang = std::env::args().nth(1).unwrap_or_else(|| "ar".to_string());

    println!("==============================================");
    println!("   PayNow SIMCard Wallet - Demo");
    println!("==============================================\n");

    // 1. Resolver
    println!("[1/4] Initializing translations...");
    let mut i18n = I18n::new(MemoryPreferenceStore::new(), DocumentState::new());
    if !i18n.set_language(&lang) {
        println!("      '{}' is not supported, staying on {}", lang, i18n.current_language());
    }
    println!("      {}: {} ({})\n", i18n.get("language"), i18n.current_descriptor().native_name, i18n.direction());

    // 2. Record store
    println!("[2/4] Opening record store...");
    let store = match Config::load().and_then(|config| RecordStore::new(&config)) {
        Ok(store) => {
            println!("      Database opened");
            store
        }
        Err(e) => {
            println!("      Warning: could not open database: {}", e);
            println!("      Continuing in memory...");
            match RecordStore::in_memory() {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("      In-memory store failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };
    println!();

    // 3. Sign in and adopt the profile's language
    println!("[3/4] {}...", i18n.get("signIn"));
    let mut auth = AuthSession::new();
    let user = match auth.login(&store, DEMO_PHONE, i18n.current_language()) {
        Ok(user) => user.clone(),
        Err(e) => {
            eprintln!("      {}", e);
            std::process::exit(1);
        }
    };
    i18n.set_language(&user.language_preference);
    println!("      {}: {}", i18n.get("phoneNumber"), user.phone_number);
    println!("      {}: {}", i18n.get("creditScore"), user.credit_score);
    println!("      {}: {:.0} AED\n", i18n.get("dailyLimit"), user.daily_limit);

    // 4. Issue a card
    println!("[4/4] {}...", i18n.get("generateCard"));
    let request = CardRequest::new(&user.id, 100.0, FundingSource::SimCredit);
    match generate_card(&store, &request) {
        Ok((card, _)) => {
            println!("      {}: {}", i18n.get("virtualCard"), card.card_number);
            println!("      {}: {}", i18n.get("expires"), card.expiry_date);
            println!("      {}", i18n.get("cardExpiresIn24Hours"));
        }
        Err(e) => eprintln!("      {}", e),
    }

    match store.list_as::<Transaction>(&ListQuery::new().filter("userId", user.id.as_str()).limit(10)) {
        Ok(transactions) => {
            println!("\n=== {} ===\n", i18n.get("recentTransactions"));
            for txn in &transactions {
                println!(
                    "  {:>8.2} {}  {}",
                    txn.amount,
                    txn.currency,
                    txn.description.as_deref().unwrap_or("-")
                );
            }
        }
        Err(e) => eprintln!("  {}", e),
    }

    if store
        .insert(&SupportTicket::new(&user.id, "General Support Request", "I need help with my PayNow account."))
        .is_ok()
    {
        println!("\n  {}", i18n.get("supportTicketCreated"));
    }

    auth.logout();
    println!("\n  {}\n", i18n.get("signOut"));
}
