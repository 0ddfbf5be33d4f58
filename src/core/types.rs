//! Wallet record types stored by the record store
//!
//! Field names serialize in camelCase so stored JSON matches what the
//! dashboard front end reads and writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mobile operator whose SIM credit funds the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimOperator {
    Etisalat,
    Du,
    Virgin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

/// Wallet user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub phone_number: String,
    pub sim_operator: SimOperator,
    /// Display language code chosen by the user
    pub language_preference: String,
    pub kyc_status: KycStatus,
    pub credit_score: u32,
    pub daily_limit: f64,
    pub monthly_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// New demo profile with the limits the dashboard hands out on first sign-in
    pub fn new(phone_number: &str, language: &str) -> Self {
        Self {
            id: String::new(),
            phone_number: phone_number.to_string(),
            sim_operator: SimOperator::Etisalat,
            language_preference: language.to_string(),
            kyc_status: KycStatus::Verified,
            credit_score: 750,
            daily_limit: 200.0,
            monthly_limit: 3000.0,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Visa,
    Mastercard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Active,
    Expired,
    Used,
}

/// Where the money loaded onto a virtual card comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    SimCredit,
    Microloan,
    SalaryAdvance,
}

impl FundingSource {
    /// Human-readable label used in transaction descriptions
    pub fn label(&self) -> &'static str {
        match self {
            FundingSource::SimCredit => "sim credit",
            FundingSource::Microloan => "microloan",
            FundingSource::SalaryAdvance => "salary advance",
        }
    }
}

/// Single-use virtual debit card, valid for 24 hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCard {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub card_number: String,
    pub cvv: String,
    /// MM/YY
    pub expiry_date: String,
    pub card_type: CardType,
    pub amount: f64,
    pub status: CardStatus,
    pub funding_source: FundingSource,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Purchase,
    Refund,
    Fee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditOptionType {
    AirtimeSplitpay,
    WorkpayAdvance,
    Microloan,
}

impl CreditOptionType {
    /// Interest rate in percent
    pub fn interest_rate(&self) -> f64 {
        match self {
            CreditOptionType::Microloan => 5.0,
            _ => 0.0,
        }
    }

    /// Repayment period in days
    pub fn repayment_period(&self) -> u32 {
        match self {
            CreditOptionType::WorkpayAdvance => 30,
            _ => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditOptionStatus {
    Available,
    Used,
    Repaid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditOption {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub option_type: CreditOptionType,
    pub amount: f64,
    pub interest_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repayment_period: Option<u32>,
    pub status: CreditOptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreditOption {
    pub fn new(user_id: &str, option_type: CreditOptionType, amount: f64) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            option_type,
            amount,
            interest_rate: option_type.interest_rate(),
            repayment_period: Some(option_type.repayment_period()),
            status: CreditOptionStatus::Available,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub message: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SupportTicket {
    pub fn new(user_id: &str, subject: &str, message: &str) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new("+971501234567", "ar");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["phoneNumber"], "+971501234567");
        assert_eq!(value["simOperator"], "etisalat");
        assert_eq!(value["languagePreference"], "ar");
        assert_eq!(value["kycStatus"], "verified");
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_credit_option_terms() {
        let loan = CreditOption::new("u1", CreditOptionType::Microloan, 300.0);
        assert_eq!(loan.interest_rate, 5.0);
        assert_eq!(loan.repayment_period, Some(7));

        let advance = CreditOption::new("u1", CreditOptionType::WorkpayAdvance, 1000.0);
        assert_eq!(advance.interest_rate, 0.0);
        assert_eq!(advance.repayment_period, Some(30));

        let value = serde_json::to_value(&advance).unwrap();
        assert_eq!(value["optionType"], "workpay_advance");
    }
}
