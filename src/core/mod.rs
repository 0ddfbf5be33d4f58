//! Core module - configuration, errors, and wallet record types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, StorageConfig};
pub use error::{Error, Result};
pub use types::{
    CardStatus, CardType, CreditOption, CreditOptionStatus, CreditOptionType, FundingSource,
    KycStatus, SimOperator, SupportTicket, TicketPriority, TicketStatus, Transaction,
    TransactionStatus, TransactionType, User, VirtualCard,
};
