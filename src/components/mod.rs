//! Reusable view components shared by the pages.

pub mod account_card;
