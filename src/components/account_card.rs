//! Reusable card component for account rows on the dashboard.

use leptos::prelude::*;

use crate::net::types::Account;

/// A card showing one account's owner, number and balance.
#[component]
pub fn AccountCard(account: Account) -> impl IntoView {
    let balance = format_balance(account.balance);

    view! {
        <div class="account-card">
            <span class="account-card__owner">{account.owner}</span>
            <span class="account-card__id">{format!("account #{}", account.id)}</span>
            <span class="account-card__balance">{balance}</span>
        </div>
    }
}

/// Two-decimal euro rendering used across the dashboard.
pub fn format_balance(balance: f64) -> String {
    format!("{balance:.2} €")
}
