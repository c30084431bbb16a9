//! Trade executor: buy and sell at the current fill price.
//!
//! Both operations are all-or-nothing. A request whose preconditions fail
//! leaves the state untouched and returns `None`; there is no error value.
//! Controls should consult [`GameState::can_buy`] / [`GameState::can_sell`]
//! to disable themselves instead.

use std::fmt;

use tracing::debug;

use crate::game::state::GameState;

/// Dollar amounts offered on the buy controls.
pub const BUY_AMOUNTS: [f64; 3] = [5_000.0, 10_000.0, 20_000.0];

/// Options offered on the sell controls.
pub const SELL_AMOUNTS: [SellAmount; 4] = [
    SellAmount::Dollars(5_000.0),
    SellAmount::Dollars(10_000.0),
    SellAmount::Half,
    SellAmount::All,
];

/// How much of the position to sell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SellAmount {
    /// Sell as many shares as fit in this dollar target, capped at the holding.
    Dollars(f64),
    /// `floor(shares / 2)`.
    Half,
    /// The whole position.
    All,
}

impl fmt::Display for SellAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SellAmount::Dollars(amount) => write!(f, "{}", dollar_label(*amount)),
            SellAmount::Half => write!(f, "HALF"),
            SellAmount::All => write!(f, "ALL"),
        }
    }
}

/// Compact control label for a dollar amount, e.g. `$5K`.
pub fn dollar_label(amount: f64) -> String {
    if amount >= 1_000.0 && amount % 1_000.0 == 0.0 {
        format!("${}K", (amount / 1_000.0) as u64)
    } else {
        format!("${amount:.0}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn label(self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

/// What an executed trade did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeReceipt {
    pub side: TradeSide,
    pub shares: u64,
    pub price: f64,
    /// Cost for a buy, proceeds for a sell.
    pub value: f64,
    /// Realized profit against average cost. Always `None` for buys.
    pub profit: Option<f64>,
}

impl TradeReceipt {
    /// True for a sell that realized a gain.
    pub fn locked_profit(&self) -> bool {
        self.profit.is_some_and(|p| p > 0.0)
    }
}

/// Whole shares purchasable with `amount` at `price`.
///
/// `None` when the quotient does not fit in a share count.
fn shares_for(amount: f64, price: f64) -> Option<u64> {
    if !(price.is_finite() && price > 0.0) || !amount.is_finite() {
        return Some(0);
    }
    let quotient = (amount / price).floor();
    if quotient >= u64::MAX as f64 {
        return None;
    }
    // Negative quotients saturate to 0.
    Some(quotient as u64)
}

impl GameState {
    /// Whether a buy of `amount` would pass the cash and phase checks.
    pub fn can_buy(&self, amount: f64) -> bool {
        self.cash >= amount && !self.is_paused() && !self.is_game_over()
    }

    /// Whether any sell would pass the holding and phase checks.
    pub fn can_sell(&self) -> bool {
        self.shares > 0 && !self.is_paused() && !self.is_game_over()
    }

    /// Buy as many whole shares as `amount` covers at the fill price.
    pub fn buy(&mut self, amount: f64) -> Option<TradeReceipt> {
        if !self.can_buy(amount) {
            debug!(amount, cash = self.cash, phase = ?self.phase, "buy rejected");
            return None;
        }
        let price = self.fill_price();
        let quantity = match shares_for(amount, price) {
            Some(0) => {
                debug!(amount, price, "buy rejected: amount below one share");
                return None;
            }
            Some(n) => n,
            None => {
                debug!(amount, price, "buy rejected: share count out of range");
                return None;
            }
        };
        let Some(shares) = self.shares.checked_add(quantity) else {
            debug!(quantity, held = self.shares, "buy rejected: share count out of range");
            return None;
        };

        let cost = quantity as f64 * price;
        self.cash -= cost;
        self.shares = shares;
        self.total_invested += cost;
        self.total_trades += 1;
        debug!(quantity, price, cash = self.cash, "buy executed");

        Some(TradeReceipt {
            side: TradeSide::Buy,
            shares: quantity,
            price,
            value: cost,
            profit: None,
        })
    }

    /// Sell part or all of the position at the fill price.
    ///
    /// Cost basis uses the average cost of the holding.
    pub fn sell(&mut self, amount: SellAmount) -> Option<TradeReceipt> {
        if !self.can_sell() {
            debug!(%amount, shares = self.shares, phase = ?self.phase, "sell rejected");
            return None;
        }
        let price = self.fill_price();
        let quantity = match amount {
            SellAmount::All => self.shares,
            SellAmount::Half => self.shares / 2,
            SellAmount::Dollars(target) => shares_for(target, price)
                .map_or(self.shares, |n| n.min(self.shares)),
        };
        if quantity == 0 {
            debug!(%amount, price, "sell rejected: nothing to sell");
            return None;
        }

        let proceeds = quantity as f64 * price;
        let cost_basis = self.total_invested / self.shares as f64 * quantity as f64;
        let profit = proceeds - cost_basis;

        self.cash += proceeds;
        self.shares -= quantity;
        self.total_invested = if amount == SellAmount::All || self.shares == 0 {
            0.0
        } else {
            (self.total_invested - cost_basis).max(0.0)
        };
        self.total_trades += 1;
        debug!(quantity, price, profit, cash = self.cash, "sell executed");

        Some(TradeReceipt {
            side: TradeSide::Sell,
            shares: quantity,
            price,
            value: proceeds,
            profit: Some(profit),
        })
    }
}
