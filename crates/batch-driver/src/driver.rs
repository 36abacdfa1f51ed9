//! Ties pool projection, request translation and matching together into one
//! batch-auction cycle, then settles the result through a [`BankPort`].
//!
//! Settlement routes every fill through a single per-pair escrow account
//! rather than threading exact buyer/seller pairs through the matcher: the
//! matcher only guarantees a volume-correct fill, not a specific pairing, so
//! an escrow leg (debit all buyers/credit all sellers, and vice versa for the
//! other coin) is the simplest settlement that is still exactly balanced.
//! This is a deliberate simplification over `original_source/`'s per-message
//! bank keeper calls, recorded in DESIGN.md.

use amm_pool::{Pool, pool_buy_orders, pool_sell_orders};
use amm_types::{DefaultOrderer, Int, Orderer, TickGrid};
use matching_engine::{MatchEngine, MatchOutcome, OrderBook};
use order_pool::{RequestStatus, SwapRequest};
use tracing::{info, warn};

use crate::bulk_send::BulkSendCoinsOperation;
use crate::error::BatchResult;
use crate::params::Params;
use crate::ports::{BankPort, Store};

const ESCROW_ACCOUNT: &str = "pair-escrow";

#[derive(Copy, Clone, Debug)]
enum Origin {
    Pool,
    Swap(usize)
}

pub struct BatchDriver {
    params: Params
}

impl BatchDriver {
    pub fn new(params: Params) -> BatchResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Runs one batch for `pair_id`: projects the pool's depth (if a pool
    /// exists for the pair), merges in every still-pending `swaps` entry,
    /// matches the combined book, settles fills through `bank`, and prunes
    /// expired swaps. Returns the match outcome, or `None` if nothing in the
    /// book crossed.
    pub fn execute_batch(
        &self,
        pair_id: u64,
        store: &mut impl Store,
        bank: &mut impl BankPort,
        swaps: &mut [SwapRequest],
        quote_denom: &str,
        base_denom: &str
    ) -> BatchResult<Option<MatchOutcome>> {
        let grid = TickGrid::new(self.params.tick_precision);
        let orderer = DefaultOrderer::new(grid);
        let mut pool = store.get_pool(pair_id);

        let mut book = OrderBook::new();
        let mut origins_buy = Vec::new();
        let mut origins_sell = Vec::new();

        if let Some(pool) = &pool {
            for order in pool_buy_orders(pool, &grid, self.params.max_num_market_making_order_ticks as usize, &orderer)
            {
                book.push(order);
                origins_buy.push(Origin::Pool);
            }
            for order in
                pool_sell_orders(pool, &grid, self.params.max_num_market_making_order_ticks as usize, &orderer)
            {
                book.push(order);
                origins_sell.push(Origin::Pool);
            }
        }
        for (idx, swap) in swaps.iter().enumerate() {
            if swap.status != RequestStatus::Pending {
                continue;
            }
            book.push(orderer.order(swap.direction, swap.price.clone(), swap.amount.clone()));
            match swap.direction {
                amm_types::OrderDirection::Buy => origins_buy.push(Origin::Swap(idx)),
                amm_types::OrderDirection::Sell => origins_sell.push(Origin::Swap(idx))
            }
        }

        let last_price = store.get_last_price(pair_id);
        let engine = MatchEngine::new();
        let outcome = engine.match_book(&mut book, last_price.as_ref());

        if !outcome.matched {
            order_pool::prune_expired(swaps);
            return Ok(None);
        }

        let mut quote_op = BulkSendCoinsOperation::new(quote_denom);
        let mut base_op = BulkSendCoinsOperation::new(base_denom);
        let mut pool_rx_delta = Int::zero();
        let mut pool_ry_delta = Int::zero();
        let mut pool_rx_spent = Int::zero();
        let mut pool_ry_spent = Int::zero();

        for (order, origin) in book.buys().iter().zip(origins_buy.iter()) {
            if !order.is_matched() {
                continue;
            }
            match origin {
                Origin::Swap(idx) => {
                    let account = swaps[*idx].orderer.clone();
                    quote_op.queue_send_coins(&account, ESCROW_ACCOUNT, order.paid().clone());
                    base_op.queue_send_coins(ESCROW_ACCOUNT, &account, order.received().clone());
                    mark_filled(&mut swaps[*idx], order.open_amount());
                }
                Origin::Pool => {
                    pool_rx_spent = &pool_rx_spent + order.paid();
                    pool_ry_delta = &pool_ry_delta + order.received();
                }
            }
        }
        for (order, origin) in book.sells().iter().zip(origins_sell.iter()) {
            if !order.is_matched() {
                continue;
            }
            match origin {
                Origin::Swap(idx) => {
                    let account = swaps[*idx].orderer.clone();
                    base_op.queue_send_coins(&account, ESCROW_ACCOUNT, order.paid().clone());
                    quote_op.queue_send_coins(ESCROW_ACCOUNT, &account, order.received().clone());
                    mark_filled(&mut swaps[*idx], order.open_amount());
                }
                Origin::Pool => {
                    pool_ry_spent = &pool_ry_spent + order.paid();
                    pool_rx_delta = &pool_rx_delta + order.received();
                }
            }
        }

        quote_op.run(bank)?;
        base_op.run(bank)?;

        if let Some(p) = &mut pool {
            let (rx, ry) = p.balances();
            let rx = (&rx + &pool_rx_delta).checked_sub(&pool_rx_spent).unwrap_or_else(Int::zero);
            let ry = (&ry + &pool_ry_delta).checked_sub(&pool_ry_spent).unwrap_or_else(Int::zero);
            p.set_balances(rx, ry, true);
            store.set_pool(pair_id, p.clone());
        }

        if let Some(price) = &outcome.clearing_price {
            store.set_last_price(pair_id, price.clone());
        }
        if outcome.dust.is_positive() {
            warn!(pair_id, dust = %outcome.dust, "batch left unmatched dust volume");
        } else {
            info!(pair_id, matched = %outcome.total_matched, "batch matched cleanly");
        }

        order_pool::prune_expired(swaps);
        Ok(Some(outcome))
    }
}

fn mark_filled(swap: &mut SwapRequest, remaining_open: &Int) {
    swap.amount = remaining_open.clone();
    if remaining_open.is_zero() {
        swap.status = RequestStatus::Completed;
    }
}
