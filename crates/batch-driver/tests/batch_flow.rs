use amm_pool::{BasicPool, Pool};
use amm_types::{Int, OrderDirection};
use batch_driver::{BatchDriver, CountingScheduler, LedgerBank, MemoryStore, Params, Scheduler, Store};
use order_pool::{RequestStatus, SwapRequest};

fn params() -> Params {
    Params {
        batch_size: 5,
        tick_precision: 4,
        fee_rate: "0.003".parse().unwrap(),
        max_price_limit_ratio: "0.1".parse().unwrap(),
        max_num_market_making_order_ticks: 3,
        min_ranged_pool_price_gap_ratio: "0.01".parse().unwrap()
    }
}

#[test]
fn a_crossing_swap_pair_settles_through_the_escrow_account() {
    let driver = BatchDriver::new(params()).unwrap();
    let mut store = MemoryStore::new();
    let mut bank = LedgerBank::new();
    bank.credit("alice", "uquote", Int::from_u64(100_000));
    bank.credit("bob", "ubase", Int::from_u64(100_000));

    let mut swaps = vec![
        SwapRequest {
            pair_id: 1,
            orderer: "alice".into(),
            direction: OrderDirection::Buy,
            price: "1.1".parse().unwrap(),
            amount: Int::from_u64(10_000),
            batches_remaining: 5,
            status: RequestStatus::Pending
        },
        SwapRequest {
            pair_id: 1,
            orderer: "bob".into(),
            direction: OrderDirection::Sell,
            price: "0.9".parse().unwrap(),
            amount: Int::from_u64(10_000),
            batches_remaining: 5,
            status: RequestStatus::Pending
        },
    ];

    let outcome = driver.execute_batch(1, &mut store, &mut bank, &mut swaps, "uquote", "ubase").unwrap();
    let outcome = outcome.expect("crossing book should match");
    assert!(outcome.matched);
    assert_eq!(outcome.total_matched, Int::from_u64(10_000));
    assert_eq!(swaps[0].status, RequestStatus::Completed);
    assert_eq!(swaps[1].status, RequestStatus::Completed);

    assert!(bank.balance("bob", "uquote").is_positive());
    assert!(bank.balance("alice", "ubase").is_positive());
    assert!(store.get_last_price(1).is_some());
}

#[test]
fn pool_depth_absorbs_a_lone_swap() {
    let driver = BatchDriver::new(params()).unwrap();
    let mut store = MemoryStore::new();
    store.set_pool(1, BasicPool::new(Int::from_u64(1_000_000), Int::from_u64(1_000_000), Int::from_u64(1000)).into());
    let mut bank = LedgerBank::new();
    bank.credit("alice", "uquote", Int::from_u64(100_000));

    let mut swaps = vec![SwapRequest {
        pair_id: 1,
        orderer: "alice".into(),
        direction: OrderDirection::Buy,
        price: "1.05".parse().unwrap(),
        amount: Int::from_u64(1_000),
        batches_remaining: 5,
        status: RequestStatus::Pending
    }];

    let outcome = driver.execute_batch(1, &mut store, &mut bank, &mut swaps, "uquote", "ubase").unwrap();
    assert!(outcome.is_some());
}

#[test]
fn scheduler_height_advances() {
    let scheduler = CountingScheduler::new();
    assert_eq!(scheduler.current_batch_height(), 0);
    scheduler.advance();
    assert_eq!(scheduler.current_batch_height(), 1);
}
