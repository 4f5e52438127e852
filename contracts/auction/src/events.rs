use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub platform: Address,
    pub fee_rate: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub token_id: u64,
    pub seller: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reserve_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleUpdatedEvent {
    pub token_id: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub token_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinishedEvent {
    pub token_id: u64,
    pub winner: Option<Address>,
    pub winning_bid: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdatedEvent {
    pub old_rate: u32,
    pub new_rate: u32,
}

pub fn publish_initialized(e: &Env, admin: Address, platform: Address, fee_rate: u32) {
    let event = InitializedEvent {
        admin,
        platform,
        fee_rate,
    };
    e.events().publish(("auction", "init"), event);
}

pub fn publish_auction_created(
    e: &Env,
    token_id: u64,
    seller: Address,
    start_time: u64,
    end_time: u64,
    reserve_price: i128,
) {
    let event = AuctionCreatedEvent {
        token_id,
        seller,
        start_time,
        end_time,
        reserve_price,
    };
    e.events().publish(("auction", "created"), event);
}

pub fn publish_schedule_updated(e: &Env, token_id: u64, end_time: u64) {
    let event = ScheduleUpdatedEvent { token_id, end_time };
    e.events().publish(("auction", "updated"), event);
}

pub fn publish_bid_placed(e: &Env, token_id: u64, bidder: Address, amount: i128) {
    let event = BidPlacedEvent {
        token_id,
        bidder,
        amount,
    };
    e.events().publish(("auction", "bid"), event);
}

pub fn publish_auction_finished(
    e: &Env,
    token_id: u64,
    winner: Option<Address>,
    winning_bid: i128,
    fee: i128,
) {
    let event = AuctionFinishedEvent {
        token_id,
        winner,
        winning_bid,
        fee,
    };
    e.events().publish(("auction", "finished"), event);
}

pub fn publish_fee_rate_updated(e: &Env, old_rate: u32, new_rate: u32) {
    let event = FeeRateUpdatedEvent { old_rate, new_rate };
    e.events().publish(("admin", "fee_update"), event);
}
