pub mod payout;
