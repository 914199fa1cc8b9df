use pendzl::{contracts::psp22::PSP22Error, math::errors::MathError};
use prediction_market::modules::market::errors::PredictionMarketError;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum GroupPoolError {
    MathError(MathError),
    PSP22Error(PSP22Error),
    PredictionMarketError(PredictionMarketError),

    UnknownPool,
    ZeroAddress,
    /// The caller is neither the pool creator nor the pool multisig.
    NotAuthorized,
    PoolClosed,
    AlreadyMember,
    NotMember,
    InvalidAmount,
    WrongDenomination,
    InsufficientMemberBalance,
    InsufficientPoolBalance,
    /// The pool already has a stake outstanding on a market.
    StakeAlreadyActive,
    NoActiveStake,
    MarketNotSettled,
    NothingToPay,
    NativeTransferFailed,
}

impl From<MathError> for GroupPoolError {
    fn from(e: MathError) -> Self {
        GroupPoolError::MathError(e)
    }
}

impl From<PSP22Error> for GroupPoolError {
    fn from(e: PSP22Error) -> Self {
        GroupPoolError::PSP22Error(e)
    }
}

impl From<PredictionMarketError> for GroupPoolError {
    fn from(e: PredictionMarketError) -> Self {
        GroupPoolError::PredictionMarketError(e)
    }
}
