use pendzl::{
    contracts::{access_control::AccessControlError, psp22::PSP22Error},
    math::errors::MathError,
};

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum PredictionMarketError {
    MathError(MathError),
    PSP22Error(PSP22Error),
    AccessControlError(AccessControlError),

    UnknownMarket,
    /// The market no longer accepts stakes - it is not open or its resolution block was reached.
    MarketClosed,
    MarketNotOpen,
    MarketNotSettled,
    ResolutionInPast,
    ResolutionNotReached,
    InvalidOutcome,
    InvalidAmount,
    WrongDenomination,
    /// A staker may back only one outcome of a market.
    OutcomeMismatch,
    NoStake,
    AlreadyWithdrawn,
    NoWinnings,
    NativeTransferFailed,
}

impl From<MathError> for PredictionMarketError {
    fn from(e: MathError) -> Self {
        PredictionMarketError::MathError(e)
    }
}

impl From<PSP22Error> for PredictionMarketError {
    fn from(e: PSP22Error) -> Self {
        PredictionMarketError::PSP22Error(e)
    }
}

impl From<AccessControlError> for PredictionMarketError {
    fn from(e: AccessControlError) -> Self {
        PredictionMarketError::AccessControlError(e)
    }
}
