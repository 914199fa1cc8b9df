use pendzl::math::errors::MathError;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum MultiSigError {
    MathError(MathError),

    /// The target of a transaction is the zero account.
    InvalidTarget,
    /// No transaction with the given id was submitted.
    UnknownProposal,
    NotAuthorizedSigner,
    AlreadyConfirmed,
    NotConfirmed,
    NotPending,
    QuorumNotMet,
    AlreadyExecuted,
    AlreadyCancelled,
    /// Only the initiator or the wallet itself may cancel.
    NotInitiator,
    /// The message may only be called by the wallet itself, through an executed transaction.
    OnlyWallet,
    NoOwners,
    ZeroAddress,
    DuplicateOwner,
    InvalidThreshold,
    /// Call data shorter than a selector.
    InvalidPayload,
    TransferFailed,
    UnderlyingCallReverted,
}

impl From<MathError> for MultiSigError {
    fn from(e: MathError) -> Self {
        MultiSigError::MathError(e)
    }
}
