use ink::primitives::AccountId;

use crate::modules::multisig::errors::MultiSigError;

pub const ZERO_ADDRESS: [u8; 32] = [0; 32];

pub fn is_zero_address(account: &AccountId) -> bool {
    *account == AccountId::from(ZERO_ADDRESS)
}

/// Splits transaction data into the callee selector and its already encoded arguments.
pub fn split_call_data(data: &[u8]) -> Result<([u8; 4], &[u8]), MultiSigError> {
    if data.len() < 4 {
        return Err(MultiSigError::InvalidPayload);
    }
    let (selector, input) = data.split_at(4);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(selector);
    Ok((bytes, input))
}

/// Arguments pushed verbatim into the call input, without a length prefix.
pub struct CallInput<'a>(pub &'a [u8]);

impl scale::Encode for CallInput<'_> {
    fn encode_to<T: scale::Output + ?Sized>(&self, dest: &mut T) {
        dest.write(self.0);
    }
}

/// Output of a dispatched call.
///
/// Messages the wallet calls return `Result<T, E>`; the leading byte tells success from
/// failure and the encoded `T` or `E` is skipped. An empty output (a `()` message) is a success.
/// A message returning a plain value is only read as a success when its first byte is zero.
#[derive(Debug, PartialEq, Eq)]
pub enum CallOutcome {
    Succeeded,
    Failed,
}

impl scale::Decode for CallOutcome {
    fn decode<I: scale::Input>(input: &mut I) -> Result<Self, scale::Error> {
        let remaining = input.remaining_len()?.unwrap_or(0);
        if remaining == 0 {
            return Ok(CallOutcome::Succeeded);
        }
        let tag = input.read_byte()?;
        for _ in 1..remaining {
            input.read_byte()?;
        }
        Ok(if tag == 0 {
            CallOutcome::Succeeded
        } else {
            CallOutcome::Failed
        })
    }
}
