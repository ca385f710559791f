//! Moving value between bidders, the escrow and the seller.
//!
//! The auction logic only ever sees [`PaymentAdapter`]; which concrete adapter
//! backs an auction is fixed by its [`PaymentMedium`] at creation time.
//! Every call into the token contract goes through the generated `try_*`
//! client method, so a refusing token surfaces as an [`Error`] instead of
//! aborting somewhere inside the auction.

use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::external::PermitTokenClient;
use crate::types::{PaymentMedium, PermitData};

pub trait PaymentAdapter {
    /// Checks that a later `collect` of `amount` from `payer` is authorized,
    /// without moving anything.
    fn precheck(&self, _env: &Env, _payer: &Address, _amount: i128) -> Result<(), Error> {
        Ok(())
    }

    /// Move `amount` from `payer` into escrow custody. All or nothing.
    fn collect(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error>;

    /// Move `amount` out of escrow custody to `payee`. All or nothing.
    fn payout(&self, env: &Env, payee: &Address, amount: i128) -> Result<(), Error>;
}

pub struct NativeValue {
    token: Address,
}

pub struct AllowanceToken {
    token: Address,
}

pub struct PermitToken {
    token: Address,
    permit: Option<PermitData>,
}

impl PaymentAdapter for NativeValue {
    fn collect(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
        // The bidder's authorization of the bid covers this transfer, which is
        // how native value gets attached to the call.
        let client = token::TokenClient::new(env, &self.token);
        let escrow = env.current_contract_address();
        match client.try_transfer(payer, &escrow, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::PaymentFailed),
        }
    }

    fn payout(&self, env: &Env, payee: &Address, amount: i128) -> Result<(), Error> {
        push_from_escrow(env, &self.token, payee, amount)
    }
}

impl PaymentAdapter for AllowanceToken {
    fn collect(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
        let client = token::TokenClient::new(env, &self.token);
        let escrow = env.current_contract_address();
        match client.try_transfer_from(&escrow, payer, &escrow, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::PaymentFailed),
        }
    }

    fn payout(&self, env: &Env, payee: &Address, amount: i128) -> Result<(), Error> {
        push_from_escrow(env, &self.token, payee, amount)
    }
}

impl PermitToken {
    /// Fails closed unless the permit is still valid, carries the owner's
    /// current nonce and covers `amount`.
    fn validate(
        &self,
        env: &Env,
        client: &PermitTokenClient,
        owner: &Address,
        permit: &PermitData,
        amount: i128,
    ) -> Result<(), Error> {
        if permit.deadline < env.ledger().timestamp() {
            return Err(Error::PermitExpired);
        }

        let nonce = match client.try_nonce(owner) {
            Ok(Ok(nonce)) => nonce,
            _ => return Err(Error::PaymentFailed),
        };
        if nonce != permit.nonce {
            return Err(Error::PermitNonceMismatch);
        }

        if permit.value < amount {
            return Err(Error::PaymentFailed);
        }
        Ok(())
    }

    /// Nothing is submitted to the token unless [`Self::validate`] passes.
    fn redeem(
        &self,
        env: &Env,
        client: &PermitTokenClient,
        owner: &Address,
        permit: &PermitData,
        amount: i128,
    ) -> Result<(), Error> {
        self.validate(env, client, owner, permit, amount)?;

        let spender = env.current_contract_address();
        match client.try_permit(
            owner,
            &spender,
            &permit.value,
            &permit.deadline,
            &permit.signature,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::PaymentFailed),
        }
    }
}

impl PaymentAdapter for PermitToken {
    fn precheck(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
        match &self.permit {
            Some(permit) => {
                let client = PermitTokenClient::new(env, &self.token);
                self.validate(env, &client, payer, permit, amount)
            }
            None => Ok(()),
        }
    }

    fn collect(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
        let client = PermitTokenClient::new(env, &self.token);
        if let Some(permit) = &self.permit {
            self.redeem(env, &client, payer, permit, amount)?;
        }

        let escrow = env.current_contract_address();
        match client.try_transfer_from(&escrow, payer, &escrow, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::PaymentFailed),
        }
    }

    fn payout(&self, env: &Env, payee: &Address, amount: i128) -> Result<(), Error> {
        let client = PermitTokenClient::new(env, &self.token);
        let escrow = env.current_contract_address();
        match client.try_transfer(&escrow, payee, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::PaymentFailed),
        }
    }
}

fn push_from_escrow(env: &Env, token: &Address, payee: &Address, amount: i128) -> Result<(), Error> {
    let client = token::TokenClient::new(env, token);
    let escrow = env.current_contract_address();
    match client.try_transfer(&escrow, payee, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::PaymentFailed),
    }
}

/// The adapter selected by an auction's payment medium.
pub enum Adapter {
    Native(NativeValue),
    Allowance(AllowanceToken),
    Permit(PermitToken),
}

impl Adapter {
    pub fn for_medium(medium: &PaymentMedium) -> Self {
        match medium {
            PaymentMedium::Native(token) => Adapter::Native(NativeValue {
                token: token.clone(),
            }),
            PaymentMedium::Allowance(token) => Adapter::Allowance(AllowanceToken {
                token: token.clone(),
            }),
            PaymentMedium::Permit(token) => Adapter::Permit(PermitToken {
                token: token.clone(),
                permit: None,
            }),
        }
    }

    pub fn with_permit(medium: &PaymentMedium, permit: PermitData) -> Result<Self, Error> {
        match medium {
            PaymentMedium::Permit(token) => Ok(Adapter::Permit(PermitToken {
                token: token.clone(),
                permit: Some(permit),
            })),
            _ => Err(Error::PermitNotSupported),
        }
    }
}

impl PaymentAdapter for Adapter {
    fn precheck(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
        match self {
            Adapter::Native(adapter) => adapter.precheck(env, payer, amount),
            Adapter::Allowance(adapter) => adapter.precheck(env, payer, amount),
            Adapter::Permit(adapter) => adapter.precheck(env, payer, amount),
        }
    }

    fn collect(&self, env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
        match self {
            Adapter::Native(adapter) => adapter.collect(env, payer, amount),
            Adapter::Allowance(adapter) => adapter.collect(env, payer, amount),
            Adapter::Permit(adapter) => adapter.collect(env, payer, amount),
        }
    }

    fn payout(&self, env: &Env, payee: &Address, amount: i128) -> Result<(), Error> {
        match self {
            Adapter::Native(adapter) => adapter.payout(env, payee, amount),
            Adapter::Allowance(adapter) => adapter.payout(env, payee, amount),
            Adapter::Permit(adapter) => adapter.payout(env, payee, amount),
        }
    }
}
