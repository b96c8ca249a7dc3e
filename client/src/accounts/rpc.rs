use anyhow::{format_err, Result};
use log::{debug, warn};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{account::Account, pubkey::Pubkey};
use solciety_rewards::{GlobalStateSnapshot, Observation, ParticipantStateSnapshot};

use super::decode::{deserialize_anchor_account, StakerAccount, StateAccount};

/// One capture of both ledger accounts, taken in a single RPC round trip so
/// the two snapshots describe the same slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotPair {
    pub global: Observation<GlobalStateSnapshot>,
    pub participant: Observation<ParticipantStateSnapshot>,
}

impl SnapshotPair {
    pub fn unavailable() -> Self {
        Self {
            global: Observation::Unavailable,
            participant: Observation::Unavailable,
        }
    }
}

pub fn fetch_snapshots(
    rpc_client: &RpcClient,
    program_id: &Pubkey,
    state_account: &Pubkey,
    staker_account: Option<&Pubkey>,
) -> Result<SnapshotPair> {
    let mut load_accounts = vec![*state_account];
    load_accounts.extend(staker_account.copied());
    let mut rsps = rpc_client.get_multiple_accounts(&load_accounts)?.into_iter();

    let state = rsps.next().flatten();
    let staker = staker_account.map(|_| rsps.next().flatten());
    Ok(decode_snapshots(program_id, state, staker))
}

/// `staker` is `None` when no wallet was asked about, `Some(None)` when the
/// wallet has no staker account. Accounts not owned by `program_id` are
/// treated as undecodable.
pub fn decode_snapshots(
    program_id: &Pubkey,
    state: Option<Account>,
    staker: Option<Option<Account>>,
) -> SnapshotPair {
    let global = match state {
        Some(account) => match decode_global(program_id, &account) {
            Ok(snapshot) => Observation::Available(snapshot),
            Err(err) => {
                warn!("state account did not decode: {}", err);
                Observation::Unavailable
            }
        },
        None => {
            warn!("state account not found");
            Observation::Unavailable
        }
    };

    let participant = match staker {
        Some(Some(account)) => match decode_participant(program_id, &account) {
            Ok(snapshot) => Observation::Available(snapshot),
            Err(err) => {
                warn!("staker account did not decode: {}", err);
                Observation::Unavailable
            }
        },
        Some(None) => {
            debug!("staker account not found, wallet never staked");
            Observation::NotParticipating
        }
        None => Observation::NotParticipating,
    };

    SnapshotPair {
        global,
        participant,
    }
}

fn check_owner(program_id: &Pubkey, account: &Account) -> Result<()> {
    if account.owner != *program_id {
        return Err(format_err!("owner {} is not {}", account.owner, program_id));
    }
    Ok(())
}

fn decode_global(program_id: &Pubkey, account: &Account) -> Result<GlobalStateSnapshot> {
    check_owner(program_id, account)?;
    deserialize_anchor_account::<StateAccount>(account)?.to_snapshot()
}

fn decode_participant(program_id: &Pubkey, account: &Account) -> Result<ParticipantStateSnapshot> {
    check_owner(program_id, account)?;
    deserialize_anchor_account::<StakerAccount>(account)?.to_snapshot()
}
