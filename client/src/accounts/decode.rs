//! Read-only decoding of the staking pool's zero-copy accounts.

use anchor_lang::{error::ErrorCode, solana_program::hash::hash, AccountDeserialize};
use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use solana_sdk::account::Account;
use solciety_rewards::{
    states::{BALANCE_SERIES_DAYS, SUPPLY_HORIZON_DAYS},
    GlobalStateSnapshot, ParticipantStateSnapshot,
};

pub const DISCRIMINATOR_LEN: usize = 8;

pub fn deserialize_anchor_account<T: AccountDeserialize>(account: &Account) -> Result<T> {
    let mut data: &[u8] = &account.data;
    T::try_deserialize(&mut data).map_err(Into::into)
}

/// `sha256("account:<name>")[..8]`, the prefix anchor writes in front of
/// every account it owns.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let preimage = format!("account:{}", name);
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..DISCRIMINATOR_LEN]);
    discriminator
}

fn check_discriminator(data: &[u8], name: &str) -> anchor_lang::Result<()> {
    let discriminator = data
        .get(..DISCRIMINATOR_LEN)
        .ok_or(ErrorCode::AccountDiscriminatorNotFound)?;
    if discriminator != account_discriminator(name) {
        return Err(ErrorCode::AccountDiscriminatorMismatch.into());
    }
    Ok(())
}

/// Copies the body following the discriminator; account data carries no
/// alignment guarantee, so the body is never cast in place.
fn read_body<T: Pod>(buf: &mut &[u8]) -> anchor_lang::Result<T> {
    let data: &[u8] = *buf;
    let end = DISCRIMINATOR_LEN + std::mem::size_of::<T>();
    let body = data
        .get(DISCRIMINATOR_LEN..end)
        .ok_or(ErrorCode::AccountDidNotDeserialize)?;
    let value =
        bytemuck::try_pod_read_unaligned(body).map_err(|_| ErrorCode::AccountDidNotDeserialize)?;
    *buf = &data[end..];
    Ok(value)
}

/// On-chain layout of the pool's global `State` account.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StateAccount {
    pub admin_id: [u8; 32],
    pub reward_token_mint_id: [u8; 32],
    pub deployed_at: i64,
    pub last_updated_at: i64,
    pub total_num_locked_nfts: u64,
    /// Index 0 starts on the day the program was deployed.
    pub venft_supply: [u64; SUPPLY_HORIZON_DAYS],
}

impl AccountDeserialize for StateAccount {
    fn try_deserialize(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        check_discriminator(*buf, "State")?;
        Self::try_deserialize_unchecked(buf)
    }

    fn try_deserialize_unchecked(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        read_body(buf)
    }
}

impl StateAccount {
    pub fn to_snapshot(&self) -> Result<GlobalStateSnapshot> {
        Ok(GlobalStateSnapshot::new(
            self.deployed_at,
            self.last_updated_at,
            self.total_num_locked_nfts,
            self.venft_supply.to_vec(),
        )?)
    }
}

/// On-chain layout of a per-wallet `Staker` account.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StakerAccount {
    pub staker_id: [u8; 32],
    /// Index 0 starts from the day the staker was last updated.
    pub venft_balance: [u64; BALANCE_SERIES_DAYS],
    pub num_locked_nfts: u64,
    pub num_rewards_claimable: u64,
    pub last_updated_at: i64,
    pub last_claimed_at: i64,
}

impl AccountDeserialize for StakerAccount {
    fn try_deserialize(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        check_discriminator(*buf, "Staker")?;
        Self::try_deserialize_unchecked(buf)
    }

    fn try_deserialize_unchecked(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
        read_body(buf)
    }
}

impl StakerAccount {
    pub fn to_snapshot(&self) -> Result<ParticipantStateSnapshot> {
        Ok(ParticipantStateSnapshot::new(
            self.staker_id,
            self.venft_balance.to_vec(),
            self.num_locked_nfts,
            self.num_rewards_claimable,
            self.last_updated_at,
            self.last_claimed_at,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn account_with(data: Vec<u8>) -> Account {
        Account {
            lamports: 1,
            data,
            owner: Pubkey::new_unique(),
            executable: false,
            rent_epoch: 0,
        }
    }

    fn encode<T: Pod>(name: &str, body: &T) -> Vec<u8> {
        let mut data = account_discriminator(name).to_vec();
        data.extend_from_slice(bytemuck::bytes_of(body));
        data
    }

    #[test]
    fn test_layout_sizes() {
        assert_eq!(
            std::mem::size_of::<StateAccount>(),
            32 + 32 + 8 * 3 + 8 * 1461
        );
        assert_eq!(std::mem::size_of::<StakerAccount>(), 32 + 8 * 183 + 8 * 4);
    }

    #[test]
    fn test_decode_state() {
        let mut state = StateAccount::zeroed();
        state.deployed_at = 1_650_000_000;
        state.last_updated_at = 1_650_086_400;
        state.total_num_locked_nfts = 3;
        state.venft_supply[0] = 182_000_000_000;

        // a leading byte misaligns the body inside the buffer
        let mut data = vec![0u8];
        data.extend(encode("State", &state));
        let account = account_with(data[1..].to_vec());

        let decoded: StateAccount = deserialize_anchor_account(&account).unwrap();
        let snapshot = decoded.to_snapshot().unwrap();
        assert_eq!(snapshot.deployed_at(), 1_650_000_000);
        assert_eq!(snapshot.total_locked_count(), 3);
        assert_eq!(snapshot.supply_at(0), 182_000_000_000);
    }

    #[test]
    fn test_decode_staker() {
        let mut staker = StakerAccount::zeroed();
        staker.staker_id = [7; 32];
        staker.venft_balance[1] = 5;
        staker.num_rewards_claimable = 11;

        let account = account_with(encode("Staker", &staker));
        let snapshot = deserialize_anchor_account::<StakerAccount>(&account)
            .unwrap()
            .to_snapshot()
            .unwrap();
        assert_eq!(snapshot.participant_id(), &[7; 32]);
        assert_eq!(snapshot.balance_at(1), 5);
        assert_eq!(snapshot.carried_reward(), 11);
    }

    #[test]
    fn test_rejects_wrong_discriminator_and_short_data() {
        let staker = StakerAccount::zeroed();
        let account = account_with(encode("State", &staker));
        assert!(deserialize_anchor_account::<StakerAccount>(&account).is_err());

        let mut data = encode("Staker", &staker);
        data.truncate(100);
        assert!(deserialize_anchor_account::<StakerAccount>(&account_with(data)).is_err());

        let too_short = account_with(vec![1, 2]);
        assert!(deserialize_anchor_account::<StakerAccount>(&too_short).is_err());
    }
}
