pub mod global_state;
pub use global_state::*;

pub mod participant_state;
pub use participant_state::*;

pub mod locked_nft;
pub use locked_nft::*;

pub mod observation;
pub use observation::*;
