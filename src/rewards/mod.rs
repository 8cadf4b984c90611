pub mod deriver;
pub mod paginator;
pub mod types;
pub mod units;

pub use deriver::{block_reward, derive_rewards};
pub use paginator::{paginate, Page, PageCursor};
pub use types::{RewardEvent, RewardSource};
pub use units::{format_agt, smallest_to_agt, BLOCK_REWARD, GENESIS_REWARD, ONE_AGT};
