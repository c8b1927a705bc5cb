//! Endpoint validation: the four checks and their aggregate report

mod prober;
mod report;
mod status;

pub use prober::{parse_target, RpcProber, ValidationHandle};
pub use report::{
    BalanceProbe, BlockNumberProbe, ChainIdProbe, ChainResolution, Generation, ValidationReport,
};
pub use status::CheckStatus;
