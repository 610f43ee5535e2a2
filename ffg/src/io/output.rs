use serde::{Deserialize, Serialize};
use vtl_core::io::ext_repr::{ExtPackingRequest, ExtPackingResponse};

use crate::config::FFGConfig;

/// Everything needed to reproduce a solution: the request, the response and the config used
#[derive(Serialize, Deserialize, Clone)]
pub struct FFGOutput {
    #[serde(flatten)]
    pub request: ExtPackingRequest,
    pub response: ExtPackingResponse,
    pub config: FFGConfig,
}
