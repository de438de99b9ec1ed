use cutplan::io::ext_repr::{ExtAdvisory, ExtCutRequest, ExtSolution};
use cutplan::optimize::CutConfig;
use serde::{Deserialize, Serialize};

/// Everything one optimization run produces, bundled for the JSON output
/// file: the request it answered, the config it ran with, the layout and the
/// advisory assessment.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CutOutput {
    pub request: ExtCutRequest,
    pub config: CutConfig,
    pub solution: ExtSolution,
    pub advisory: ExtAdvisory,
}
