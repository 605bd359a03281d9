mod autoskip;
mod json_contract;
mod tick_options;

pub use autoskip::{select_indices_with_limit, select_visible_indices, select_visible_ticks};
pub use json_contract::{
    AUTOSKIP_REQUEST_JSON_SCHEMA_V1, AUTOSKIP_RESPONSE_JSON_SCHEMA_V1, AutoSkipRequest,
    AutoSkipRequestJsonContractV1, AutoSkipResponse, AutoSkipResponseJsonContractV1,
};
pub use tick_options::TickOptions;
