mod api_v1;
pub use api_v1::ApiV1;

mod fingerprint;
pub use fingerprint::*;

mod patterns;
pub use patterns::*;

mod response_types;
pub use response_types::*;
