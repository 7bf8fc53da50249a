// Domain layer: payloads, outcomes and ports. No transport or runtime code here.

pub mod model;
pub mod ports;
