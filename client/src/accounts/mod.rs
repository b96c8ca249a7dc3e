pub mod decode;
pub mod rpc;
