pub mod epsv;
pub mod network;
