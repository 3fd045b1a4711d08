pub mod ec_point_formats;
pub mod extended_master_secret;
pub mod server_name;
pub mod signature_algorithms;
pub mod supported_groups;
pub mod use_srtp;
