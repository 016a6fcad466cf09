/// Placeholder address the API uses for a chain's native asset
pub const NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Canonical form of a token or account address
pub fn normalize_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

pub fn is_native(address: &str) -> bool {
    normalize_address(address) == NATIVE_ADDRESS
}
