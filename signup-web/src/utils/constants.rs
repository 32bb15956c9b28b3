//! Application constants

/// Origin of the airdrop API. Empty keeps requests on the page's own origin.
pub const API_BASE: &str = "";

/// Query parameter carrying a referral code on shared signup links.
pub const REFERRAL_QUERY_PARAM: &str = "ref";

pub const INVALID_BORDER_STYLE: &str = "border-color: #ff4444;";
