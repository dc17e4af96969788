//! Static dashboard configuration

/// Static dashboard configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    pub organizations: Organizations,
    pub indexer: Indexer,
    pub gating: Gating,
    pub links: Links,
}

pub struct Organizations {
    pub foundation: &'static str,
    pub technologies: &'static str,
}

/// Algorand indexer used for the wallet balance lookup
pub struct Indexer {
    pub base_url: &'static str,
    /// Seconds between balance polls
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Token that unlocks dashboard features
pub struct Gating {
    pub asset_id: u64,
    pub asset_name: &'static str,
    pub decimals: u32,
}

pub struct Links {
    pub foundation_reports: &'static str,
    pub technologies_reports: &'static str,
    pub explorer: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Algorand Transparency Dashboard",
    tagline: "Foundation and Technologies disclosures, report by report",

    organizations: Organizations {
        foundation: "Algorand Foundation",
        technologies: "Algorand Technologies",
    },

    indexer: Indexer {
        base_url: "https://mainnet-idx.algonode.cloud",
        poll_interval_secs: 30,
        request_timeout_secs: 10,
    },

    gating: Gating {
        asset_id: 1_138_500_612,
        asset_name: "TRNS",
        decimals: 6,
    },

    links: Links {
        foundation_reports: "https://algorand.foundation/transparency-reports",
        technologies_reports: "https://algorandtechnologies.com/transparency",
        explorer: "https://allo.info/account/",
    },
};
