/// Bridge domains with a known relay chain name.
///
/// Loaded into storage when the messenger is initialized; the table is
/// fixed for the lifetime of a deployment.
pub const SUPPORTED_DOMAINS: [(u32, &str); 6] = [
    (0, "Ethereum"),
    (1, "Avalanche"),
    (2, "optimism"),
    (3, "arbitrum"),
    (6, "base"),
    (7, "Polygon"),
];
